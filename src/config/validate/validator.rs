//! Configuration validation logic

use crate::config::schema::CyclicSpec;
use crate::error::{Result, ScheduleError};
use crate::optim::{check_bounds, check_decay, WaveformRegistry};

/// Validate a schedule specification
///
/// Checks:
/// - Stepsize is positive
/// - Bounds are positive, finite and ordered
/// - Decay is finite and non-negative
/// - Waveform is registered in `registry`
pub fn validate_spec(spec: &CyclicSpec, registry: &WaveformRegistry) -> Result<()> {
    if spec.stepsize <= 0 {
        return Err(ScheduleError::config(
            "stepsize",
            format!("must be > 0, got {}", spec.stepsize),
        ));
    }

    check_bounds(spec.max_lr, spec.min_lr)?;
    check_decay(spec.decay)?;

    if !registry.contains(&spec.waveform) {
        return Err(ScheduleError::UnknownWaveform {
            name: spec.waveform.clone(),
            available: registry.names(),
        });
    }

    Ok(())
}
