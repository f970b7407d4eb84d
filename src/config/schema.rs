//! YAML schema for declarative cyclical schedules

use super::validate::validate_spec;
use crate::error::Result;
use crate::optim::{CyclicLR, WaveformRegistry, TRIANGULAR};
use serde::{Deserialize, Serialize};

fn default_waveform() -> String {
    TRIANGULAR.to_string()
}

fn default_per_step() -> bool {
    true
}

/// Complete cyclical schedule specification
///
/// ```yaml
/// stepsize: 400
/// max_lr: 0.006
/// min_lr: 0.001
/// waveform: triangular2
/// decay: 0.0
/// per_step: true
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CyclicSpec {
    /// Half-period in counter units; signed so that negative values in a
    /// config file are reported instead of failing to parse
    pub stepsize: i64,

    /// Upper bound of the oscillation
    pub max_lr: f32,

    /// Lower bound of the oscillation
    pub min_lr: f32,

    /// Registered waveform name
    #[serde(default = "default_waveform")]
    pub waveform: String,

    /// Per-cycle decay
    #[serde(default)]
    pub decay: f32,

    /// Cycle on step boundaries (true) or epoch boundaries (false)
    #[serde(default = "default_per_step")]
    pub per_step: bool,
}

impl CyclicSpec {
    /// Triangular, undecayed, per-step spec
    pub fn new(stepsize: i64, max_lr: f32, min_lr: f32) -> Self {
        Self {
            stepsize,
            max_lr,
            min_lr,
            waveform: default_waveform(),
            decay: 0.0,
            per_step: default_per_step(),
        }
    }

    /// Validate and build a scheduler from the built-in registry
    pub fn build(&self) -> Result<CyclicLR> {
        self.build_with(&WaveformRegistry::builtin())
    }

    /// Validate and build a scheduler resolving names in `registry`
    pub fn build_with(&self, registry: &WaveformRegistry) -> Result<CyclicLR> {
        validate_spec(self, registry)?;
        // validate_spec guarantees stepsize > 0
        let stepsize = self.stepsize as usize;
        CyclicLR::with_registry(
            stepsize,
            self.max_lr,
            self.min_lr,
            self.waveform.as_str(),
            self.decay,
            registry,
        )
    }
}
