//! Loading schedule specifications from YAML

use super::schema::CyclicSpec;
use super::validate::validate_spec;
use crate::error::{Result, ScheduleError};
use crate::optim::WaveformRegistry;
use std::fs;
use std::path::Path;

/// Parse a spec from a YAML string without validating it
pub fn parse_spec(yaml: &str) -> Result<CyclicSpec> {
    serde_yaml::from_str(yaml).map_err(|e| ScheduleError::Parse { message: e.to_string() })
}

/// Load and validate a spec from a YAML file
///
/// Validation uses the built-in waveform registry; specs naming custom
/// waveforms should be parsed with [`parse_spec`] and built with
/// [`CyclicSpec::build_with`].
pub fn load_spec<P: AsRef<Path>>(config_path: P) -> Result<CyclicSpec> {
    let path = config_path.as_ref();
    let yaml_content = fs::read_to_string(path)
        .map_err(|e| ScheduleError::io(format!("failed to read config file {}", path.display()), e))?;

    let spec = parse_spec(&yaml_content)?;
    validate_spec(&spec, &WaveformRegistry::builtin())?;

    tracing::info!(
        path = %path.display(),
        stepsize = spec.stepsize,
        waveform = %spec.waveform,
        "loaded cyclic schedule config"
    );
    Ok(spec)
}
