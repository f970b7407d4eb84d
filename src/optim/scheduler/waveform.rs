//! Cyclical waveforms and the name-to-function registry

use crate::error::{Result, ScheduleError};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Name of the built-in triangular waveform
pub const TRIANGULAR: &str = "triangular";

/// Name of the built-in triangular waveform with amplitude halved every cycle
pub const TRIANGULAR2: &str = "triangular2";

/// Signature every waveform satisfies:
/// `(counter, stepsize, min_lr, max_lr, decay) -> lr`
pub type WaveformFn = dyn Fn(usize, usize, f32, f32, f32) -> f32 + Send + Sync;

/// Triangular cyclical learning rate
///
/// Ramps linearly from `min_lr` to `max_lr` over `stepsize` counter units and
/// back down over the next `stepsize`. With `decay > 0` both bounds shrink by
/// `(1 - decay)` per completed cycle.
///
/// Formula:
/// - cycle = floor(1 + counter / (2 * stepsize))
/// - x = |counter / stepsize - 2 * cycle + 1|
/// - lr = lo + (hi - lo) * max(0, 1 - x)
///
/// where `lo`/`hi` are the bounds scaled by `(1 - decay)^(cycle - 1)`.
pub fn triangular(counter: usize, stepsize: usize, min_lr: f32, max_lr: f32, decay: f32) -> f32 {
    if stepsize == 0 {
        return min_lr;
    }

    let period = stepsize.saturating_mul(2);
    let cycle = 1 + counter / period;
    // counter / stepsize - 2 * cycle + 1 reduces to position / stepsize - 1
    let position = counter % period;
    let x = (position as f32 / stepsize as f32 - 1.0).abs();
    let height = (1.0 - x).max(0.0);

    let (lo, hi) = decayed_bounds(min_lr, max_lr, decay, cycle);
    // At the peak the f32 interpolation can round one ulp past the ceiling
    (lo + (hi - lo) * height).min(hi)
}

/// [`triangular`] with `decay` fixed at 0.5, so the peak halves every cycle
pub fn triangular2(counter: usize, stepsize: usize, min_lr: f32, max_lr: f32, _decay: f32) -> f32 {
    triangular(counter, stepsize, min_lr, max_lr, 0.5)
}

/// Bounds for the given 1-based cycle after per-cycle decay
///
/// The floor never rises above `min_lr` and only reaches zero when
/// `decay >= 1`. The ceiling never drops below the floor.
///
/// The factor `(1 - decay)^(cycle - 1)` is evaluated in f64 as
/// `exp((cycle - 1) * ln(1 - decay))`, so decays below f32 resolution still
/// accumulate over many cycles.
pub(crate) fn decayed_bounds(min_lr: f32, max_lr: f32, decay: f32, cycle: usize) -> (f32, f32) {
    if decay <= 0.0 || cycle <= 1 {
        return (min_lr, max_lr.max(min_lr));
    }

    let factor = if decay >= 1.0 {
        0.0
    } else {
        ((cycle - 1) as f64 * (-f64::from(decay)).ln_1p()).exp()
    };

    let mut lo = ((f64::from(min_lr) * factor) as f32).min(min_lr);
    if decay < 1.0 {
        lo = lo.max(f32::MIN_POSITIVE);
    }
    let hi = ((f64::from(max_lr) * factor) as f32).min(max_lr).max(lo);
    (lo, hi)
}

/// A named waveform function
#[derive(Clone)]
pub struct Waveform {
    name: String,
    func: Arc<WaveformFn>,
}

impl Waveform {
    /// Wrap a custom function as a waveform
    ///
    /// The function must be pure: identical arguments yield identical output.
    pub fn custom<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(usize, usize, f32, f32, f32) -> f32 + Send + Sync + 'static,
    {
        Self { name: name.into(), func: Arc::new(func) }
    }

    fn from_shared(name: &str, func: Arc<WaveformFn>) -> Self {
        Self { name: name.to_string(), func }
    }

    /// Waveform name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Evaluate the waveform
    pub fn eval(&self, counter: usize, stepsize: usize, min_lr: f32, max_lr: f32, decay: f32) -> f32 {
        (self.func)(counter, stepsize, min_lr, max_lr, decay)
    }
}

impl fmt::Debug for Waveform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Waveform").field("name", &self.name).finish_non_exhaustive()
    }
}

/// How a scheduler picks its waveform: by registry name or directly
#[derive(Debug, Clone)]
pub enum WaveformSource {
    /// Look the name up in a registry
    Named(String),
    /// Use this waveform as is
    Custom(Waveform),
}

impl WaveformSource {
    /// Resolve to a concrete waveform
    pub fn resolve(self, registry: &WaveformRegistry) -> Result<Waveform> {
        match self {
            Self::Named(name) => registry.resolve(&name),
            Self::Custom(waveform) => Ok(waveform),
        }
    }
}

impl From<&str> for WaveformSource {
    fn from(name: &str) -> Self {
        Self::Named(name.to_string())
    }
}

impl From<String> for WaveformSource {
    fn from(name: String) -> Self {
        Self::Named(name)
    }
}

impl From<Waveform> for WaveformSource {
    fn from(waveform: Waveform) -> Self {
        Self::Custom(waveform)
    }
}

/// Mapping from waveform name to function
///
/// Names are resolved once, when a scheduler is built.
#[derive(Clone)]
pub struct WaveformRegistry {
    entries: BTreeMap<String, Arc<WaveformFn>>,
}

impl WaveformRegistry {
    /// Registry with no entries
    pub fn empty() -> Self {
        Self { entries: BTreeMap::new() }
    }

    /// Registry holding `triangular` and `triangular2`
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.entries.insert(TRIANGULAR.to_string(), Arc::new(triangular));
        registry.entries.insert(TRIANGULAR2.to_string(), Arc::new(triangular2));
        registry
    }

    /// Register a waveform, replacing any entry with the same name
    pub fn register<F>(&mut self, name: impl Into<String>, func: F) -> &mut Self
    where
        F: Fn(usize, usize, f32, f32, f32) -> f32 + Send + Sync + 'static,
    {
        let name = name.into();
        if self.entries.insert(name.clone(), Arc::new(func)).is_some() {
            tracing::warn!(waveform = %name, "replaced registered waveform");
        }
        self
    }

    /// Check whether `name` is registered
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names in sorted order
    pub fn names(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    /// Number of registered waveforms
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no waveforms are registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a waveform by name
    pub fn resolve(&self, name: &str) -> Result<Waveform> {
        self.entries
            .get(name)
            .map(|func| Waveform::from_shared(name, Arc::clone(func)))
            .ok_or_else(|| ScheduleError::UnknownWaveform {
                name: name.to_string(),
                available: self.names(),
            })
    }
}

impl Default for WaveformRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl fmt::Debug for WaveformRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WaveformRegistry").field("names", &self.names()).finish()
    }
}
