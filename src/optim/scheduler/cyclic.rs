//! Cyclical learning rate scheduler

use super::waveform::{Waveform, WaveformRegistry, WaveformSource, TRIANGULAR};
use crate::error::{Result, ScheduleError};
use crate::optim::Optimizer;

/// Cyclical Learning Rate Scheduler
///
/// Oscillates the learning rate between `min_lr` and `max_lr` with a
/// waveform of period `2 * stepsize`. The counter advances only through
/// [`CyclicLR::cycle`].
///
/// # Example
///
/// ```rust
/// use ciclo::optim::{CyclicLR, Optimizer};
///
/// struct Sgd { lr: f32 }
/// impl Optimizer for Sgd {
///     fn lr(&self) -> f32 { self.lr }
///     fn set_lr(&mut self, lr: f32) { self.lr = lr; }
/// }
///
/// let mut optimizer = Sgd { lr: 0.1 };
/// let mut scheduler = CyclicLR::new(4, 0.006, 0.001, "triangular", 0.0).unwrap();
///
/// scheduler.reset_to_floor(&mut optimizer);
/// assert_eq!(optimizer.lr(), 0.001);
///
/// let rate = scheduler.cycle(&mut optimizer);
/// assert_eq!(rate, 0.001);
/// assert_eq!(scheduler.counter(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct CyclicLR {
    stepsize: usize,
    max_lr: f32,
    min_lr: f32,
    decay: f32,
    waveform: Waveform,
    counter: usize,
}

impl CyclicLR {
    /// Create a new cyclical scheduler resolving names in the built-in registry
    ///
    /// # Arguments
    /// * `stepsize` - Half the cycle period, in counter units (> 0)
    /// * `max_lr` - Upper bound of the oscillation (> `min_lr`)
    /// * `min_lr` - Lower bound of the oscillation (> 0)
    /// * `waveform` - Registry name or a custom [`Waveform`]
    /// * `decay` - Per-cycle attenuation (>= 0)
    pub fn new(
        stepsize: usize,
        max_lr: f32,
        min_lr: f32,
        waveform: impl Into<WaveformSource>,
        decay: f32,
    ) -> Result<Self> {
        Self::with_registry(stepsize, max_lr, min_lr, waveform, decay, &WaveformRegistry::builtin())
    }

    /// Create a triangular scheduler without decay
    pub fn triangular(stepsize: usize, max_lr: f32, min_lr: f32) -> Result<Self> {
        Self::new(stepsize, max_lr, min_lr, TRIANGULAR, 0.0)
    }

    /// Create a scheduler resolving waveform names in `registry`
    pub fn with_registry(
        stepsize: usize,
        max_lr: f32,
        min_lr: f32,
        waveform: impl Into<WaveformSource>,
        decay: f32,
        registry: &WaveformRegistry,
    ) -> Result<Self> {
        check_stepsize(stepsize)?;
        check_bounds(max_lr, min_lr)?;
        check_decay(decay)?;
        let waveform = waveform.into().resolve(registry)?;

        tracing::debug!(
            stepsize,
            max_lr,
            min_lr,
            decay,
            waveform = waveform.name(),
            "created cyclic lr scheduler"
        );

        Ok(Self { stepsize, max_lr, min_lr, decay, waveform, counter: 0 })
    }

    /// Write `min_lr` to the optimizer, bypassing the waveform
    ///
    /// Called once before training. The counter is left untouched.
    pub fn reset_to_floor<O: Optimizer + ?Sized>(&self, optimizer: &mut O) {
        optimizer.set_lr(self.min_lr);
        tracing::debug!(lr = self.min_lr, counter = self.counter, "reset lr to floor");
    }

    /// Compute the rate for the current counter, apply it, and advance
    pub fn cycle<O: Optimizer + ?Sized>(&mut self, optimizer: &mut O) -> f32 {
        let lr = self.peek_lr();
        optimizer.set_lr(lr);
        tracing::trace!(counter = self.counter, lr, "cycled lr");
        self.counter += 1;
        lr
    }

    /// Rate the next [`CyclicLR::cycle`] call will produce
    pub fn peek_lr(&self) -> f32 {
        self.waveform.eval(self.counter, self.stepsize, self.min_lr, self.max_lr, self.decay)
    }

    /// Number of completed `cycle` calls
    pub fn counter(&self) -> usize {
        self.counter
    }

    /// Half-period length
    pub fn stepsize(&self) -> usize {
        self.stepsize
    }

    /// Lower bound
    pub fn min_lr(&self) -> f32 {
        self.min_lr
    }

    /// Upper bound
    pub fn max_lr(&self) -> f32 {
        self.max_lr
    }

    /// Per-cycle decay factor
    pub fn decay(&self) -> f32 {
        self.decay
    }

    /// Name of the active waveform
    pub fn waveform_name(&self) -> &str {
        self.waveform.name()
    }
}

pub(crate) fn check_stepsize(stepsize: usize) -> Result<()> {
    if stepsize == 0 {
        return Err(ScheduleError::config("stepsize", "must be > 0, got 0"));
    }
    Ok(())
}

pub(crate) fn check_bounds(max_lr: f32, min_lr: f32) -> Result<()> {
    if !min_lr.is_finite() || min_lr <= 0.0 {
        return Err(ScheduleError::config("min_lr", format!("must be finite and > 0, got {min_lr}")));
    }
    if !max_lr.is_finite() || max_lr <= 0.0 {
        return Err(ScheduleError::config("max_lr", format!("must be finite and > 0, got {max_lr}")));
    }
    if max_lr <= min_lr {
        return Err(ScheduleError::config(
            "max_lr",
            format!("must exceed min_lr, got max_lr={max_lr} min_lr={min_lr}"),
        ));
    }
    Ok(())
}

pub(crate) fn check_decay(decay: f32) -> Result<()> {
    if !decay.is_finite() || decay < 0.0 {
        return Err(ScheduleError::config("decay", format!("must be finite and >= 0, got {decay}")));
    }
    Ok(())
}
