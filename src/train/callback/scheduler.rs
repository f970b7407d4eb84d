//! Cyclical learning rate callback

use super::history::History;
use super::traits::{CallbackContext, TrainerCallback};
use crate::config::CyclicSpec;
use crate::error::Result;
use crate::optim::{CyclicLR, Optimizer};

/// Callback that drives a [`CyclicLR`] from training events
///
/// Resets the rate to `min_lr` when training begins, then cycles once per
/// step or once per epoch. Each cycle records `iteration`, `lr` and every
/// metric in [`CallbackContext::logs`] into its [`History`].
///
/// # Example
///
/// ```rust
/// use ciclo::optim::CyclicLR;
/// use ciclo::train::{CallbackContext, CyclicLRCallback, TrainerCallback};
///
/// let scheduler = CyclicLR::triangular(4, 0.006, 0.001).unwrap();
/// let mut callback = CyclicLRCallback::per_step(scheduler);
///
/// let mut ctx = CallbackContext::with_lr(0.1);
/// callback.on_train_begin(&mut ctx);
/// assert_eq!(ctx.lr, 0.001);
///
/// callback.on_step_end(&mut ctx);
/// assert_eq!(callback.history().get("iteration"), Some(&[1.0][..]));
/// ```
#[derive(Debug, Clone)]
pub struct CyclicLRCallback {
    scheduler: CyclicLR,
    per_step: bool,
    history: History,
}

impl CyclicLRCallback {
    /// Create callback that cycles the scheduler per epoch
    pub fn per_epoch(scheduler: CyclicLR) -> Self {
        Self { scheduler, per_step: false, history: History::new() }
    }

    /// Create callback that cycles the scheduler per step
    pub fn per_step(scheduler: CyclicLR) -> Self {
        Self { scheduler, per_step: true, history: History::new() }
    }

    /// Build scheduler and cadence from a validated spec
    pub fn from_spec(spec: &CyclicSpec) -> Result<Self> {
        let scheduler = spec.build()?;
        Ok(if spec.per_step { Self::per_step(scheduler) } else { Self::per_epoch(scheduler) })
    }

    /// Whether the scheduler advances on step boundaries
    pub fn is_per_step(&self) -> bool {
        self.per_step
    }

    /// Rate the next cycle will produce
    pub fn current_lr(&self) -> f32 {
        self.scheduler.peek_lr()
    }

    /// Underlying scheduler
    pub fn scheduler(&self) -> &CyclicLR {
        &self.scheduler
    }

    /// Recorded history
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Consume the callback, returning its history
    pub fn into_history(self) -> History {
        self.history
    }

    fn advance(&mut self, ctx: &mut CallbackContext) {
        self.scheduler.cycle(ctx);
        self.history.record("iteration", self.scheduler.counter() as f32);
        self.history.record("lr", ctx.lr());
        for (name, value) in &ctx.logs {
            self.history.record(name, *value);
        }
    }
}

impl TrainerCallback for CyclicLRCallback {
    fn on_train_begin(&mut self, ctx: &mut CallbackContext) {
        self.scheduler.reset_to_floor(ctx);
    }

    fn on_epoch_end(&mut self, ctx: &mut CallbackContext) {
        if !self.per_step {
            self.advance(ctx);
        }
    }

    fn on_step_end(&mut self, ctx: &mut CallbackContext) {
        if self.per_step {
            self.advance(ctx);
        }
    }

    fn name(&self) -> &'static str {
        "CyclicLRCallback"
    }
}
