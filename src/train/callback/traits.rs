//! Core traits and types for the callback system
//!
//! This module provides the foundational types for training callbacks:
//! - `CallbackContext` - State passed to callbacks; doubles as the rate sink
//! - `TrainerCallback` - The trait all callbacks implement

use crate::optim::Optimizer;

/// Context passed to callbacks with current training state
///
/// Callbacks that schedule the learning rate write it into `lr`; the host
/// applies `lr` to its optimizer once all callbacks have run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CallbackContext {
    /// Current epoch (0-indexed)
    pub epoch: usize,
    /// Current step within epoch
    pub step: usize,
    /// Global step count
    pub global_step: usize,
    /// Current learning rate
    pub lr: f32,
    /// Extra metrics reported for this boundary, in report order
    pub logs: Vec<(String, f32)>,
}

impl CallbackContext {
    /// Context carrying the optimizer's current learning rate
    pub fn with_lr(lr: f32) -> Self {
        Self { lr, ..Default::default() }
    }

    /// Append a metric to report at this boundary
    pub fn log(&mut self, name: impl Into<String>, value: f32) -> &mut Self {
        self.logs.push((name.into(), value));
        self
    }
}

impl Optimizer for CallbackContext {
    fn lr(&self) -> f32 {
        self.lr
    }

    fn set_lr(&mut self, lr: f32) {
        self.lr = lr;
    }
}

/// Trait for training callbacks
///
/// Implement this trait to hook into training events. All methods have
/// default no-op implementations, so you only need to implement the
/// events you care about. Callbacks steer training only through the
/// context they are handed.
pub trait TrainerCallback: Send {
    /// Called before training starts
    fn on_train_begin(&mut self, _ctx: &mut CallbackContext) {}

    /// Called after each epoch
    fn on_epoch_end(&mut self, _ctx: &mut CallbackContext) {}

    /// Called after each training step (batch)
    fn on_step_end(&mut self, _ctx: &mut CallbackContext) {}

    /// Get callback name for logging
    fn name(&self) -> &'static str {
        "TrainerCallback"
    }
}
