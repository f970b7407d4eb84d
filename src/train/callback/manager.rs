//! Callback manager for dispatching events to multiple callbacks

use super::traits::{CallbackContext, TrainerCallback};

/// Dispatches training events to every registered callback
///
/// Callbacks run in registration order against the same context, so a later
/// callback sees (and may overwrite) the rate an earlier one wrote.
pub struct CallbackManager {
    callbacks: Vec<Box<dyn TrainerCallback>>,
}

impl CallbackManager {
    /// Create new callback manager
    pub fn new() -> Self {
        Self { callbacks: Vec::new() }
    }

    /// Add a callback
    pub fn add<C: TrainerCallback + 'static>(&mut self, callback: C) {
        tracing::debug!(callback = callback.name(), "registered callback");
        self.callbacks.push(Box::new(callback));
    }

    /// Check if no callbacks are registered
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    /// Get number of callbacks
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    /// Names of registered callbacks, in dispatch order
    pub fn names(&self) -> Vec<&'static str> {
        self.callbacks.iter().map(|cb| cb.name()).collect()
    }

    /// Fire train begin event
    pub fn on_train_begin(&mut self, ctx: &mut CallbackContext) {
        tracing::debug!(callbacks = self.callbacks.len(), lr = ctx.lr, "train begin");
        self.dispatch(ctx, |cb, ctx| cb.on_train_begin(ctx));
    }

    /// Fire epoch end event
    pub fn on_epoch_end(&mut self, ctx: &mut CallbackContext) {
        self.dispatch(ctx, |cb, ctx| cb.on_epoch_end(ctx));
        tracing::trace!(epoch = ctx.epoch, lr = ctx.lr, "epoch end dispatched");
    }

    /// Fire step end event
    pub fn on_step_end(&mut self, ctx: &mut CallbackContext) {
        self.dispatch(ctx, |cb, ctx| cb.on_step_end(ctx));
        tracing::trace!(step = ctx.global_step, lr = ctx.lr, "step end dispatched");
    }

    fn dispatch<F>(&mut self, ctx: &mut CallbackContext, mut event: F)
    where
        F: FnMut(&mut Box<dyn TrainerCallback>, &mut CallbackContext),
    {
        for cb in &mut self.callbacks {
            event(cb, ctx);
        }
    }
}

impl Default for CallbackManager {
    fn default() -> Self {
        Self::new()
    }
}
