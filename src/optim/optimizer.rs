//! Optimizer learning-rate surface

/// Learning-rate surface of an optimizer
///
/// Schedulers only ever read and write the learning rate, so this is the
/// whole contract a host optimizer has to satisfy.
pub trait Optimizer {
    /// Get learning rate
    fn lr(&self) -> f32;

    /// Set learning rate
    fn set_lr(&mut self, lr: f32);
}

impl<O: Optimizer + ?Sized> Optimizer for &mut O {
    fn lr(&self) -> f32 {
        (**self).lr()
    }

    fn set_lr(&mut self, lr: f32) {
        (**self).set_lr(lr);
    }
}

impl<O: Optimizer + ?Sized> Optimizer for Box<O> {
    fn lr(&self) -> f32 {
        (**self).lr()
    }

    fn set_lr(&mut self, lr: f32) {
        (**self).set_lr(lr);
    }
}

/// Adapts a getter/setter pair into an [`Optimizer`]
///
/// Useful when the host's optimizer lives behind its own object model and
/// only exposes accessor functions.
///
/// # Example
///
/// ```rust
/// use ciclo::optim::{LrAccessor, Optimizer};
/// use std::cell::Cell;
///
/// let lr = Cell::new(0.1_f32);
/// let mut sink = LrAccessor::new(|| lr.get(), |v| lr.set(v));
/// sink.set_lr(0.01);
/// assert_eq!(lr.get(), 0.01);
/// ```
pub struct LrAccessor<G, S>
where
    G: Fn() -> f32,
    S: FnMut(f32),
{
    get: G,
    set: S,
}

impl<G, S> LrAccessor<G, S>
where
    G: Fn() -> f32,
    S: FnMut(f32),
{
    /// Create a sink from accessor closures
    pub fn new(get: G, set: S) -> Self {
        Self { get, set }
    }
}

impl<G, S> Optimizer for LrAccessor<G, S>
where
    G: Fn() -> f32,
    S: FnMut(f32),
{
    fn lr(&self) -> f32 {
        (self.get)()
    }

    fn set_lr(&mut self, lr: f32) {
        (self.set)(lr);
    }
}
