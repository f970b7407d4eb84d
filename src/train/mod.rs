//! Training-loop integration
//!
//! The crate does not own a training loop. Hosts fire callback events at
//! their boundaries and apply [`CallbackContext::lr`] to their optimizer.
//!
//! # Example
//!
//! ```rust
//! use ciclo::optim::CyclicLR;
//! use ciclo::train::{CallbackContext, CallbackManager, CyclicLRCallback};
//!
//! let scheduler = CyclicLR::triangular(2, 0.01, 0.001).unwrap();
//! let mut manager = CallbackManager::new();
//! manager.add(CyclicLRCallback::per_step(scheduler));
//!
//! let mut ctx = CallbackContext::with_lr(0.1);
//! manager.on_train_begin(&mut ctx);
//! for step in 0..4 {
//!     ctx.step = step;
//!     ctx.global_step = step;
//!     manager.on_step_end(&mut ctx);
//!     // optimizer.set_lr(ctx.lr);
//! }
//! ```

pub mod callback;

pub use callback::{CallbackContext, CallbackManager, CyclicLRCallback, History, TrainerCallback};
