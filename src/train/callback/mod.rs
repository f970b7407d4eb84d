//! Callback system for training events
//!
//! Provides hooks a host training loop fires at its boundaries:
//! - `on_train_begin`
//! - `on_epoch_end`
//! - `on_step_end`
//!
//! # Example
//!
//! ```rust
//! use ciclo::train::callback::{CallbackContext, TrainerCallback};
//!
//! struct LrFloor(f32);
//!
//! impl TrainerCallback for LrFloor {
//!     fn on_step_end(&mut self, ctx: &mut CallbackContext) {
//!         ctx.lr = ctx.lr.max(self.0);
//!     }
//! }
//! ```

mod history;
mod manager;
mod scheduler;
mod traits;

pub use history::History;
pub use manager::CallbackManager;
pub use scheduler::CyclicLRCallback;
pub use traits::{CallbackContext, TrainerCallback};
