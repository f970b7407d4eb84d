//! Cyclical learning rate scheduling
//!
//! Oscillates an optimizer's learning rate between two bounds along a
//! triangular waveform, with optional per-cycle decay:
//! - [`optim`] - `CyclicLR`, the waveform registry and the optimizer rate sink
//! - [`train`] - Callback layer for driving a scheduler from a host loop
//! - [`config`] - YAML schedule specifications
//! - [`error`] - Error types
//!
//! # Example
//!
//! ```rust
//! use ciclo::optim::{stepsize_candidates, CyclicLR, LrAccessor};
//! use std::cell::Cell;
//!
//! let stepsize = stepsize_candidates(32, 3200).unwrap()[0];
//! let mut scheduler = CyclicLR::new(stepsize, 0.006, 0.001, "triangular", 0.0).unwrap();
//!
//! let lr = Cell::new(0.0_f32);
//! let mut optimizer = LrAccessor::new(|| lr.get(), |v| lr.set(v));
//! scheduler.reset_to_floor(&mut optimizer);
//! for _ in 0..stepsize {
//!     scheduler.cycle(&mut optimizer);
//! }
//! assert!(lr.get() > 0.001);
//! ```

pub mod config;
pub mod error;
pub mod optim;
pub mod train;

pub use error::{Result, ScheduleError};
