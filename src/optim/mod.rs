//! Optimizer learning-rate surface and schedulers

mod optimizer;
mod scheduler;

pub use optimizer::{LrAccessor, Optimizer};
pub(crate) use scheduler::{check_bounds, check_decay};
pub use scheduler::{
    stepsize_candidates, triangular, triangular2, CyclicLR, Waveform, WaveformFn,
    WaveformRegistry, WaveformSource, TRIANGULAR, TRIANGULAR2,
};
