//! Learning rate schedulers
//!
//! Provides cyclical learning rate scheduling:
//! - `CyclicLR` - Oscillates between bounds along a registered waveform
//! - `WaveformRegistry` - Name-to-function table of waveforms
//! - `stepsize_candidates` - Suggested half-periods for a dataset

mod cyclic;
mod stepsize;
mod waveform;

#[cfg(test)]
mod proptests;

pub use cyclic::CyclicLR;
pub(crate) use cyclic::{check_bounds, check_decay};
pub use stepsize::stepsize_candidates;
pub use waveform::{
    triangular, triangular2, Waveform, WaveformFn, WaveformRegistry, WaveformSource, TRIANGULAR,
    TRIANGULAR2,
};
