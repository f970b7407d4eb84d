//! Stepsize suggestions

use crate::error::{Result, ScheduleError};

/// Multipliers of an epoch used for suggested half-periods
const EPOCH_MULTIPLIERS: std::ops::RangeInclusive<usize> = 2..=9;

/// Suggest stepsizes for a dataset
///
/// Returns `floor(m * (n_samples / batch_size) / 2)` for `m` in `2..=9`,
/// i.e. half-periods spanning one to four and a half epochs of batches.
///
/// # Example
///
/// ```rust
/// use ciclo::optim::stepsize_candidates;
///
/// let candidates = stepsize_candidates(32, 3200).unwrap();
/// assert_eq!(candidates, vec![100, 150, 200, 250, 300, 350, 400, 450]);
/// ```
pub fn stepsize_candidates(batch_size: usize, n_samples: usize) -> Result<Vec<usize>> {
    if batch_size == 0 {
        return Err(ScheduleError::config("batch_size", "must be > 0, got 0"));
    }

    let batches_per_epoch = n_samples as f64 / batch_size as f64;
    Ok(EPOCH_MULTIPLIERS
        .map(|m| (m as f64 * batches_per_epoch / 2.0).floor() as usize)
        .collect())
}
