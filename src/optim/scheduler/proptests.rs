//! Property-based tests for cyclical schedules

use super::waveform::decayed_bounds;
use super::*;
use crate::optim::LrAccessor;
use proptest::prelude::*;
use std::cell::Cell;

fn arb_bounds() -> impl Strategy<Value = (f32, f32)> {
    (1e-6f32..0.1, 1.01f32..100.0).prop_map(|(min_lr, ratio)| (min_lr, min_lr * ratio))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_undecayed_rate_within_bounds(
        (min_lr, max_lr) in arb_bounds(),
        stepsize in 1usize..64,
        steps in 1usize..300,
    ) {
        let cell = Cell::new(0.0f32);
        let mut sink = LrAccessor::new(|| cell.get(), |v| cell.set(v));
        let mut scheduler = CyclicLR::triangular(stepsize, max_lr, min_lr).unwrap();

        for _ in 0..steps {
            let lr = scheduler.cycle(&mut sink);
            prop_assert!(lr >= min_lr && lr <= max_lr,
                "lr {} outside [{}, {}]", lr, min_lr, max_lr);
        }
    }

    #[test]
    fn prop_undecayed_is_periodic(
        (min_lr, max_lr) in arb_bounds(),
        stepsize in 1usize..64,
        counter in 0usize..10_000,
    ) {
        let here = triangular(counter, stepsize, min_lr, max_lr, 0.0);
        let next = triangular(counter + 2 * stepsize, stepsize, min_lr, max_lr, 0.0);
        prop_assert_eq!(here, next);
    }

    #[test]
    fn prop_trough_and_peak_exact(
        (min_lr, max_lr) in arb_bounds(),
        stepsize in 1usize..1000,
    ) {
        prop_assert_eq!(triangular(0, stepsize, min_lr, max_lr, 0.0), min_lr);
        let peak = triangular(stepsize, stepsize, min_lr, max_lr, 0.0);
        prop_assert!(peak <= max_lr, "peak {} above ceiling {}", peak, max_lr);
        prop_assert!((peak - max_lr).abs() <= max_lr * 1e-6);
    }

    #[test]
    fn prop_decayed_peaks_strictly_decrease(
        (min_lr, max_lr) in arb_bounds(),
        stepsize in 1usize..32,
        decay in 0.05f32..0.9,
        cycles in 2usize..8,
    ) {
        let peak = |k: usize| triangular((2 * k + 1) * stepsize, stepsize, min_lr, max_lr, decay);
        for k in 0..cycles {
            prop_assert!(peak(k + 1) < peak(k), "cycle {} peak did not shrink", k + 1);
        }
    }

    #[test]
    fn prop_small_decay_peaks_strictly_decrease(
        (min_lr, max_lr) in arb_bounds(),
        stepsize in 1usize..32,
        decay in 1e-5f32..0.05,
        cycles in 2usize..8,
    ) {
        let peak = |k: usize| triangular((2 * k + 1) * stepsize, stepsize, min_lr, max_lr, decay);
        for k in 0..cycles {
            prop_assert!(peak(k + 1) < peak(k),
                "decay {}: cycle {} peak {} not below {}", decay, k + 1, peak(k + 1), peak(k));
        }
    }

    #[test]
    fn prop_decayed_rate_within_cycle_bounds(
        (min_lr, max_lr) in arb_bounds(),
        stepsize in 1usize..32,
        decay in 0.0f32..2.0,
        counter in 0usize..2000,
    ) {
        let rate = triangular(counter, stepsize, min_lr, max_lr, decay);
        let (lo, hi) = decayed_bounds(min_lr, max_lr, decay, 1 + counter / (2 * stepsize));
        prop_assert!(lo <= hi, "cycle bounds inverted: [{}, {}]", lo, hi);
        prop_assert!(lo <= rate && rate <= hi,
            "rate {} outside cycle bounds [{}, {}] at counter {}", rate, lo, hi, counter);
        prop_assert!(hi <= max_lr);
    }

    #[test]
    fn prop_reset_always_writes_floor(
        (min_lr, max_lr) in arb_bounds(),
        stepsize in 1usize..16,
        warmup in 0usize..50,
    ) {
        let cell = Cell::new(0.0f32);
        let mut sink = LrAccessor::new(|| cell.get(), |v| cell.set(v));
        let mut scheduler = CyclicLR::triangular(stepsize, max_lr, min_lr).unwrap();
        for _ in 0..warmup {
            scheduler.cycle(&mut sink);
        }
        scheduler.reset_to_floor(&mut sink);
        prop_assert_eq!(cell.get(), min_lr);
        prop_assert_eq!(scheduler.counter(), warmup);
    }

    #[test]
    fn prop_stepsize_candidates_count(batch_size in 1usize..512, n_samples in 0usize..1_000_000) {
        let candidates = stepsize_candidates(batch_size, n_samples).unwrap();
        prop_assert_eq!(candidates.len(), 8);
        prop_assert!(candidates.windows(2).all(|w| w[0] <= w[1]));
    }
}
