//! Property-based tests for configuration validation

use super::validator::validate_spec;
use crate::config::schema::CyclicSpec;
use crate::error::ScheduleError;
use crate::optim::WaveformRegistry;
use proptest::prelude::*;

fn arb_valid_spec() -> impl Strategy<Value = CyclicSpec> {
    (
        1i64..100_000,                              // stepsize
        1e-7f32..0.1,                               // min_lr
        1.01f32..1000.0,                            // max_lr / min_lr
        0.0f32..1.0,                                // decay
        prop::sample::select(vec!["triangular", "triangular2"]),
        any::<bool>(),                              // per_step
    )
        .prop_map(|(stepsize, min_lr, ratio, decay, waveform, per_step)| CyclicSpec {
            stepsize,
            max_lr: min_lr * ratio,
            min_lr,
            waveform: waveform.to_string(),
            decay,
            per_step,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_valid_spec_passes(spec in arb_valid_spec()) {
        prop_assert!(validate_spec(&spec, &WaveformRegistry::builtin()).is_ok());
        prop_assert!(spec.build().is_ok());
    }

    #[test]
    fn prop_non_positive_stepsize_fails(spec in arb_valid_spec(), stepsize in -1000i64..=0) {
        let mut spec = spec;
        spec.stepsize = stepsize;
        let result = validate_spec(&spec, &WaveformRegistry::builtin());
        let rejected = matches!(
            &result,
            Err(ScheduleError::Configuration { field, .. }) if field == "stepsize"
        );
        prop_assert!(rejected, "stepsize {} should be rejected, got {:?}", stepsize, result);
    }

    #[test]
    fn prop_inverted_bounds_fail(spec in arb_valid_spec()) {
        let mut spec = spec;
        std::mem::swap(&mut spec.max_lr, &mut spec.min_lr);
        let result = validate_spec(&spec, &WaveformRegistry::builtin());
        let rejected = matches!(&result, Err(ScheduleError::Configuration { .. }));
        prop_assert!(rejected, "inverted bounds should be rejected, got {:?}", result);
    }

    #[test]
    fn prop_negative_decay_fails(spec in arb_valid_spec(), decay in -10.0f32..-1e-6) {
        let mut spec = spec;
        spec.decay = decay;
        let result = validate_spec(&spec, &WaveformRegistry::builtin());
        let rejected = matches!(
            &result,
            Err(ScheduleError::Configuration { field, .. }) if field == "decay"
        );
        prop_assert!(rejected, "decay {} should be rejected, got {:?}", decay, result);
    }

    #[test]
    fn prop_spec_yaml_roundtrip(spec in arb_valid_spec()) {
        let yaml = serde_yaml::to_string(&spec).unwrap();
        let back: CyclicSpec = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(spec, back);
    }
}
