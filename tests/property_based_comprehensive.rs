//! Property-based tests for the regression and inference engine
//!
//! Core properties covered:
//! 1. Exact lines are recovered by the fit
//! 2. R² stays within [0, 1]
//! 3. Noiseless ring data round-trips to the true radius
//! 4. Synthetic noise respects its percentage bound
//! 5. More rings never widen the confidence interval
//! 6. Only 0.90 / 0.95 / 0.99 are accepted as confidence levels

use newton_rings::regression::{
    critical_value, fit, infer, predict_radius, standard_error, DataPoint, InferenceError,
};
use newton_rings::synthetic::{add_noise, ideal_points};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn nonzero_slope() -> impl Strategy<Value = f64> {
    prop_oneof![-100.0..-0.01f64, 0.01..100.0f64]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_fit_recovers_exact_line(
        slope in nonzero_slope(),
        intercept in -100.0..100.0f64,
        n in 2usize..50,
    ) {
        let points: Vec<DataPoint> = (1..=n)
            .map(|x| DataPoint::new(x as f64, slope * x as f64 + intercept))
            .collect();

        let result = fit(&points).unwrap();
        let tolerance = 1e-9 * slope.abs().max(intercept.abs()).max(1.0);

        prop_assert!((result.slope - slope).abs() < tolerance);
        prop_assert!((result.intercept - intercept).abs() < tolerance);
        prop_assert!((result.r2 - 1.0).abs() < 1e-9);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_r2_bounded(ys in prop::collection::vec(0.0..1000.0f64, 2..40)) {
        let points: Vec<DataPoint> = ys
            .iter()
            .enumerate()
            .map(|(i, &y)| DataPoint::new((i + 1) as f64, y))
            .collect();

        let result = fit(&points).unwrap();
        prop_assert!(result.r2 >= -1e-9, "r2 = {}", result.r2);
        prop_assert!(result.r2 <= 1.0 + 1e-9, "r2 = {}", result.r2);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_repeated_x_is_degenerate(x in 1.0..50.0f64, n in 2usize..20) {
        let points: Vec<DataPoint> = (0..n).map(|i| DataPoint::new(x, i as f64)).collect();
        prop_assert_eq!(fit(&points), Err(InferenceError::DegenerateInput));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_noiseless_radius_round_trip(
        radius in 10.0..5000.0f64,
        wavelength_nm in 400.0..700.0f64,
        diameter in any::<bool>(),
        n in 2usize..40,
    ) {
        let k = if diameter { 4.0 } else { 1.0 };
        let wavelength = wavelength_nm * 1e-6;
        let points = ideal_points(n, radius, wavelength, k);

        let result = fit(&points).unwrap();
        let predicted = predict_radius(result.slope, wavelength, k);

        prop_assert!(((predicted - radius) / radius).abs() < 1e-6);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_noise_within_bound(
        seed in any::<u64>(),
        noise_percent in 0.0..20.0f64,
        n in 1usize..60,
    ) {
        let ideal = ideal_points(n, 200.0, 589e-6, 4.0);
        let measured = add_noise(&ideal, noise_percent, &mut StdRng::seed_from_u64(seed));

        prop_assert_eq!(measured.len(), ideal.len());
        for (i, m) in ideal.iter().zip(&measured) {
            prop_assert!((m.y - i.y).abs() <= noise_percent / 100.0 * i.y + 1e-12);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_more_rings_never_widen_interval(
        amplitude in 1e-4..0.1f64,
        level_index in 0usize..3,
    ) {
        let level = [0.90, 0.95, 0.99][level_index];
        let perturbed = |n: usize| -> Vec<DataPoint> {
            ideal_points(n, 200.0, 589e-6, 4.0)
                .into_iter()
                .map(|p| {
                    let sign = if (p.x as usize) % 2 == 0 { 1.0 } else { -1.0 };
                    DataPoint::new(p.x, p.y + sign * amplitude)
                })
                .collect()
        };

        let few = perturbed(5);
        let many = perturbed(20);
        let few_ci = infer(&few, &fit(&few).unwrap(), 589e-6, 4.0, level).unwrap();
        let many_ci = infer(&many, &fit(&many).unwrap(), 589e-6, 4.0, level).unwrap();

        prop_assert!(
            many_ci.confidence_interval_half_width <= few_ci.confidence_interval_half_width
        );
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_only_tabulated_levels_accepted(level in 0.0..1.0f64, df in 0.0..40.0f64) {
        let supported = [0.90, 0.95, 0.99]
            .iter()
            .any(|s| (s - level).abs() < 1e-9);
        let result = critical_value(level, df);

        if supported {
            prop_assert!(result.is_ok());
        } else {
            prop_assert_eq!(result, Err(InferenceError::UnsupportedConfidenceLevel(level)));
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_standard_error_non_negative(ys in prop::collection::vec(0.0..10.0f64, 3..30)) {
        let points: Vec<DataPoint> = ys
            .iter()
            .enumerate()
            .map(|(i, &y)| DataPoint::new((i + 1) as f64, y))
            .collect();

        let result = fit(&points).unwrap();
        let se = standard_error(&points, &result).unwrap();
        prop_assert!(se >= 0.0 && se.is_finite());
    }
}

#[test]
fn test_unsupported_level_eighty_percent() {
    assert_eq!(
        critical_value(0.80, 8.0),
        Err(InferenceError::UnsupportedConfidenceLevel(0.80))
    );
}

#[test]
fn test_reference_classroom_scenario() {
    let points = ideal_points(10, 200.0, 589e-6, 4.0);
    let result = fit(&points).unwrap();

    assert!((result.slope - 0.4712).abs() < 1e-9);
    assert!((result.r2 - 1.0).abs() < 1e-9);
    assert!((predict_radius(result.slope, 589e-6, 4.0) - 200.0).abs() < 1e-6);
}
