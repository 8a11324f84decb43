use rand::rngs::mock::StepRng;

use super::*;

/// Source whose every uniform draw is exactly 0.5, i.e. zero net jitter
fn midpoint_rng() -> StepRng {
    StepRng::new(1 << 63, 0)
}

#[test]
fn test_batch_has_24_ordered_labels() {
    let batch = SampleSeriesGenerator::default().generate(&mut seeded_rng(1));

    assert_eq!(batch.len(), 24);
    let expected: Vec<String> = (0..24).map(|h| format!("{}:00", h)).collect();
    assert_eq!(batch.labels(), expected);
}

#[test]
fn test_midpoint_source_reproduces_base_curves() {
    let batch = SampleSeriesGenerator::default().generate(&mut midpoint_rng());

    assert_eq!(batch[14].fresh_temp, 15.0);
    assert_eq!(batch[0].saline_pressure, 7.2);
    assert_eq!(batch[0].fresh_pressure, 2.5);
    assert_eq!(batch[3].saline_salinity, 35.0);
}

#[test]
fn test_midpoint_source_matches_noiseless_generator() {
    let jittered = SampleSeriesGenerator::default().generate(&mut midpoint_rng());
    let silent = SampleSeriesGenerator::noiseless().generate(&mut seeded_rng(99));

    assert_eq!(jittered, silent);
}

#[test]
fn test_noiseless_generation_is_bit_identical() {
    let generator = SampleSeriesGenerator::noiseless();
    let a = generator.generate(&mut seeded_rng(1));
    let b = generator.generate(&mut seeded_rng(2));

    assert_eq!(a, b);
    for (x, y) in a.iter().zip(b.iter()) {
        assert_eq!(x.regular_output.to_bits(), y.regular_output.to_bits());
        assert_eq!(x.qml_output.to_bits(), y.qml_output.to_bits());
    }
}

#[test]
fn test_noiseless_regular_output_follows_formula() {
    let batch = SampleSeriesGenerator::noiseless().generate(&mut seeded_rng(0));

    for (h, sample) in batch.iter().enumerate() {
        let hour = h as f64;
        let pressure_diff = curves::saline_pressure(hour) - curves::fresh_pressure(hour);
        let salinity_diff = curves::saline_salinity(hour) - curves::fresh_salinity(hour);
        let temp_factor =
            1.0 / ((curves::saline_temp(hour) - curves::fresh_temp(hour)).abs() * 0.1 + 1.0);
        let expected = pressure_diff * salinity_diff * temp_factor * 0.2;

        assert_eq!(sample.regular_output, expected, "hour {}", h);
    }
}

#[test]
fn test_noiseless_qml_closes_gap_towards_scaled_max() {
    let batch = SampleSeriesGenerator::noiseless().generate(&mut seeded_rng(0));
    let regular = batch.column(SeriesField::RegularOutput);
    let qml = batch.column(SeriesField::QmlOutput);

    let best = regular.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let ceiling = best * 1.3;

    for (r, q) in regular.iter().zip(qml.iter()) {
        let improved = r * 1.02;
        assert!((q - (improved + 0.4 * (ceiling - improved))).abs() < 1e-12);
        assert!(*q > *r);
        assert!(*q < ceiling);
    }

    let best_qml = qml.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    assert!(best_qml <= ceiling);
}

#[test]
fn test_fresh_salinity_floor_holds_under_heavy_noise() {
    let mut profile = JitterProfile::default();
    profile.fresh_salinity = 5.0;
    let generator = SampleSeriesGenerator::new(profile);

    for seed in 0..20 {
        let batch = generator.generate(&mut seeded_rng(seed));
        assert!(batch.iter().all(|s| s.fresh_salinity >= FRESH_SALINITY_FLOOR));
        assert!(batch
            .iter()
            .any(|s| s.fresh_salinity == FRESH_SALINITY_FLOOR));
    }
}

#[test]
fn test_only_fresh_salinity_is_clamped() {
    let mut profile = JitterProfile::none();
    profile.saline_salinity = 1000.0;
    let batch = SampleSeriesGenerator::new(profile).generate(&mut seeded_rng(3));

    assert!(batch.iter().any(|s| s.saline_salinity < 0.0));
}

#[test]
fn test_equal_seeds_agree_and_different_seeds_differ() {
    let generator = SampleSeriesGenerator::default();
    let a = generator.generate(&mut seeded_rng(10));
    let b = generator.generate(&mut seeded_rng(10));
    let c = generator.generate(&mut seeded_rng(11));

    assert_eq!(a, b);
    assert_ne!(
        a.column(SeriesField::RegularOutput),
        c.column(SeriesField::RegularOutput)
    );
    assert_eq!(a.labels(), c.labels());
}

#[test]
fn test_jitter_stays_inside_strength_band() {
    let profile = JitterProfile::default();
    let noisy = SampleSeriesGenerator::new(profile).generate(&mut seeded_rng(5));
    let clean = SampleSeriesGenerator::noiseless().generate(&mut seeded_rng(5));

    for field in [
        SeriesField::FreshTemp,
        SeriesField::SalineTemp,
        SeriesField::FreshPressure,
        SeriesField::SalinePressure,
        SeriesField::SalineSalinity,
    ] {
        let band = profile.strength(field);
        for (n, c) in noisy.column(field).iter().zip(clean.column(field).iter()) {
            assert!((n - c).abs() <= band, "{} drifted beyond {}", field, band);
        }
    }
}

#[test]
fn test_regular_output_ignores_temperature_sign() {
    assert_eq!(regular_output(4.0, 30.0, 5.0), regular_output(4.0, 30.0, -5.0));
    assert_eq!(regular_output(4.0, 30.0, 0.0), 4.0 * 30.0 * 0.2);
}
