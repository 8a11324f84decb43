//! Property tests for batch generation over arbitrary seeds and noise strengths

use osmodash::generator::{seeded_rng, JitterProfile, SampleSeriesGenerator};
use osmodash::series::{hour_label, SeriesField};
use proptest::prelude::*;

fn max_of(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

proptest! {
    /// Every batch has one row per hour, labelled "H:00" in order
    #[test]
    fn test_batch_shape(seed in any::<u64>()) {
        let batch = SampleSeriesGenerator::default().generate(&mut seeded_rng(seed));

        prop_assert_eq!(batch.len(), 24);
        for (hour, sample) in batch.iter().enumerate() {
            prop_assert_eq!(&sample.hour_label, &hour_label(hour));
        }
    }

    /// Fresh salinity never drops below the floor, however strong the noise
    #[test]
    fn test_fresh_salinity_floor(seed in any::<u64>(), strength in 0.0f64..50.0) {
        let profile = JitterProfile {
            fresh_salinity: strength,
            ..JitterProfile::default()
        };
        let batch = SampleSeriesGenerator::new(profile).generate(&mut seeded_rng(seed));

        for value in batch.column(SeriesField::FreshSalinity) {
            prop_assert!(value >= 0.3, "fresh salinity {} below floor", value);
        }
    }

    /// Without QML noise the optimized output stays under the theoretical max
    #[test]
    fn test_qml_below_theoretical_max(seed in any::<u64>()) {
        let profile = JitterProfile {
            qml_output: 0.0,
            ..JitterProfile::default()
        };
        let batch = SampleSeriesGenerator::new(profile).generate(&mut seeded_rng(seed));

        let regular_max = max_of(&batch.column(SeriesField::RegularOutput));
        let qml_max = max_of(&batch.column(SeriesField::QmlOutput));
        prop_assert!(qml_max <= 1.3 * regular_max);
    }

    /// Sensor values stay within their jitter band around the daily curve
    #[test]
    fn test_sensor_jitter_band(seed in any::<u64>()) {
        let noisy = SampleSeriesGenerator::default().generate(&mut seeded_rng(seed));
        let clean = SampleSeriesGenerator::noiseless().generate(&mut seeded_rng(seed));
        let profile = JitterProfile::default();

        for field in [
            SeriesField::FreshTemp,
            SeriesField::SalineTemp,
            SeriesField::FreshPressure,
            SeriesField::SalinePressure,
            SeriesField::SalineSalinity,
        ] {
            let strength = profile.strength(field);
            for (n, c) in noisy.column(field).iter().zip(clean.column(field)) {
                prop_assert!((n - c).abs() <= strength + 1e-12);
            }
        }
    }

    /// A seed reproduces its batch exactly
    #[test]
    fn test_seed_reproducible(seed in any::<u64>()) {
        let generator = SampleSeriesGenerator::default();
        let first = generator.generate(&mut seeded_rng(seed));
        let second = generator.generate(&mut seeded_rng(seed));
        prop_assert_eq!(first, second);
    }
}

#[test]
fn test_thread_rng_entry_point() {
    let first = osmodash::generate();
    let second = osmodash::generate();

    assert_eq!(first.labels(), second.labels());
    assert_ne!(
        first.column(SeriesField::RegularOutput),
        second.column(SeriesField::RegularOutput)
    );
}
