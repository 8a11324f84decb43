//! # Sample Series Generator
//!
//! Produces one [`SampleBatch`] of synthetic reservoir measurements and the
//! energy output derived from them.
//!
//! ## Pipeline
//!
//! 1. Six closed-form daily cycles ([`curves`]) are evaluated for hours 0..23.
//! 2. Each cycle is noised independently with the strengths of a
//!    [`JitterProfile`]; fresh salinity is then floored at 0.3.
//! 3. Regular output is derived hour by hour from the pressure and salinity
//!    differentials, damped by the temperature gap, and noised again.
//! 4. QML output closes 40% of the gap between a 2% improvement and 130% of
//!    the best regular hour, then receives its own noise.
//!
//! Step 4 works on the already-noised regular output, so the QML series
//! carries two layers of jitter.
//!
//! ## Random Sources
//!
//! The generator never owns randomness; every call takes the source to draw
//! from. Use [`seeded_rng`] for reproducible batches:
//!
//! ```
//! use osmodash::generator::{seeded_rng, SampleSeriesGenerator};
//!
//! let generator = SampleSeriesGenerator::default();
//! let a = generator.generate(&mut seeded_rng(42));
//! let b = generator.generate(&mut seeded_rng(42));
//! assert_eq!(a, b);
//! assert_eq!(a.len(), 24);
//! ```

pub mod curves;
mod jitter;

#[cfg(test)]
mod tests;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::series::{hour_label, HourlySample, SampleBatch, SeriesField, HOURS_PER_DAY};

pub use jitter::JitterProfile;

use jitter::add_noise;

/// Floor applied to fresh salinity after noise
pub const FRESH_SALINITY_FLOOR: f64 = 0.3;

/// Scale from the power-relevant product to MW
pub const OUTPUT_SCALE: f64 = 0.2;

/// Temperature-gap damping coefficient
pub const TEMP_DAMPING: f64 = 0.1;

/// Multiple of the best regular hour the QML curve trends towards
pub const THEORETICAL_MAX_FACTOR: f64 = 1.3;

/// Flat improvement applied before closing the gap
pub const BASE_IMPROVEMENT: f64 = 1.02;

/// Fraction of the remaining gap the QML curve closes
pub const GAP_CLOSURE: f64 = 0.4;

/// Generator for full-day sample batches
#[derive(Debug, Clone, Default)]
pub struct SampleSeriesGenerator {
    profile: JitterProfile,
}

impl SampleSeriesGenerator {
    /// Create a generator with the given noise strengths
    pub fn new(profile: JitterProfile) -> Self {
        Self { profile }
    }

    /// Generator that returns the pure closed-form curves
    pub fn noiseless() -> Self {
        Self::new(JitterProfile::none())
    }

    /// Noise strengths in use
    pub fn profile(&self) -> &JitterProfile {
        &self.profile
    }

    /// Generate one day of samples, drawing jitter from `rng`.
    ///
    /// Series are noised one at a time in binding order of the sensors
    /// (fresh/saline temperature, pressure, salinity) followed by regular and
    /// QML output, so a seeded source always yields the same batch.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> SampleBatch {
        let p = &self.profile;

        let fresh_temp = add_noise(&base(curves::fresh_temp), p.fresh_temp, rng);
        let saline_temp = add_noise(&base(curves::saline_temp), p.saline_temp, rng);

        let fresh_pressure = add_noise(&base(curves::fresh_pressure), p.fresh_pressure, rng);
        let saline_pressure = add_noise(&base(curves::saline_pressure), p.saline_pressure, rng);

        let fresh_salinity: Vec<f64> =
            add_noise(&base(curves::fresh_salinity), p.fresh_salinity, rng)
                .into_iter()
                .map(|v| v.max(FRESH_SALINITY_FLOOR))
                .collect();
        let saline_salinity = add_noise(&base(curves::saline_salinity), p.saline_salinity, rng);

        let regular_raw: Vec<f64> = (0..HOURS_PER_DAY)
            .map(|h| {
                regular_output(
                    saline_pressure[h] - fresh_pressure[h],
                    saline_salinity[h] - fresh_salinity[h],
                    saline_temp[h] - fresh_temp[h],
                )
            })
            .collect();
        let regular = add_noise(&regular_raw, p.regular_output, rng);

        let qml_raw = qml_output(&regular);
        let qml = add_noise(&qml_raw, p.qml_output, rng);

        let samples = (0..HOURS_PER_DAY)
            .map(|h| HourlySample {
                hour_label: hour_label(h),
                regular_output: regular[h],
                qml_output: qml[h],
                fresh_temp: fresh_temp[h],
                saline_temp: saline_temp[h],
                fresh_pressure: fresh_pressure[h],
                saline_pressure: saline_pressure[h],
                fresh_salinity: fresh_salinity[h],
                saline_salinity: saline_salinity[h],
            })
            .collect();

        let batch = SampleBatch::from_generated(samples);
        debug!(
            "Generated batch: peak regular {:.3} MW, peak QML {:.3} MW",
            max_of(&batch.column(SeriesField::RegularOutput)),
            max_of(&batch.column(SeriesField::QmlOutput))
        );
        batch
    }
}

fn base(curve: fn(f64) -> f64) -> Vec<f64> {
    curves::sample_day(curve, HOURS_PER_DAY)
}

/// Regular output for one hour from its reservoir differentials.
///
/// `temp_gap` is saline minus fresh temperature; only its magnitude matters.
pub fn regular_output(pressure_diff: f64, salinity_diff: f64, temp_gap: f64) -> f64 {
    let temp_factor = 1.0 / (temp_gap.abs() * TEMP_DAMPING + 1.0);
    pressure_diff * salinity_diff * temp_factor * OUTPUT_SCALE
}

/// Noise-free QML curve for an (already noised) regular output series.
///
/// Every hour moves 40% of the way from `1.02 · regular` towards
/// `1.3 · max(regular)`.
pub fn qml_output(regular: &[f64]) -> Vec<f64> {
    let theoretical_max = max_of(regular) * THEORETICAL_MAX_FACTOR;
    debug!("QML theoretical max: {:.3}", theoretical_max);

    regular
        .iter()
        .map(|&value| {
            let improved = value * BASE_IMPROVEMENT;
            improved + (theoretical_max - improved) * GAP_CLOSURE
        })
        .collect()
}

fn max_of(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

/// Reproducible random source for a seed
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Random source seeded from the operating system
pub fn entropy_rng() -> StdRng {
    StdRng::from_entropy()
}
