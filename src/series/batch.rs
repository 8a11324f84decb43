use std::ops::Index;

use serde::Serialize;

use super::sample::hour_label;
use super::{HourlySample, SeriesError, SeriesField, HOURS_PER_DAY};

/// A full day of hourly samples, one per hour 0..23 in order.
///
/// The batch is immutable once built: callers get shared references only.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SampleBatch {
    samples: Vec<HourlySample>,
}

impl SampleBatch {
    /// Wrap samples the generator has already laid out hour by hour.
    pub(crate) fn from_generated(samples: Vec<HourlySample>) -> Self {
        debug_assert_eq!(samples.len(), HOURS_PER_DAY);
        Self { samples }
    }

    /// Build a batch from arbitrary rows, checking the row count and label order.
    pub fn from_samples(samples: Vec<HourlySample>) -> Result<Self, SeriesError> {
        if samples.len() != HOURS_PER_DAY {
            return Err(SeriesError::WrongSampleCount {
                expected: HOURS_PER_DAY,
                actual: samples.len(),
            });
        }

        for (position, sample) in samples.iter().enumerate() {
            let expected = hour_label(position);
            if sample.hour_label != expected {
                return Err(SeriesError::LabelMismatch {
                    position,
                    label: sample.hour_label.clone(),
                    expected,
                });
            }
        }

        Ok(Self { samples })
    }

    /// Number of samples (always 24)
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false; present for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Iterate over the samples in hour order
    pub fn iter(&self) -> std::slice::Iter<'_, HourlySample> {
        self.samples.iter()
    }

    /// Sample for an hour of the day, if in range
    pub fn get(&self, hour: usize) -> Option<&HourlySample> {
        self.samples.get(hour)
    }

    /// Read-only view of all samples
    pub fn samples(&self) -> &[HourlySample] {
        &self.samples
    }

    /// Hour labels in order
    pub fn labels(&self) -> Vec<&str> {
        self.samples.iter().map(|s| s.hour_label.as_str()).collect()
    }

    /// Extract one series as a column of values
    pub fn column(&self, field: SeriesField) -> Vec<f64> {
        self.samples.iter().map(|s| field.value(s)).collect()
    }
}

impl Index<usize> for SampleBatch {
    type Output = HourlySample;

    fn index(&self, hour: usize) -> &Self::Output {
        &self.samples[hour]
    }
}

impl<'a> IntoIterator for &'a SampleBatch {
    type Item = &'a HourlySample;
    type IntoIter = std::slice::Iter<'a, HourlySample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_sample(hour: usize, value: f64) -> HourlySample {
        HourlySample {
            hour_label: hour_label(hour),
            regular_output: value,
            qml_output: value,
            fresh_temp: value,
            saline_temp: value,
            fresh_pressure: value,
            saline_pressure: value,
            fresh_salinity: value,
            saline_salinity: value,
        }
    }

    #[test]
    fn test_from_samples_accepts_full_day() {
        let samples: Vec<_> = (0..24).map(|h| flat_sample(h, h as f64)).collect();
        let batch = SampleBatch::from_samples(samples).unwrap();

        assert_eq!(batch.len(), 24);
        assert_eq!(batch.labels()[23], "23:00");
        assert_eq!(batch.column(SeriesField::FreshTemp)[7], 7.0);
        assert_eq!(batch[3].hour_label, "3:00");
    }

    #[test]
    fn test_from_samples_rejects_short_batch() {
        let samples: Vec<_> = (0..23).map(|h| flat_sample(h, 0.0)).collect();
        let result = SampleBatch::from_samples(samples);

        assert!(matches!(
            result,
            Err(SeriesError::WrongSampleCount {
                expected: 24,
                actual: 23
            })
        ));
    }

    #[test]
    fn test_from_samples_rejects_out_of_order_labels() {
        let mut samples: Vec<_> = (0..24).map(|h| flat_sample(h, 0.0)).collect();
        samples.swap(4, 5);

        match SampleBatch::from_samples(samples) {
            Err(SeriesError::LabelMismatch {
                position, expected, ..
            }) => {
                assert_eq!(position, 4);
                assert_eq!(expected, "4:00");
            }
            other => panic!("expected label mismatch, got {:?}", other),
        }
    }
}
