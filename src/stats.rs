//! # Batch Statistics
//!
//! Summary figures for the series of a [`SampleBatch`], as shown next to the
//! dashboard charts.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::series::{SampleBatch, SeriesField};

/// Statistics for one series over a batch
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesStats {
    /// Smallest value
    pub min: f64,
    /// Largest value
    pub max: f64,
    /// Arithmetic mean
    pub mean: f64,
    /// Value at hour 0
    pub first: f64,
    /// Value at hour 23
    pub last: f64,
    /// Hour index of the largest value (first occurrence)
    pub peak_hour: usize,
}

impl SeriesStats {
    /// Compute statistics over a column of values; `None` for an empty column
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let first = *values.first()?;
        let last = *values.last()?;

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut peak_hour = 0;
        let mut sum = 0.0;

        for (hour, &value) in values.iter().enumerate() {
            if value < min {
                min = value;
            }
            if value > max {
                max = value;
                peak_hour = hour;
            }
            sum += value;
        }

        Some(Self {
            min,
            max,
            mean: sum / values.len() as f64,
            first,
            last,
            peak_hour,
        })
    }

    /// Spread between the largest and smallest value
    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}

impl fmt::Display for SeriesStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "min {:.3}, max {:.3}, mean {:.3}",
            self.min, self.max, self.mean
        )
    }
}

/// Statistics for every series of a batch plus the QML comparison
#[derive(Debug, Clone)]
pub struct BatchSummary {
    stats: HashMap<SeriesField, SeriesStats>,
    /// Relative gain of mean QML output over mean regular output
    /// (`None` when the regular mean is zero)
    pub qml_uplift: Option<f64>,
}

impl BatchSummary {
    /// Summarize a batch
    pub fn from_batch(batch: &SampleBatch) -> Self {
        let stats: HashMap<_, _> = SeriesField::ALL
            .iter()
            .filter_map(|&field| {
                SeriesStats::from_values(&batch.column(field)).map(|s| (field, s))
            })
            .collect();

        let qml_uplift = match (
            stats.get(&SeriesField::RegularOutput),
            stats.get(&SeriesField::QmlOutput),
        ) {
            (Some(regular), Some(qml)) if regular.mean != 0.0 => {
                Some(qml.mean / regular.mean - 1.0)
            }
            _ => None,
        };

        Self { stats, qml_uplift }
    }

    /// Statistics for one series
    pub fn get(&self, field: SeriesField) -> Option<&SeriesStats> {
        self.stats.get(&field)
    }

    /// Statistics for every series, in binding order
    pub fn iter(&self) -> impl Iterator<Item = (SeriesField, &SeriesStats)> {
        SeriesField::ALL
            .into_iter()
            .filter_map(move |field| self.stats.get(&field).map(|s| (field, s)))
    }
}
