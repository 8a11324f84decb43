use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::series::{SeriesError, SeriesField};

/// Additive noise strengths, one per series.
///
/// Each element of a series receives `strength · (2·U − 1)` with `U` drawn
/// uniformly from [0, 1). Missing keys in a config file fall back to the
/// default strengths.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JitterProfile {
    /// Fresh reservoir temperature noise
    pub fresh_temp: f64,
    /// Saline reservoir temperature noise
    pub saline_temp: f64,
    /// Fresh reservoir pressure noise
    pub fresh_pressure: f64,
    /// Saline reservoir pressure noise
    pub saline_pressure: f64,
    /// Fresh reservoir salinity noise (applied before the 0.3 floor)
    pub fresh_salinity: f64,
    /// Saline reservoir salinity noise
    pub saline_salinity: f64,
    /// Noise on the derived regular output
    pub regular_output: f64,
    /// Noise on the derived QML output
    pub qml_output: f64,
}

impl Default for JitterProfile {
    fn default() -> Self {
        Self {
            fresh_temp: 0.5,
            saline_temp: 0.6,
            fresh_pressure: 0.1,
            saline_pressure: 0.2,
            fresh_salinity: 0.05,
            saline_salinity: 0.8,
            regular_output: 0.8,
            qml_output: 0.2,
        }
    }
}

impl JitterProfile {
    /// Profile with every strength at zero: pure closed-form curves.
    pub fn none() -> Self {
        Self {
            fresh_temp: 0.0,
            saline_temp: 0.0,
            fresh_pressure: 0.0,
            saline_pressure: 0.0,
            fresh_salinity: 0.0,
            saline_salinity: 0.0,
            regular_output: 0.0,
            qml_output: 0.0,
        }
    }

    /// Strength applied to a series
    pub fn strength(&self, field: SeriesField) -> f64 {
        match field {
            SeriesField::RegularOutput => self.regular_output,
            SeriesField::QmlOutput => self.qml_output,
            SeriesField::FreshTemp => self.fresh_temp,
            SeriesField::SalineTemp => self.saline_temp,
            SeriesField::FreshPressure => self.fresh_pressure,
            SeriesField::SalinePressure => self.saline_pressure,
            SeriesField::FreshSalinity => self.fresh_salinity,
            SeriesField::SalineSalinity => self.saline_salinity,
        }
    }

    /// True when no series receives noise
    pub fn is_silent(&self) -> bool {
        SeriesField::ALL.iter().all(|f| self.strength(*f) == 0.0)
    }

    /// Reject negative or non-finite strengths.
    pub fn validate(&self) -> Result<(), SeriesError> {
        for field in SeriesField::ALL {
            let value = self.strength(field);
            if !value.is_finite() || value < 0.0 {
                return Err(SeriesError::InvalidJitter {
                    series: field.key(),
                    value,
                });
            }
        }
        Ok(())
    }
}

/// Add independent uniform noise to every element of a series.
pub(crate) fn add_noise<R: Rng + ?Sized>(base: &[f64], strength: f64, rng: &mut R) -> Vec<f64> {
    base.iter()
        .map(|&value| value + strength * (rng.gen::<f64>() * 2.0 - 1.0))
        .collect()
}
