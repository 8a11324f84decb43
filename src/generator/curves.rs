//! Closed-form daily cycles for the reservoir sensors.
//!
//! Each curve takes the hour of the day (0..23) and returns the noise-free
//! value for that hour.

use std::f64::consts::PI;

/// Fresh reservoir temperature, peaking mid-afternoon: 15 + 5·sin(2π(h−14)/24)
pub fn fresh_temp(hour: f64) -> f64 {
    15.0 + 5.0 * (2.0 * PI * (hour - 14.0) / 24.0).sin()
}

/// Saline reservoir temperature: 18 + 4·sin(2π(h−12)/24)
pub fn saline_temp(hour: f64) -> f64 {
    18.0 + 4.0 * (2.0 * PI * (hour - 12.0) / 24.0).sin()
}

/// Fresh reservoir pressure: 2.5 + 0.3·sin(2πh/24)
pub fn fresh_pressure(hour: f64) -> f64 {
    2.5 + 0.3 * (2.0 * PI * hour / 24.0).sin()
}

/// Saline reservoir pressure with a tidal 12h and 6h component:
/// 7.2 + 0.8·sin(2πh/12) + 0.4·sin(2πh/6)
pub fn saline_pressure(hour: f64) -> f64 {
    7.2 + 0.8 * (2.0 * PI * hour / 12.0).sin() + 0.4 * (2.0 * PI * hour / 6.0).sin()
}

/// Fresh reservoir salinity: 0.5 + 0.1·sin(2πh/24)
pub fn fresh_salinity(hour: f64) -> f64 {
    0.5 + 0.1 * (2.0 * PI * hour / 24.0).sin()
}

/// Saline reservoir salinity: 35 + 2·sin(2π(h−3)/12)
pub fn saline_salinity(hour: f64) -> f64 {
    35.0 + 2.0 * (2.0 * PI * (hour - 3.0) / 12.0).sin()
}

/// Evaluate a curve over every hour of the day.
pub(crate) fn sample_day(curve: fn(f64) -> f64, hours: usize) -> Vec<f64> {
    (0..hours).map(|h| curve(h as f64)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curves_at_phase_zero() {
        assert_eq!(fresh_temp(14.0), 15.0);
        assert_eq!(saline_temp(12.0), 18.0);
        assert_eq!(fresh_pressure(0.0), 2.5);
        assert_eq!(saline_pressure(0.0), 7.2);
        assert_eq!(fresh_salinity(0.0), 0.5);
        assert_eq!(saline_salinity(3.0), 35.0);
    }

    #[test]
    fn test_curve_extremes() {
        // quarter period after phase zero
        assert!((fresh_temp(20.0) - 20.0).abs() < 1e-12);
        assert!((saline_temp(18.0) - 22.0).abs() < 1e-12);
        assert!((fresh_pressure(6.0) - 2.8).abs() < 1e-12);
        assert!((saline_salinity(6.0) - 37.0).abs() < 1e-12);
    }

    #[test]
    fn test_sample_day_covers_every_hour() {
        let values = sample_day(fresh_pressure, 24);
        assert_eq!(values.len(), 24);
        assert_eq!(values[0], fresh_pressure(0.0));
        assert_eq!(values[23], fresh_pressure(23.0));
    }
}
