use serde::{Deserialize, Serialize};

/// One hour of synthetic reservoir measurements and derived energy output.
///
/// Serializes with the chart binding keys (`name`, `regularOutput`,
/// `freshTemp`, ...) so a front end can bind series without a mapping layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlySample {
    /// "H:00" tag for the hour of the day
    #[serde(rename = "name")]
    pub hour_label: String,

    /// Baseline energy output in MW
    pub regular_output: f64,

    /// QML-optimized energy output in MW
    pub qml_output: f64,

    /// Fresh reservoir temperature in °C
    pub fresh_temp: f64,

    /// Saline reservoir temperature in °C
    pub saline_temp: f64,

    /// Fresh reservoir pressure in bar
    pub fresh_pressure: f64,

    /// Saline reservoir pressure in bar
    pub saline_pressure: f64,

    /// Fresh reservoir salinity in PSU
    pub fresh_salinity: f64,

    /// Saline reservoir salinity in PSU
    pub saline_salinity: f64,
}

/// Format the label for an hour of the day ("0:00" .. "23:00").
pub fn hour_label(hour: usize) -> String {
    format!("{}:00", hour)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hour_label_is_not_zero_padded() {
        assert_eq!(hour_label(0), "0:00");
        assert_eq!(hour_label(9), "9:00");
        assert_eq!(hour_label(23), "23:00");
    }

    #[test]
    fn test_sample_serializes_with_binding_keys() {
        let sample = HourlySample {
            hour_label: hour_label(5),
            regular_output: 1.0,
            qml_output: 2.0,
            fresh_temp: 3.0,
            saline_temp: 4.0,
            fresh_pressure: 5.0,
            saline_pressure: 6.0,
            fresh_salinity: 7.0,
            saline_salinity: 8.0,
        };

        let value = serde_json::to_value(&sample).unwrap();
        assert_eq!(value["name"], "5:00");
        assert_eq!(value["regularOutput"], 1.0);
        assert_eq!(value["qmlOutput"], 2.0);
        assert_eq!(value["freshTemp"], 3.0);
        assert_eq!(value["salineTemp"], 4.0);
        assert_eq!(value["freshPressure"], 5.0);
        assert_eq!(value["salinePressure"], 6.0);
        assert_eq!(value["freshSalinity"], 7.0);
        assert_eq!(value["salineSalinity"], 8.0);
        assert!(value.get("hourLabel").is_none());
    }
}
