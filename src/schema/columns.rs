/// Column names as constants for type safety
/// Hour of the day (0-23)
pub const HOUR: &str = "hour";
/// "H:00" label bound to the chart x-axis
pub const HOUR_LABEL: &str = "hour_label";
/// Baseline energy output in MW
pub const REGULAR_OUTPUT: &str = "regular_output";
/// QML-optimized energy output in MW
pub const QML_OUTPUT: &str = "qml_output";
/// Fresh reservoir temperature in °C
pub const FRESH_TEMP: &str = "fresh_temp";
/// Saline reservoir temperature in °C
pub const SALINE_TEMP: &str = "saline_temp";
/// Fresh reservoir pressure in bar
pub const FRESH_PRESSURE: &str = "fresh_pressure";
/// Saline reservoir pressure in bar
pub const SALINE_PRESSURE: &str = "saline_pressure";
/// Fresh reservoir salinity in PSU
pub const FRESH_SALINITY: &str = "fresh_salinity";
/// Saline reservoir salinity in PSU
pub const SALINE_SALINITY: &str = "saline_salinity";
