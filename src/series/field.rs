use std::fmt;
use std::str::FromStr;

use super::HourlySample;
use crate::schema::columns;

/// The two simulated water bodies
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reservoir {
    /// Fresh (river) water intake
    Fresh,
    /// Saline (sea) water intake
    Saline,
}

impl Reservoir {
    /// Display name used for dashboard row headers
    pub fn label(&self) -> &'static str {
        match self {
            Reservoir::Fresh => "Fresh",
            Reservoir::Saline => "Saline",
        }
    }
}

/// Physical quantity measured at a reservoir
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Parameter {
    /// Water temperature
    Temperature,
    /// Hydrostatic pressure
    Pressure,
    /// Dissolved salt content
    Salinity,
}

impl Parameter {
    /// Display name used for dashboard column headers
    pub fn label(&self) -> &'static str {
        match self {
            Parameter::Temperature => "Temperature",
            Parameter::Pressure => "Pressure",
            Parameter::Salinity => "Salinity",
        }
    }

    /// Unit the quantity is reported in
    pub fn unit(&self) -> &'static str {
        match self {
            Parameter::Temperature => "°C",
            Parameter::Pressure => "bar",
            Parameter::Salinity => "PSU",
        }
    }
}

/// The eight numeric series carried by every [`HourlySample`].
///
/// Each variant knows its chart binding key, its Parquet column name and how
/// to read itself out of a sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeriesField {
    /// Baseline energy output
    RegularOutput,
    /// QML-optimized energy output
    QmlOutput,
    /// Fresh reservoir temperature
    FreshTemp,
    /// Saline reservoir temperature
    SalineTemp,
    /// Fresh reservoir pressure
    FreshPressure,
    /// Saline reservoir pressure
    SalinePressure,
    /// Fresh reservoir salinity
    FreshSalinity,
    /// Saline reservoir salinity
    SalineSalinity,
}

impl SeriesField {
    /// All fields in binding order
    pub const ALL: [SeriesField; 8] = [
        SeriesField::RegularOutput,
        SeriesField::QmlOutput,
        SeriesField::FreshTemp,
        SeriesField::SalineTemp,
        SeriesField::FreshPressure,
        SeriesField::SalinePressure,
        SeriesField::FreshSalinity,
        SeriesField::SalineSalinity,
    ];

    /// Binding key of the hour label column
    pub const LABEL_KEY: &'static str = "name";

    /// Identifier a chart front end binds this series by
    pub fn key(&self) -> &'static str {
        match self {
            SeriesField::RegularOutput => "regularOutput",
            SeriesField::QmlOutput => "qmlOutput",
            SeriesField::FreshTemp => "freshTemp",
            SeriesField::SalineTemp => "salineTemp",
            SeriesField::FreshPressure => "freshPressure",
            SeriesField::SalinePressure => "salinePressure",
            SeriesField::FreshSalinity => "freshSalinity",
            SeriesField::SalineSalinity => "salineSalinity",
        }
    }

    /// Column name in Parquet snapshots
    pub fn column(&self) -> &'static str {
        match self {
            SeriesField::RegularOutput => columns::REGULAR_OUTPUT,
            SeriesField::QmlOutput => columns::QML_OUTPUT,
            SeriesField::FreshTemp => columns::FRESH_TEMP,
            SeriesField::SalineTemp => columns::SALINE_TEMP,
            SeriesField::FreshPressure => columns::FRESH_PRESSURE,
            SeriesField::SalinePressure => columns::SALINE_PRESSURE,
            SeriesField::FreshSalinity => columns::FRESH_SALINITY,
            SeriesField::SalineSalinity => columns::SALINE_SALINITY,
        }
    }

    /// Human-readable series name
    pub fn label(&self) -> &'static str {
        match self {
            SeriesField::RegularOutput => "Regular Output",
            SeriesField::QmlOutput => "QML Optimized",
            SeriesField::FreshTemp => "Fresh Temperature",
            SeriesField::SalineTemp => "Saline Temperature",
            SeriesField::FreshPressure => "Fresh Pressure",
            SeriesField::SalinePressure => "Saline Pressure",
            SeriesField::FreshSalinity => "Fresh Salinity",
            SeriesField::SalineSalinity => "Saline Salinity",
        }
    }

    /// Unit of the series values
    pub fn unit(&self) -> &'static str {
        match self.parameter() {
            Some(parameter) => parameter.unit(),
            None => "MW",
        }
    }

    /// Reservoir a sensor series belongs to; `None` for energy output
    pub fn reservoir(&self) -> Option<Reservoir> {
        match self {
            SeriesField::RegularOutput | SeriesField::QmlOutput => None,
            SeriesField::FreshTemp | SeriesField::FreshPressure | SeriesField::FreshSalinity => {
                Some(Reservoir::Fresh)
            }
            SeriesField::SalineTemp
            | SeriesField::SalinePressure
            | SeriesField::SalineSalinity => Some(Reservoir::Saline),
        }
    }

    /// Measured quantity of a sensor series; `None` for energy output
    pub fn parameter(&self) -> Option<Parameter> {
        match self {
            SeriesField::RegularOutput | SeriesField::QmlOutput => None,
            SeriesField::FreshTemp | SeriesField::SalineTemp => Some(Parameter::Temperature),
            SeriesField::FreshPressure | SeriesField::SalinePressure => Some(Parameter::Pressure),
            SeriesField::FreshSalinity | SeriesField::SalineSalinity => Some(Parameter::Salinity),
        }
    }

    /// Look up the sensor series for a reservoir/parameter pair
    pub fn sensor(reservoir: Reservoir, parameter: Parameter) -> Self {
        match (reservoir, parameter) {
            (Reservoir::Fresh, Parameter::Temperature) => SeriesField::FreshTemp,
            (Reservoir::Fresh, Parameter::Pressure) => SeriesField::FreshPressure,
            (Reservoir::Fresh, Parameter::Salinity) => SeriesField::FreshSalinity,
            (Reservoir::Saline, Parameter::Temperature) => SeriesField::SalineTemp,
            (Reservoir::Saline, Parameter::Pressure) => SeriesField::SalinePressure,
            (Reservoir::Saline, Parameter::Salinity) => SeriesField::SalineSalinity,
        }
    }

    /// Read this series' value out of a sample
    pub fn value(&self, sample: &HourlySample) -> f64 {
        match self {
            SeriesField::RegularOutput => sample.regular_output,
            SeriesField::QmlOutput => sample.qml_output,
            SeriesField::FreshTemp => sample.fresh_temp,
            SeriesField::SalineTemp => sample.saline_temp,
            SeriesField::FreshPressure => sample.fresh_pressure,
            SeriesField::SalinePressure => sample.saline_pressure,
            SeriesField::FreshSalinity => sample.fresh_salinity,
            SeriesField::SalineSalinity => sample.saline_salinity,
        }
    }
}

impl fmt::Display for SeriesField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SeriesField {
    type Err = String;

    /// Accepts either the binding key or the Parquet column name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SeriesField::ALL
            .iter()
            .copied()
            .find(|field| field.key() == s || field.column() == s)
            .ok_or_else(|| {
                let valid: Vec<&str> = SeriesField::ALL.iter().map(|f| f.key()).collect();
                format!("Unknown series '{}'. Valid options: {}", s, valid.join(", "))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sensor_lookup_round_trips() {
        for field in SeriesField::ALL {
            if let (Some(reservoir), Some(parameter)) = (field.reservoir(), field.parameter()) {
                assert_eq!(SeriesField::sensor(reservoir, parameter), field);
            }
        }
    }

    #[test]
    fn test_energy_fields_have_no_reservoir() {
        assert_eq!(SeriesField::RegularOutput.reservoir(), None);
        assert_eq!(SeriesField::QmlOutput.parameter(), None);
        assert_eq!(SeriesField::QmlOutput.unit(), "MW");
        assert_eq!(SeriesField::SalineSalinity.unit(), "PSU");
    }

    #[test]
    fn test_from_str_accepts_key_and_column() {
        assert_eq!(
            SeriesField::from_str("freshPressure").unwrap(),
            SeriesField::FreshPressure
        );
        assert_eq!(
            SeriesField::from_str("saline_temp").unwrap(),
            SeriesField::SalineTemp
        );
        assert!(SeriesField::from_str("voltage").is_err());
    }
}
