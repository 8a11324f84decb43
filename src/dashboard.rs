//! # Dashboard Layout
//!
//! Describes which series the "Energy Output Analytics" page shows together,
//! with their axis labels and grouping. The layout is plain data; rendering
//! is left to whatever front end consumes it.
//!
//! ```text
//! Energy Output Comparison    regularOutput, qmlOutput   (MW over hours)
//!
//!            Temperature   Pressure        Salinity
//! Overview   salineTemp    salinePressure  freshSalinity
//! Fresh      freshTemp     freshPressure   freshSalinity
//! Saline     salineTemp    salinePressure  salineSalinity
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::series::{Parameter, Reservoir, SeriesError, SeriesField};

/// Page title
pub const DASHBOARD_TITLE: &str = "Energy Output Analytics";

/// Month a dashboard reports on, shown in the period selector ("April 2025")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ReportingPeriod {
    first_day: NaiveDate,
}

impl ReportingPeriod {
    /// Period for a calendar month; `None` if the month is out of range
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first_day| Self { first_day })
    }

    /// Calendar year
    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    /// Calendar month (1-12)
    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    /// Selector label, e.g. "April 2025"
    pub fn label(&self) -> String {
        self.first_day.format("%B %Y").to_string()
    }

    /// Compact form, e.g. "2025-04"
    pub fn to_compact(&self) -> String {
        self.first_day.format("%Y-%m").to_string()
    }
}

impl Default for ReportingPeriod {
    fn default() -> Self {
        Self {
            first_day: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap_or_default(),
        }
    }
}

impl fmt::Display for ReportingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for ReportingPeriod {
    type Err = SeriesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
            .map(|first_day| Self { first_day })
            .map_err(|_| SeriesError::InvalidPeriod(s.to_string()))
    }
}

impl TryFrom<String> for ReportingPeriod {
    type Error = SeriesError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ReportingPeriod> for String {
    fn from(period: ReportingPeriod) -> Self {
        period.to_compact()
    }
}

/// Chart axis description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Axis {
    /// Axis caption
    pub label: &'static str,
    /// Binding key the axis reads, if it is bound to a column
    pub key: Option<&'static str>,
}

/// A chart panel plotting several series against the hour labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartPanel {
    /// Panel heading
    pub title: &'static str,
    /// Horizontal axis
    pub x_axis: Axis,
    /// Vertical axis
    pub y_axis: Axis,
    /// Plotted series
    pub series: Vec<SeriesField>,
}

/// Reservoir × parameter grid of small sensor charts.
///
/// Directly under the column headers sits an overview strip with one chart
/// per column, followed by one row per reservoir.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterGrid {
    /// Column order
    pub columns: Vec<Parameter>,
    /// Overview strip, one series per column in column order
    pub overview: Vec<SeriesField>,
    /// Row order
    pub rows: Vec<Reservoir>,
}

impl ParameterGrid {
    /// Series of the overview strip under a column header
    pub fn overview_cell(&self, column: Parameter) -> Option<SeriesField> {
        let index = self.columns.iter().position(|&c| c == column)?;
        self.overview.get(index).copied()
    }

    /// Series shown in one cell
    pub fn cell(&self, row: Reservoir, column: Parameter) -> SeriesField {
        SeriesField::sensor(row, column)
    }

    /// Series of one row, in column order
    pub fn row_series(&self, row: Reservoir) -> Vec<SeriesField> {
        self.columns.iter().map(|&c| self.cell(row, c)).collect()
    }
}

/// Entry in the navigation sidebar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavSection {
    /// Entry caption
    pub label: &'static str,
    /// Whether this entry is the current page
    pub active: bool,
}

/// Full page description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardLayout {
    /// Page title
    pub title: &'static str,
    /// Reporting period shown in the selector
    pub period: ReportingPeriod,
    /// Sidebar entries
    pub navigation: Vec<NavSection>,
    /// Energy output comparison chart
    pub energy_panel: ChartPanel,
    /// Sensor parameter grid
    pub parameter_grid: ParameterGrid,
}

impl DashboardLayout {
    /// The energy-output page for a reporting period
    pub fn standard(period: ReportingPeriod) -> Self {
        Self {
            title: DASHBOARD_TITLE,
            period,
            navigation: vec![
                NavSection {
                    label: "Sensor Data",
                    active: false,
                },
                NavSection {
                    label: "Energy Output",
                    active: true,
                },
                NavSection {
                    label: "Live Feed",
                    active: false,
                },
            ],
            energy_panel: ChartPanel {
                title: "Energy Output Comparison",
                x_axis: Axis {
                    label: "Time (Hours)",
                    key: Some(SeriesField::LABEL_KEY),
                },
                y_axis: Axis {
                    label: "Energy Output (MW)",
                    key: None,
                },
                series: vec![SeriesField::RegularOutput, SeriesField::QmlOutput],
            },
            parameter_grid: ParameterGrid {
                columns: vec![
                    Parameter::Temperature,
                    Parameter::Pressure,
                    Parameter::Salinity,
                ],
                overview: vec![
                    SeriesField::SalineTemp,
                    SeriesField::SalinePressure,
                    SeriesField::FreshSalinity,
                ],
                rows: vec![Reservoir::Fresh, Reservoir::Saline],
            },
        }
    }

    /// Every distinct series the page binds, in order of first appearance
    /// (energy panel, overview strip, reservoir rows)
    pub fn bound_series(&self) -> Vec<SeriesField> {
        let grid = &self.parameter_grid;
        let candidates = self
            .energy_panel
            .series
            .iter()
            .chain(&grid.overview)
            .copied()
            .chain(grid.rows.iter().flat_map(|&row| grid.row_series(row)));

        let mut series = Vec::new();
        for field in candidates {
            if !series.contains(&field) {
                series.push(field);
            }
        }
        series
    }
}

impl Default for DashboardLayout {
    fn default() -> Self {
        Self::standard(ReportingPeriod::default())
    }
}
