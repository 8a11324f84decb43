//! Text rendering of the dashboard page for the summary command.

use std::fmt;

#[cfg(feature = "colorized_output")]
use console::style;

use osmodash::dashboard::DashboardLayout;
use osmodash::series::{hour_label, SeriesField};
use osmodash::stats::{BatchSummary, SeriesStats};

/// Dashboard layout filled with the statistics of one batch
pub struct DashboardReport<'a> {
    layout: &'a DashboardLayout,
    summary: &'a BatchSummary,
    seed: Option<u64>,
}

impl<'a> DashboardReport<'a> {
    pub fn new(layout: &'a DashboardLayout, summary: &'a BatchSummary, seed: Option<u64>) -> Self {
        Self {
            layout,
            summary,
            seed,
        }
    }

    fn seed_text(&self) -> String {
        self.seed
            .map(|s| s.to_string())
            .unwrap_or_else(|| "random".to_string())
    }

    fn uplift_text(&self) -> String {
        self.summary
            .qml_uplift
            .map(|u| format!("{:+.1}%", u * 100.0))
            .unwrap_or_else(|| "n/a".to_string())
    }

    fn series_line(field: SeriesField, stats: &SeriesStats) -> String {
        format!(
            "{:<16} {:>8.2} {:>8.2} {:>8.2} {:>6}  {}",
            field.label(),
            stats.min,
            stats.max,
            stats.mean,
            hour_label(stats.peak_hour),
            field.unit()
        )
    }

    fn header_line() -> String {
        format!(
            "{:<16} {:>8} {:>8} {:>8} {:>6}",
            "", "min", "max", "mean", "peak"
        )
    }

    /// Render with terminal colors when the feature is enabled.
    pub fn format_colored(&self) -> String {
        #[cfg(feature = "colorized_output")]
        {
            let mut output = String::new();
            let layout = self.layout;

            output.push_str(&format!("{}\n", style(layout.title).bold().cyan()));
            output.push_str(&format!(
                "{}\n",
                style("=".repeat(layout.title.len())).cyan()
            ));
            output.push_str(&format!(
                "{}: {}    {}: {}\n",
                style("Period").bold(),
                layout.period,
                style("Seed").bold(),
                self.seed_text()
            ));

            let nav: Vec<String> = layout
                .navigation
                .iter()
                .map(|section| {
                    if section.active {
                        format!("[{}]", style(section.label).green().bold())
                    } else {
                        style(section.label).dim().to_string()
                    }
                })
                .collect();
            output.push_str(&format!("{}\n\n", nav.join("  ")));

            let panel = &layout.energy_panel;
            output.push_str(&format!(
                "{} ({} vs {})\n",
                style(panel.title).bold(),
                panel.y_axis.label,
                panel.x_axis.label
            ));
            output.push_str(&format!("{}\n", style(Self::header_line()).dim()));
            for &field in &panel.series {
                if let Some(stats) = self.summary.get(field) {
                    output.push_str(&format!("{}\n", Self::series_line(field, stats)));
                }
            }
            output.push_str(&format!(
                "{}: {}\n\n",
                style("QML uplift").bold(),
                style(self.uplift_text()).green()
            ));

            let grid = &layout.parameter_grid;
            output.push_str(&format!("{}\n", style("Overview").bold().yellow()));
            output.push_str(&format!("{}\n", style(Self::header_line()).dim()));
            for &field in &grid.overview {
                if let Some(stats) = self.summary.get(field) {
                    output.push_str(&format!("{}\n", Self::series_line(field, stats)));
                }
            }
            output.push('\n');

            for &row in &grid.rows {
                output.push_str(&format!("{}\n", style(row.label()).bold().yellow()));
                output.push_str(&format!("{}\n", style(Self::header_line()).dim()));
                for field in grid.row_series(row) {
                    if let Some(stats) = self.summary.get(field) {
                        output.push_str(&format!("{}\n", Self::series_line(field, stats)));
                    }
                }
                output.push('\n');
            }

            output
        }

        #[cfg(not(feature = "colorized_output"))]
        {
            format!("{}", self)
        }
    }
}

impl fmt::Display for DashboardReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layout = self.layout;

        writeln!(f, "{}", layout.title)?;
        writeln!(f, "{}", "=".repeat(layout.title.len()))?;
        writeln!(f, "Period: {}    Seed: {}", layout.period, self.seed_text())?;

        let nav: Vec<String> = layout
            .navigation
            .iter()
            .map(|section| {
                if section.active {
                    format!("[{}]", section.label)
                } else {
                    section.label.to_string()
                }
            })
            .collect();
        writeln!(f, "{}", nav.join("  "))?;
        writeln!(f)?;

        let panel = &layout.energy_panel;
        writeln!(
            f,
            "{} ({} vs {})",
            panel.title, panel.y_axis.label, panel.x_axis.label
        )?;
        writeln!(f, "{}", Self::header_line())?;
        for &field in &panel.series {
            if let Some(stats) = self.summary.get(field) {
                writeln!(f, "{}", Self::series_line(field, stats))?;
            }
        }
        writeln!(f, "QML uplift: {}", self.uplift_text())?;
        writeln!(f)?;

        let grid = &layout.parameter_grid;
        writeln!(f, "Overview")?;
        writeln!(f, "{}", Self::header_line())?;
        for &field in &grid.overview {
            if let Some(stats) = self.summary.get(field) {
                writeln!(f, "{}", Self::series_line(field, stats))?;
            }
        }
        writeln!(f)?;

        for &row in &grid.rows {
            writeln!(f, "{}", row.label())?;
            writeln!(f, "{}", Self::header_line())?;
            for field in grid.row_series(row) {
                if let Some(stats) = self.summary.get(field) {
                    writeln!(f, "{}", Self::series_line(field, stats))?;
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
