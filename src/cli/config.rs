//! TOML configuration file support.
//!
//! Instead of repeating flags, settings can live in a config file:
//!
//! ```toml
//! # osmodash.toml
//! [generator]
//! seed = 42
//! period = "2025-04"
//!
//! [jitter]
//! fresh_temp = 0.5
//! saline_salinity = 0.8
//!
//! [export]
//! format = "parquet"
//! compression_level = 3
//! ```
//!
//! Command-line flags take precedence over file values.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use osmodash::dashboard::ReportingPeriod;
use osmodash::export::{ExportConfig, ExportFormat};
use osmodash::generator::JitterProfile;

use super::GenerationArgs;

/// Root configuration structure for osmodash.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Random source and reporting period.
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Noise strengths; unset keys keep their default strength.
    #[serde(default)]
    pub jitter: JitterProfile,

    /// Output settings for the generate command.
    #[serde(default)]
    pub export: ExportSection,
}

/// Configuration for batch generation.
#[derive(Debug, Default, Deserialize)]
pub struct GeneratorConfig {
    /// Fixed seed for reproducible batches.
    pub seed: Option<u64>,

    /// Reporting period as YYYY-MM.
    pub period: Option<ReportingPeriod>,
}

/// Configuration for exports.
#[derive(Debug, Default, Deserialize)]
pub struct ExportSection {
    /// Output encoding: "json", "csv" or "parquet" ("pq"), any case.
    pub format: Option<ExportFormat>,

    /// ZSTD compression level for Parquet (1-22).
    pub compression_level: Option<i32>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }
}

/// Effective settings after layering flags over the config file.
#[derive(Debug, Clone)]
pub struct RunSettings {
    /// Seed, if the batch should be reproducible.
    pub seed: Option<u64>,

    /// Noise strengths to generate with.
    pub jitter: JitterProfile,

    /// Reporting period shown with the batch.
    pub period: ReportingPeriod,

    /// Exporter configuration.
    pub export: ExportConfig,
}

impl RunSettings {
    /// Load the config file named in `args` (if any) and apply the flags.
    pub fn resolve(
        args: &GenerationArgs,
        format: Option<ExportFormat>,
        compression_level: Option<i32>,
    ) -> Result<Self> {
        let config = match &args.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };
        Self::layer(config, args, format, compression_level)
    }

    fn layer(
        config: Config,
        args: &GenerationArgs,
        format: Option<ExportFormat>,
        compression_level: Option<i32>,
    ) -> Result<Self> {
        let period = match &args.period {
            Some(text) => text
                .parse::<ReportingPeriod>()
                .with_context(|| format!("Invalid --period value: {}", text))?,
            None => config.generator.period.unwrap_or_default(),
        };

        let jitter = if args.no_jitter {
            JitterProfile::none()
        } else {
            config.jitter
        };
        jitter.validate().context("Invalid jitter configuration")?;

        let mut export =
            ExportConfig::for_format(format.or(config.export.format).unwrap_or_default());
        if let Some(level) = compression_level.or(config.export.compression_level) {
            if !(1..=22).contains(&level) {
                anyhow::bail!("Compression level must be between 1 and 22, got {}", level);
            }
            export.compression_level = level;
        }

        Ok(Self {
            seed: args.seed.or(config.generator.seed),
            jitter,
            period,
            export,
        })
    }
}
