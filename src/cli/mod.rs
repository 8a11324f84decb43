use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use osmodash::export::ExportFormat;

mod config;
mod generate;
mod info;
mod report;
mod summary;

use config::RunSettings;

/// osmodash - Sample series for the osmotic power dashboard
#[derive(Parser)]
#[command(name = "osmodash")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Output encoding for the generate command.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FormatArg {
    /// Array of row objects keyed by binding identifiers
    Json,
    /// Header of binding identifiers, one line per hour
    Csv,
    /// Parquet snapshot (requires --output)
    #[value(alias = "pq")]
    Parquet,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => ExportFormat::Json,
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Parquet => ExportFormat::Parquet,
        }
    }
}

/// Options shared by every command that generates a batch.
#[derive(Args, Debug, Default)]
pub struct GenerationArgs {
    /// Seed for the random source (a fresh OS seed when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Disable all jitter and emit the pure daily curves
    #[arg(long)]
    no_jitter: bool,

    /// Reporting period shown on the dashboard, as YYYY-MM
    #[arg(short, long, value_name = "YYYY-MM")]
    period: Option<String>,

    /// Load settings from a TOML config file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one day of sample series
    Generate {
        #[command(flatten)]
        generation: GenerationArgs,

        /// Output encoding (defaults to the config file, then json)
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,

        /// Output file path (stdout when omitted)
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// Compression level for Parquet ZSTD (1-22)
        #[arg(short = 'c', long, hide = true)]
        compression_level: Option<i32>,
    },

    /// Generate one day and print the dashboard report
    Summary {
        #[command(flatten)]
        generation: GenerationArgs,
    },

    /// Display the contents of a Parquet snapshot
    Info {
        /// Snapshot file path
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print only metadata, not the hourly rows
        #[arg(long)]
        metadata_only: bool,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Generate {
            generation,
            format,
            output,
            compression_level,
        } => {
            let settings = RunSettings::resolve(
                &generation,
                format.map(ExportFormat::from),
                compression_level,
            )?;
            generate::run(settings, output)
        }
        Commands::Summary { generation } => {
            summary::run(RunSettings::resolve(&generation, None, None)?)
        }
        Commands::Info {
            file,
            metadata_only,
        } => info::run(file, metadata_only),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed_format(args: &[&str]) -> Option<ExportFormat> {
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::Generate { format, .. } => format.map(ExportFormat::from),
            _ => panic!("expected generate command"),
        }
    }

    #[test]
    fn test_generate_format_flag() {
        assert_eq!(
            parsed_format(&["osmodash", "generate", "--format", "csv"]),
            Some(ExportFormat::Csv)
        );
        assert_eq!(
            parsed_format(&["osmodash", "generate", "-f", "pq", "-o", "day.parquet"]),
            Some(ExportFormat::Parquet)
        );
        assert_eq!(parsed_format(&["osmodash", "generate"]), None);
    }

    #[test]
    fn test_unknown_format_flag_is_rejected() {
        assert!(Cli::try_parse_from(["osmodash", "generate", "--format", "xlsx"]).is_err());
    }
}
