use anyhow::{Context, Result};
use log::info;
use std::io::Write;
use std::path::PathBuf;

use osmodash::export::{BatchExporter, ExportFormat, GenerationMetadata};
use osmodash::generator::{entropy_rng, seeded_rng, SampleSeriesGenerator};
use osmodash::series::SampleBatch;

use super::RunSettings;

/// Generate one batch and write it to a file or stdout
pub fn run(settings: RunSettings, output: Option<PathBuf>) -> Result<()> {
    let format = settings.export.format;
    if output.is_none() && format.is_binary() {
        anyhow::bail!("{} output is binary; pass --output FILE", format);
    }

    let (batch, metadata) = generate_batch(&settings);
    let exporter = BatchExporter::new(settings.export);

    match output {
        Some(path) => {
            let stats = exporter
                .write_file(&batch, &metadata, &path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("  Output file: {}", path.display());
            info!("  Rows written: {}", stats.rows_written);
            info!(
                "  File size: {} bytes ({:.2} KB)",
                stats.bytes_written,
                stats.bytes_written as f64 / 1024.0
            );
        }
        None => {
            let mut stdout = std::io::stdout();
            exporter
                .write(&batch, &metadata, &mut stdout)
                .context("Failed to write to stdout")?;
            if format == ExportFormat::Json {
                writeln!(stdout)?;
            }
        }
    }

    Ok(())
}

/// Generate a batch from resolved settings, with its provenance record
pub fn generate_batch(settings: &RunSettings) -> (SampleBatch, GenerationMetadata) {
    let generator = SampleSeriesGenerator::new(settings.jitter);
    let batch = match settings.seed {
        Some(seed) => {
            info!("Generating with seed {}", seed);
            generator.generate(&mut seeded_rng(seed))
        }
        None => generator.generate(&mut entropy_rng()),
    };

    let metadata = GenerationMetadata::new(settings.seed, settings.jitter, settings.period);
    (batch, metadata)
}
