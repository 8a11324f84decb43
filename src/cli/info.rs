use anyhow::{Context, Result};
use std::path::PathBuf;

use osmodash::export::read_snapshot;
use osmodash::series::SeriesField;

/// Display the contents of a Parquet snapshot
pub fn run(file: PathBuf, metadata_only: bool) -> Result<()> {
    if !file.exists() {
        anyhow::bail!("File does not exist: {}", file.display());
    }

    let snapshot = read_snapshot(&file)
        .with_context(|| format!("Failed to read snapshot: {}", file.display()))?;

    println!("osmodash Snapshot Information");
    println!("=============================");
    println!("File: {}", file.display());
    println!();

    println!("File Statistics:");
    println!("  Format version: {}", snapshot.format_version);
    println!("  Row groups: {}", snapshot.num_row_groups);
    println!("  Rows: {}", snapshot.batch.len());
    println!();

    match &snapshot.generation {
        Some(generation) => {
            println!("Generation:");
            println!("  Generated at: {}", generation.generated_at.to_rfc3339());
            println!(
                "  Seed: {}",
                generation
                    .seed
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "<none>".to_string())
            );
            println!("  Period: {}", generation.period);
            println!("  Jitter:");
            for field in SeriesField::ALL {
                println!(
                    "    {:<16} {}",
                    field.key(),
                    generation.jitter.strength(field)
                );
            }
            println!();
        }
        None => {
            println!("Generation: <not recorded>");
            println!();
        }
    }

    println!("Metadata Keys:");
    let mut keys: Vec<_> = snapshot.key_value_metadata.iter().collect();
    keys.sort();
    for (key, value) in keys {
        let value_preview = if value.len() > 100 {
            format!("{}... ({} bytes)", value.chars().take(100).collect::<String>(), value.len())
        } else {
            value.clone()
        };
        println!("  {}: {}", key, value_preview);
    }

    if metadata_only {
        return Ok(());
    }

    println!();
    println!("Rows:");
    let header: Vec<String> = SeriesField::ALL
        .iter()
        .map(|f| format!("{:>14}", f.key()))
        .collect();
    println!("  {:>6}{}", SeriesField::LABEL_KEY, header.join(""));
    for sample in &snapshot.batch {
        let values: Vec<String> = SeriesField::ALL
            .iter()
            .map(|f| format!("{:>14.3}", f.value(sample)))
            .collect();
        println!("  {:>6}{}", sample.hour_label, values.join(""));
    }

    Ok(())
}
