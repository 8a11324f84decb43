//! Integration tests for batch export
//!
//! These tests write real files and read them back with independent readers.

use std::fs::{self, File};

use osmodash::dashboard::ReportingPeriod;
use osmodash::export::{
    export_file, read_snapshot, BatchExporter, ExportConfig, ExportFormat, GenerationMetadata,
};
use osmodash::generator::{seeded_rng, JitterProfile, SampleSeriesGenerator};
use osmodash::schema::{
    create_snapshot_schema, KEY_FORMAT_VERSION, KEY_GENERATION, SNAPSHOT_EXTENSION,
};
use osmodash::series::SeriesField;
use parquet::file::reader::{FileReader, SerializedFileReader};
use tempfile::tempdir;

fn metadata(seed: u64) -> GenerationMetadata {
    GenerationMetadata::new(
        Some(seed),
        JitterProfile::default(),
        ReportingPeriod::new(2025, 4).unwrap(),
    )
}

/// Test the complete generate-write-read cycle for Parquet
#[test]
fn test_parquet_write_read_cycle() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(format!("day{}", SNAPSHOT_EXTENSION));

    let batch = SampleSeriesGenerator::default().generate(&mut seeded_rng(2025));
    let stats = export_file(&batch, &metadata(2025), ExportFormat::Parquet, &path).unwrap();
    assert_eq!(stats.rows_written, 24);

    let snapshot = read_snapshot(&path).unwrap();
    assert_eq!(snapshot.batch, batch);
    assert_eq!(snapshot.generation.unwrap().seed, Some(2025));
}

/// The file is plain Parquet that any reader can open
#[test]
fn test_parquet_readable_by_generic_reader() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("day.parquet");

    let batch = SampleSeriesGenerator::noiseless().generate(&mut seeded_rng(0));
    export_file(&batch, &metadata(0), ExportFormat::Parquet, &path).unwrap();

    let reader = SerializedFileReader::new(File::open(&path).unwrap()).unwrap();
    let file_metadata = reader.metadata().file_metadata();

    assert_eq!(file_metadata.num_rows(), 24);
    assert_eq!(
        file_metadata.schema_descr().num_columns(),
        create_snapshot_schema().fields().len()
    );

    let keys: Vec<&str> = file_metadata
        .key_value_metadata()
        .unwrap()
        .iter()
        .map(|kv| kv.key.as_str())
        .collect();
    assert!(keys.contains(&KEY_FORMAT_VERSION));
    assert!(keys.contains(&KEY_GENERATION));
}

/// Low and high ZSTD levels both produce readable files
#[test]
fn test_compression_levels() {
    let dir = tempdir().unwrap();
    let batch = SampleSeriesGenerator::default().generate(&mut seeded_rng(8));

    for level in [1, 19] {
        let path = dir.path().join(format!("level{}.parquet", level));
        let exporter = BatchExporter::new(ExportConfig {
            compression_level: level,
            ..ExportConfig::for_format(ExportFormat::Parquet)
        });
        exporter.write_file(&batch, &metadata(8), &path).unwrap();

        assert_eq!(read_snapshot(&path).unwrap().batch, batch);
    }
}

/// JSON files hold 24 row objects with the chart binding keys
#[test]
fn test_json_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("day.json");

    let batch = SampleSeriesGenerator::default().generate(&mut seeded_rng(9));
    export_file(&batch, &metadata(9), ExportFormat::Json, &path).unwrap();

    let rows: Vec<serde_json::Map<String, serde_json::Value>> =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(rows.len(), 24);

    let mut expected: Vec<&str> = SeriesField::ALL.iter().map(|f| f.key()).collect();
    expected.push(SeriesField::LABEL_KEY);
    expected.sort();
    for row in &rows {
        let mut keys: Vec<&str> = row.keys().map(|k| k.as_str()).collect();
        keys.sort();
        assert_eq!(keys, expected);
    }
}

/// CSV files can be re-read by a CSV reader with matching headers
#[test]
fn test_csv_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("day.csv");

    let batch = SampleSeriesGenerator::default().generate(&mut seeded_rng(10));
    export_file(&batch, &metadata(10), ExportFormat::Csv, &path).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(&headers[0], "name");
    assert_eq!(&headers[1], "regularOutput");

    let labels: Vec<String> = reader
        .records()
        .map(|r| r.unwrap()[0].to_string())
        .collect();
    assert_eq!(labels.first().map(String::as_str), Some("0:00"));
    assert_eq!(labels.len(), 24);
}

/// Reading a missing file reports an I/O error
#[test]
fn test_missing_file() {
    let dir = tempdir().unwrap();
    assert!(read_snapshot(dir.path().join("absent.parquet")).is_err());
}
