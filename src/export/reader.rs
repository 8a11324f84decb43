use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use arrow::array::{Array, Float64Array, StringArray};
use arrow::record_batch::RecordBatch;
use bytes::Bytes;
use log::debug;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use parquet::file::reader::ChunkReader;

use super::{ExportError, GenerationMetadata};
use crate::schema::{HOUR_LABEL, KEY_FORMAT_VERSION};
use crate::series::{HourlySample, SampleBatch, SeriesField};

/// Contents of a Parquet snapshot
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// The batch stored in the file
    pub batch: SampleBatch,
    /// Generation metadata from the footer, if the writer stored it
    pub generation: Option<GenerationMetadata>,
    /// Snapshot format version ("unknown" when absent)
    pub format_version: String,
    /// Number of Parquet row groups
    pub num_row_groups: usize,
    /// Raw key-value metadata from the Parquet footer
    pub key_value_metadata: HashMap<String, String>,
}

/// Read a Parquet snapshot written by [`super::BatchExporter`]
pub fn read_snapshot<P: AsRef<Path>>(path: P) -> Result<Snapshot, ExportError> {
    let file = File::open(path.as_ref())?;
    read_snapshot_from(file)
}

/// Read a Parquet snapshot held in memory
pub fn read_snapshot_bytes(data: impl Into<Bytes>) -> Result<Snapshot, ExportError> {
    read_snapshot_from(data.into())
}

/// Read a Parquet snapshot from any Parquet chunk source
pub fn read_snapshot_from<R: ChunkReader + 'static>(source: R) -> Result<Snapshot, ExportError> {
    let builder = ParquetRecordBatchReaderBuilder::try_new(source)?;

    let parquet_metadata = builder.metadata().clone();
    let file_meta = parquet_metadata.file_metadata();

    let mut kv_metadata = HashMap::new();
    if let Some(kv_list) = file_meta.key_value_metadata() {
        for kv in kv_list {
            if let Some(value) = &kv.value {
                kv_metadata.insert(kv.key.clone(), value.clone());
            }
        }
    }

    let format_version = kv_metadata
        .get(KEY_FORMAT_VERSION)
        .cloned()
        .unwrap_or_else(|| "unknown".to_string());
    let generation = GenerationMetadata::from_parquet_metadata(&kv_metadata)?;

    let mut samples = Vec::new();
    for record_batch in builder.build()? {
        samples.extend(samples_from_record_batch(&record_batch?)?);
    }
    debug!("Read {} rows from snapshot", samples.len());

    Ok(Snapshot {
        batch: SampleBatch::from_samples(samples)?,
        generation,
        format_version,
        num_row_groups: parquet_metadata.num_row_groups(),
        key_value_metadata: kv_metadata,
    })
}

fn samples_from_record_batch(batch: &RecordBatch) -> Result<Vec<HourlySample>, ExportError> {
    let labels = batch
        .column_by_name(HOUR_LABEL)
        .and_then(|c| c.as_any().downcast_ref::<StringArray>())
        .ok_or_else(|| ExportError::MissingColumn(HOUR_LABEL.to_string()))?;
    reject_nulls(HOUR_LABEL, labels)?;

    let mut columns: HashMap<SeriesField, &Float64Array> = HashMap::new();
    for field in SeriesField::ALL {
        let column = batch
            .column_by_name(field.column())
            .and_then(|c| c.as_any().downcast_ref::<Float64Array>())
            .ok_or_else(|| ExportError::MissingColumn(field.column().to_string()))?;
        reject_nulls(field.column(), column)?;
        columns.insert(field, column);
    }

    let value = |field: SeriesField, row: usize| columns[&field].value(row);

    Ok((0..batch.num_rows())
        .map(|row| HourlySample {
            hour_label: labels.value(row).to_string(),
            regular_output: value(SeriesField::RegularOutput, row),
            qml_output: value(SeriesField::QmlOutput, row),
            fresh_temp: value(SeriesField::FreshTemp, row),
            saline_temp: value(SeriesField::SalineTemp, row),
            fresh_pressure: value(SeriesField::FreshPressure, row),
            saline_pressure: value(SeriesField::SalinePressure, row),
            fresh_salinity: value(SeriesField::FreshSalinity, row),
            saline_salinity: value(SeriesField::SalineSalinity, row),
        })
        .collect())
}

fn reject_nulls(name: &str, column: &dyn Array) -> Result<(), ExportError> {
    match column.null_count() {
        0 => Ok(()),
        count => Err(ExportError::NullValues {
            column: name.to_string(),
            count,
        }),
    }
}
