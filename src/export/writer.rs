use std::fmt;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, StringArray, UInt8Array};
use arrow::record_batch::RecordBatch;
use log::{debug, info};
use parquet::arrow::ArrowWriter;
use parquet::basic::{Compression, ZstdLevel};
use parquet::file::properties::{EnabledStatistics, WriterProperties};
use parquet::format::KeyValue;
use serde::{Deserialize, Serialize};

use super::{ExportError, GenerationMetadata};
use crate::schema::create_snapshot_schema_arc;
use crate::series::{SampleBatch, SeriesField};

/// Output encodings for a sample batch.
///
/// Names parse case-insensitively: `json`, `csv`, and `parquet` (or its
/// short form `pq`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ExportFormat {
    /// Array of row objects keyed by binding identifiers
    #[default]
    Json,
    /// Header row of binding identifiers, one line per hour
    Csv,
    /// Columnar snapshot with generation metadata in the footer
    Parquet,
}

impl ExportFormat {
    /// Conventional file extension
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Parquet => "parquet",
        }
    }

    /// Whether the encoding is binary (unsuitable for a terminal)
    pub fn is_binary(&self) -> bool {
        matches!(self, ExportFormat::Parquet)
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl TryFrom<String> for ExportFormat {
    type Error = ExportError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            "parquet" | "pq" => Ok(ExportFormat::Parquet),
            _ => Err(ExportError::UnknownFormat(s.to_string())),
        }
    }
}

/// Configuration for the batch exporter
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Output encoding
    pub format: ExportFormat,

    /// ZSTD compression level for Parquet (1-22)
    pub compression_level: i32,

    /// Whether to write statistics for Parquet columns
    pub write_statistics: bool,

    /// Pretty-print JSON output
    pub pretty_json: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: ExportFormat::Json,
            compression_level: 3,
            write_statistics: true,
            pretty_json: true,
        }
    }
}

impl ExportConfig {
    /// Default configuration for a format
    pub fn for_format(format: ExportFormat) -> Self {
        Self {
            format,
            ..Default::default()
        }
    }

    /// Create Parquet writer properties from this configuration
    fn to_writer_properties(
        &self,
        metadata: &std::collections::HashMap<String, String>,
    ) -> WriterProperties {
        let compression = Compression::ZSTD(
            ZstdLevel::try_new(self.compression_level).unwrap_or(ZstdLevel::default()),
        );

        let statistics = if self.write_statistics {
            EnabledStatistics::Chunk
        } else {
            EnabledStatistics::None
        };

        let kv_metadata: Vec<KeyValue> = metadata
            .iter()
            .map(|(k, v)| KeyValue {
                key: k.clone(),
                value: Some(v.clone()),
            })
            .collect();

        WriterProperties::builder()
            .set_compression(compression)
            .set_statistics_enabled(statistics)
            .set_key_value_metadata(Some(kv_metadata))
            .build()
    }
}

/// Statistics from a completed export
#[derive(Debug, Clone)]
pub struct ExportStats {
    /// Encoding written
    pub format: ExportFormat,
    /// Number of rows (hours) written
    pub rows_written: usize,
    /// Bytes written
    pub bytes_written: u64,
}

impl fmt::Display for ExportStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Wrote {} rows as {} ({} bytes)",
            self.rows_written, self.format, self.bytes_written
        )
    }
}

/// Writes sample batches in any [`ExportFormat`]
#[derive(Debug, Clone, Default)]
pub struct BatchExporter {
    config: ExportConfig,
}

impl BatchExporter {
    /// Create an exporter with the given configuration
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Encode a batch into any writer
    pub fn write<W: Write + Send>(
        &self,
        batch: &SampleBatch,
        metadata: &GenerationMetadata,
        writer: W,
    ) -> Result<ExportStats, ExportError> {
        let mut counter = CountingWriter::new(writer);

        match self.config.format {
            ExportFormat::Json => self.write_json(batch, &mut counter)?,
            ExportFormat::Csv => write_csv(batch, &mut counter)?,
            ExportFormat::Parquet => self.write_parquet(batch, metadata, &mut counter)?,
        }
        counter.flush()?;

        let stats = ExportStats {
            format: self.config.format,
            rows_written: batch.len(),
            bytes_written: counter.bytes_written,
        };
        debug!("{}", stats);
        Ok(stats)
    }

    /// Encode a batch into a file.
    ///
    /// The data goes to a temporary file next to `path` first and is moved
    /// into place only once fully written.
    pub fn write_file<P: AsRef<Path>>(
        &self,
        batch: &SampleBatch,
        metadata: &GenerationMetadata,
        path: P,
    ) -> Result<ExportStats, ExportError> {
        let path = path.as_ref();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp = tempfile::NamedTempFile::new_in(dir)?;
        let stats = self.write(batch, metadata, temp.as_file_mut())?;
        temp.as_file_mut().sync_all()?;
        temp.persist(path).map_err(|e| e.error)?;

        info!("{} to {}", stats, path.display());
        Ok(stats)
    }

    fn write_json<W: Write>(&self, batch: &SampleBatch, writer: W) -> Result<(), ExportError> {
        if self.config.pretty_json {
            serde_json::to_writer_pretty(writer, batch)?;
        } else {
            serde_json::to_writer(writer, batch)?;
        }
        Ok(())
    }

    fn write_parquet<W: Write + Send>(
        &self,
        batch: &SampleBatch,
        metadata: &GenerationMetadata,
        writer: W,
    ) -> Result<(), ExportError> {
        let schema = create_snapshot_schema_arc();
        let props = self
            .config
            .to_writer_properties(&metadata.to_parquet_metadata()?);

        let hours: Vec<u8> = (0..batch.len()).map(|h| h as u8).collect();
        let mut arrays: Vec<ArrayRef> = vec![
            Arc::new(UInt8Array::from(hours)),
            Arc::new(StringArray::from(batch.labels())),
        ];
        for field in SeriesField::ALL {
            arrays.push(Arc::new(Float64Array::from(batch.column(field))));
        }

        let record_batch = RecordBatch::try_new(schema.clone(), arrays)?;

        let mut arrow_writer = ArrowWriter::try_new(writer, schema, Some(props))?;
        arrow_writer.write(&record_batch)?;
        arrow_writer.close()?;
        Ok(())
    }
}

fn write_csv<W: Write>(batch: &SampleBatch, writer: W) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for sample in batch {
        csv_writer.serialize(sample)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write adapter that tallies the bytes passing through
struct CountingWriter<W> {
    inner: W,
    bytes_written: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self {
            inner,
            bytes_written: 0,
        }
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.bytes_written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}

/// Convenience wrapper: export a batch to a file with the format's defaults
pub fn export_file<P: AsRef<Path>>(
    batch: &SampleBatch,
    metadata: &GenerationMetadata,
    format: ExportFormat,
    path: P,
) -> Result<ExportStats, ExportError> {
    BatchExporter::new(ExportConfig::for_format(format)).write_file(batch, metadata, path)
}
