/// Errors that can occur while exporting or reading back a sample batch
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// I/O error during file operations
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from the Arrow library during array operations
    #[error("Arrow error: {0}")]
    ArrowError(#[from] arrow::error::ArrowError),

    /// Error from the Parquet library during file writing or reading
    #[error("Parquet error: {0}")]
    ParquetError(#[from] parquet::errors::ParquetError),

    /// CSV serialization error
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Rows read back do not form a valid batch
    #[error("Invalid batch: {0}")]
    SeriesError(#[from] crate::series::SeriesError),

    /// A snapshot is missing a required column or has the wrong type for it
    #[error("Missing or mistyped column: {0}")]
    MissingColumn(String),

    /// A snapshot column holds nulls where every hour needs a value
    #[error("Column {column} has {count} null value(s)")]
    NullValues {
        /// Column name
        column: String,
        /// Number of nulls found
        count: usize,
    },

    /// Unknown export format name
    #[error("Unknown export format '{0}'. Valid options: json, csv, parquet")]
    UnknownFormat(String),
}
