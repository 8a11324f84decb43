/// Snapshot format version - follows semantic versioning
pub const SNAPSHOT_FORMAT_VERSION: &str = "1.0.0";

/// File extension for Parquet snapshots
pub const SNAPSHOT_EXTENSION: &str = ".osmodash.parquet";

/// Metadata key for format version in Parquet footer
pub const KEY_FORMAT_VERSION: &str = "osmodash:format_version";

/// Metadata key for generation parameters (JSON) in Parquet footer
pub const KEY_GENERATION: &str = "osmodash:generation";

/// Metadata key for generator software info
pub const KEY_GENERATOR_INFO: &str = "osmodash:generator_info";
