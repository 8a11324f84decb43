//! # Batch Export
//!
//! Writes a [`SampleBatch`](crate::series::SampleBatch) for consumption by a
//! charting front end or by data tools, and reads Parquet snapshots back.
//!
//! ## Formats
//!
//! - **JSON**: an array of 24 row objects keyed by the binding identifiers
//!   (`name`, `regularOutput`, `qmlOutput`, `freshTemp`, ...), ready to hand
//!   to a line-chart component as its data prop.
//! - **CSV**: the same rows with a header of binding identifiers.
//! - **Parquet**: one row per hour using the [snapshot schema](crate::schema),
//!   with [`GenerationMetadata`] stored in the file footer.
//!
//! ```rust,no_run
//! use osmodash::export::{BatchExporter, ExportConfig, ExportFormat, GenerationMetadata};
//! use osmodash::generator::{seeded_rng, SampleSeriesGenerator};
//!
//! let generator = SampleSeriesGenerator::default();
//! let batch = generator.generate(&mut seeded_rng(7));
//! let metadata = GenerationMetadata::new(Some(7), *generator.profile(), Default::default());
//!
//! let exporter = BatchExporter::new(ExportConfig::for_format(ExportFormat::Parquet));
//! let stats = exporter.write_file(&batch, &metadata, "day.osmodash.parquet")?;
//! println!("{}", stats);
//! # Ok::<(), osmodash::export::ExportError>(())
//! ```
//!
//! Snapshots are single files holding one batch; nothing is appended or
//! accumulated across runs.

mod error;
mod metadata;
mod reader;
mod writer;


pub use error::ExportError;
pub use metadata::GenerationMetadata;
pub use reader::{read_snapshot, read_snapshot_bytes, read_snapshot_from, Snapshot};
pub use writer::{export_file, BatchExporter, ExportConfig, ExportFormat, ExportStats};
