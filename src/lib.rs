//! # osmodash - Sample Series for an Osmotic Power Dashboard
//!
//! `osmodash` produces one simulated day of hourly readings for a two-reservoir
//! (fresh water / saline water) osmotic power plant, together with two derived
//! energy-output series: the plant's regular output and a "QML optimized"
//! output. The batch feeds the "Energy Output Analytics" dashboard, whose
//! charts bind each series by a fixed identifier.
//!
//! ## Key Features
//!
//! - **Deterministic curves, explicit randomness**: every sensor series is a
//!   smooth daily curve plus bounded uniform jitter drawn from a random source
//!   the caller passes in, so a seed reproduces a day exactly.
//!
//! - **Stable binding keys**: rows serialize with the identifiers the chart
//!   components read (`name`, `regularOutput`, `qmlOutput`, `freshTemp`, ...).
//!
//! - **Exports**: JSON and CSV for front ends, Parquet snapshots with
//!   generation metadata in the footer for data tools.
//!
//! ## Quick Start
//!
//! ```rust
//! use osmodash::generator::{seeded_rng, SampleSeriesGenerator};
//! use osmodash::series::SeriesField;
//!
//! let batch = SampleSeriesGenerator::default().generate(&mut seeded_rng(42));
//!
//! assert_eq!(batch.len(), 24);
//! assert_eq!(batch[0].hour_label, "0:00");
//!
//! let regular = batch.column(SeriesField::RegularOutput);
//! println!("peak regular output: {:.2} MW", regular.iter().cloned().fold(f64::MIN, f64::max));
//! ```
//!
//! For callers that do not care about reproducibility, [`generate`] draws from
//! the thread-local random source:
//!
//! ```rust
//! let batch = osmodash::generate();
//! assert_eq!(batch.labels().last(), Some(&"23:00"));
//! ```
//!
//! ## Architecture
//!
//! - [`series`]: sample rows, the 24-row batch and the series identifiers
//! - [`generator`]: daily curves, jitter profile and the energy-output model
//! - [`stats`]: per-series summary figures and the QML uplift
//! - [`dashboard`]: which series the page shows together, axis labels and
//!   the reporting period
//! - [`schema`]: Arrow schema of Parquet snapshots
//! - [`export`]: JSON / CSV / Parquet writers and the snapshot reader
//!
//! ## File Footer Metadata
//!
//! - `osmodash:format_version`: snapshot format version
//! - `osmodash:generator_info`: writing crate and version
//! - `osmodash:generation`: JSON of the seed, jitter profile, reporting
//!   period and generation timestamp

#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod dashboard;
pub mod export;
pub mod generator;
pub mod schema;
pub mod series;
pub mod stats;

use crate::generator::SampleSeriesGenerator;
use crate::series::SampleBatch;

/// Generate one day of samples with the default jitter profile, using the
/// thread-local random source
pub fn generate() -> SampleBatch {
    SampleSeriesGenerator::default().generate(&mut rand::thread_rng())
}

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::dashboard::{DashboardLayout, ReportingPeriod};
    pub use crate::export::{
        read_snapshot, BatchExporter, ExportConfig, ExportError, ExportFormat,
        GenerationMetadata,
    };
    pub use crate::generator::{entropy_rng, seeded_rng, JitterProfile, SampleSeriesGenerator};
    pub use crate::series::{HourlySample, SampleBatch, SeriesError, SeriesField};
    pub use crate::stats::{BatchSummary, SeriesStats};
}
