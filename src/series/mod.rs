//! # Series Model
//!
//! The data model shared by the generator, the statistics, the dashboard
//! layout and the exporters.
//!
//! A [`SampleBatch`] is always one full day: 24 [`HourlySample`]s labelled
//! `"0:00"` through `"23:00"`. Each sample carries eight numeric series which
//! are addressed through [`SeriesField`]; the field's binding key is the
//! identifier a chart front end uses (`regularOutput`, `freshTemp`, ...).

mod batch;
mod error;
mod field;
mod sample;

pub use batch::SampleBatch;
pub use error::SeriesError;
pub use field::{Parameter, Reservoir, SeriesField};
pub use sample::{hour_label, HourlySample};

/// Number of samples in a batch
pub const HOURS_PER_DAY: usize = 24;
