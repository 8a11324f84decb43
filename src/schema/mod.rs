//! # Snapshot Schema Definition
//!
//! This module defines the Apache Arrow schema used when a sample batch is
//! written to Parquet.
//!
//! ## Schema Columns
//!
//! | Column | Type | Binding key | Unit |
//! |--------|------|-------------|------|
//! | hour | UInt8 | | |
//! | hour_label | Utf8 | name | |
//! | regular_output | Float64 | regularOutput | MW |
//! | qml_output | Float64 | qmlOutput | MW |
//! | fresh_temp | Float64 | freshTemp | °C |
//! | saline_temp | Float64 | salineTemp | °C |
//! | fresh_pressure | Float64 | freshPressure | bar |
//! | saline_pressure | Float64 | salinePressure | bar |
//! | fresh_salinity | Float64 | freshSalinity | PSU |
//! | saline_salinity | Float64 | salineSalinity | PSU |
//!
//! Each series column carries its unit and binding key as Arrow field
//! metadata, so a reader can bind charts without consulting this crate.

mod builders;
/// Snapshot column name constants.
pub mod columns;
mod constants;


pub use builders::{create_snapshot_schema, create_snapshot_schema_arc};
pub use columns::*;
pub use constants::*;
