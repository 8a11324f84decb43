use std::collections::HashMap;
use std::sync::Arc;

use arrow::datatypes::{DataType, Field, Schema, SchemaBuilder};

use super::columns;
use super::constants::{KEY_FORMAT_VERSION, SNAPSHOT_FORMAT_VERSION};
use crate::series::SeriesField;

/// Creates a Field annotated with its unit and chart binding key
fn series_field(field: SeriesField) -> Field {
    let mut metadata = HashMap::new();
    metadata.insert("unit".to_string(), field.unit().to_string());
    metadata.insert("binding_key".to_string(), field.key().to_string());
    Field::new(field.column(), DataType::Float64, false).with_metadata(metadata)
}

/// Creates the Arrow schema for a sample batch snapshot.
///
/// One row per hour: the hour index and label followed by the eight series
/// in binding order.
///
/// # Example
///
/// ```
/// use osmodash::schema::create_snapshot_schema;
///
/// let schema = create_snapshot_schema();
/// assert_eq!(schema.fields().len(), 10);
/// ```
pub fn create_snapshot_schema() -> Schema {
    let mut builder = SchemaBuilder::new();

    builder.push(Field::new(columns::HOUR, DataType::UInt8, false));
    builder.push(
        Field::new(columns::HOUR_LABEL, DataType::Utf8, false).with_metadata(HashMap::from([(
            "binding_key".to_string(),
            SeriesField::LABEL_KEY.to_string(),
        )])),
    );

    for field in SeriesField::ALL {
        builder.push(series_field(field));
    }

    let mut schema_metadata = HashMap::new();
    schema_metadata.insert(
        KEY_FORMAT_VERSION.to_string(),
        SNAPSHOT_FORMAT_VERSION.to_string(),
    );

    builder.finish().with_metadata(schema_metadata)
}

/// Creates an Arc-wrapped snapshot schema for shared ownership
pub fn create_snapshot_schema_arc() -> Arc<Schema> {
    Arc::new(create_snapshot_schema())
}
