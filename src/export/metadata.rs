use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ExportError;
use crate::dashboard::ReportingPeriod;
use crate::generator::JitterProfile;
use crate::schema::{KEY_FORMAT_VERSION, KEY_GENERATION, KEY_GENERATOR_INFO, SNAPSHOT_FORMAT_VERSION};

/// How a batch was produced, stored alongside exported data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationMetadata {
    /// When the batch was generated
    pub generated_at: DateTime<Utc>,

    /// Seed of the random source, if one was fixed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Noise strengths used
    pub jitter: JitterProfile,

    /// Reporting period the batch is shown under
    pub period: ReportingPeriod,
}

impl GenerationMetadata {
    /// Metadata stamped with the current time
    pub fn new(seed: Option<u64>, jitter: JitterProfile, period: ReportingPeriod) -> Self {
        Self {
            generated_at: Utc::now(),
            seed,
            jitter,
            period,
        }
    }

    /// Serialize to JSON for Parquet footer storage.
    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> Result<Self, ExportError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Convert to a HashMap suitable for Parquet key_value_metadata
    pub fn to_parquet_metadata(&self) -> Result<HashMap<String, String>, ExportError> {
        let mut metadata = HashMap::new();

        metadata.insert(
            KEY_FORMAT_VERSION.to_string(),
            SNAPSHOT_FORMAT_VERSION.to_string(),
        );
        metadata.insert(
            KEY_GENERATOR_INFO.to_string(),
            format!("osmodash v{}", env!("CARGO_PKG_VERSION")),
        );
        metadata.insert(KEY_GENERATION.to_string(), self.to_json()?);

        Ok(metadata)
    }

    /// Recover generation metadata from Parquet key_value_metadata, if present
    pub fn from_parquet_metadata(
        metadata: &HashMap<String, String>,
    ) -> Result<Option<Self>, ExportError> {
        metadata
            .get(KEY_GENERATION)
            .map(|json| Self::from_json(json))
            .transpose()
    }
}

impl Default for GenerationMetadata {
    fn default() -> Self {
        Self::new(None, JitterProfile::default(), ReportingPeriod::default())
    }
}
