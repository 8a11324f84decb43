/// Errors raised while validating sample batches and generation settings
#[derive(Debug, thiserror::Error)]
pub enum SeriesError {
    /// A batch must hold exactly one sample per hour of the day
    #[error("Expected {expected} hourly samples, got {actual}")]
    WrongSampleCount {
        /// Required number of samples
        expected: usize,
        /// Number of samples supplied
        actual: usize,
    },

    /// A sample's hour label does not match its position in the batch
    #[error("Sample at position {position} is labelled '{label}', expected '{expected}'")]
    LabelMismatch {
        /// Zero-based position of the offending sample
        position: usize,
        /// Label found on the sample
        label: String,
        /// Label required at that position
        expected: String,
    },

    /// A jitter strength is negative or not a finite number
    #[error("Invalid jitter strength for {series}: {value}")]
    InvalidJitter {
        /// Binding key of the series
        series: &'static str,
        /// Rejected strength
        value: f64,
    },

    /// A reporting period string could not be parsed
    #[error("Invalid reporting period '{0}' (expected YYYY-MM)")]
    InvalidPeriod(String),
}
