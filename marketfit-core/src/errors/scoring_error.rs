/// Scoring configuration errors. These are programming errors, raised once
/// when a scorer is constructed, never while scoring a profile.
#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    #[error("invalid weight table: {reason}")]
    InvalidWeights { reason: String },

    #[error("category {category} has an empty field list")]
    EmptyFieldList { category: String },

    #[error("field {suffix} has non-positive max value {max_value}")]
    InvalidFieldRange { suffix: String, max_value: f64 },
}
