use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A layer failed to parse or a value had the wrong type.
    #[error("failed to load civic configuration: {0}")]
    Figment(#[from] figment::Error),

    /// Parsed fine but violates a portal constraint.
    #[error("config field `{field}` is invalid: {reason}")]
    InvalidValue { field: String, reason: String },
}
