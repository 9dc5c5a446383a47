use thiserror::Error;

/// Core error type shared across Wordforge crates.
#[derive(Debug, Error)]
pub enum Error {
    /// A numeric form field could not be parsed as an integer.
    #[error("invalid numeric input for {field}: '{value}' is not an integer")]
    InvalidNumericInput { field: &'static str, value: String },
    /// Parsed values violate configuration invariants.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// A pattern template cannot be used for assembly.
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),
}

/// Convenience alias for results returned by Wordforge crates.
pub type Result<T> = std::result::Result<T, Error>;
