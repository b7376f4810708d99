//! Error types for connector construction and lifecycle.
//!
//! SQL fragment generation itself never fails; these errors only cover
//! building a dialect from a [`Config`](crate::config::Config) and using
//! it after it has been closed.

/// Errors raised by the relational abstraction layer.
#[derive(Debug, thiserror::Error)]
pub enum RdbError {
    /// The configured driver is not handled by this dialect.
    #[error("unsupported driver '{driver}', expected one of: {}", .expected.join(", "))]
    UnsupportedDriver {
        /// Driver named in the config.
        driver: String,
        /// Driver names the dialect accepts.
        expected: Vec<&'static str>,
    },

    /// A required configuration value is empty.
    #[error("missing config value: {0}")]
    MissingConfig(&'static str),

    /// Config (de)serialization failed.
    #[error("config serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The connector base was already closed.
    #[error("connector for database '{0}' is closed")]
    Closed(String),
}

/// Result type for rdb operations.
pub type Result<T> = std::result::Result<T, RdbError>;
