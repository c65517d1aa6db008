//! Custom error types for pocketledger
//!
//! The ledger itself never fails; these errors cover the ambient layers
//! (configuration, roster loading, credentials, journal I/O and the shell).

use thiserror::Error;

/// The main error type for pocketledger operations
#[derive(Error, Debug)]
pub enum FinanceError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Password hashing or hash parsing failures
    #[error("Credential error: {0}")]
    Credential(String),

    /// Roster file errors
    #[error("Roster error: {0}")]
    Roster(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Interactive shell errors
    #[error("Shell error: {0}")]
    Shell(String),
}

impl FinanceError {
    /// Create a "not found" error for budgets
    pub fn budget_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Budget",
            identifier: identifier.into(),
        }
    }
}

impl From<std::io::Error> for FinanceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FinanceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for FinanceError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

/// Result type alias for pocketledger operations
pub type FinanceResult<T> = Result<T, FinanceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FinanceError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = FinanceError::budget_not_found("7");
        assert_eq!(err.to_string(), "Budget not found: 7");
        assert!(matches!(err, FinanceError::NotFound { entity_type: "Budget", .. }));
    }

    #[test]
    fn test_yaml_error_converts() {
        let yaml_err = serde_yaml::from_str::<Vec<u32>>("{ not: [a list").unwrap_err();
        let finance_err: FinanceError = yaml_err.into();
        assert!(matches!(finance_err, FinanceError::Yaml(_)));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let finance_err: FinanceError = io_err.into();
        assert!(matches!(finance_err, FinanceError::Io(_)));
    }
}
