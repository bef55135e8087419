//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for rescore operations
#[derive(Debug, Error)]
pub enum Error {
    /// Rating data rejected before the pipeline ran
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// YAML errors
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    /// TOML errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Create a file system error with path context
    pub fn file_system(
        message: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            message: message.into(),
            path: Some(path.into()),
            source: Some(source),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// True when the error came from rejected rating data
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Reasons a rating set is rejected.
///
/// Every variant names the category (and item, when there is one) so the
/// offending entry can be located in the input document.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("rating data must be an object mapping category ids to item ratings")]
    NotAnObject,

    #[error("rating data cannot be empty")]
    EmptyRatingSet,

    #[error("invalid responses for category {category}: expected an object of item ratings")]
    InvalidCategory { category: String },

    #[error("no responses found for category {category}")]
    EmptyCategory { category: String },

    #[error("invalid response value {value} for category {category}, item {item}")]
    NonNumeric {
        category: String,
        item: String,
        value: String,
    },

    #[error("response value {value} out of range (1-5) for category {category}, item {item}")]
    OutOfRange {
        category: String,
        item: String,
        value: f64,
    },
}

impl ValidationError {
    /// Category the error refers to, if any
    pub fn category(&self) -> Option<&str> {
        match self {
            Self::NotAnObject | Self::EmptyRatingSet => None,
            Self::InvalidCategory { category }
            | Self::EmptyCategory { category }
            | Self::NonNumeric { category, .. }
            | Self::OutOfRange { category, .. } => Some(category),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
