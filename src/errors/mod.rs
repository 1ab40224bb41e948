//! Error handling module for the department admin client.
//!
//! One central error type covers the two failure classes the client
//! distinguishes: validation errors detected locally before any network
//! call, and API/transport failures. Neither is fatal; the view stays
//! interactive and state keeps reflecting the last successful fetch.

use thiserror::Error;

/// Application error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Input rejected locally, before any network call
    #[error("validation error: {0}")]
    Validation(String),

    /// The API answered with a non-2xx status
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Transport-level failure (connect, timeout, decode)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid configuration (e.g. unparseable base URL)
    #[error("configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Message suitable for the status line.
    ///
    /// Validation messages are written for the user and pass through
    /// verbatim; network and API failures collapse to one generic message,
    /// with the detail kept for the logs.
    pub fn message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Api { .. } | AppError::Http(_) => "The API request failed".to_string(),
            AppError::Config(msg) => msg.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = AppError::Api {
            status: 500,
            message: "Internal Server Error".to_string(),
        };
        assert_eq!(err.to_string(), "API error (500): Internal Server Error");
        // API detail stays out of the user-facing message
        assert_eq!(err.message(), "The API request failed");
    }

    #[test]
    fn test_validation_error_display() {
        let err = AppError::Validation("name is required".to_string());
        assert_eq!(err.to_string(), "validation error: name is required");
        assert_eq!(err.message(), "name is required");
    }
}
