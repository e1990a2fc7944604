//! Error types for H2 option resolution.

use thiserror::Error;

use crate::config::{PROTOCOL_FILE, PROTOCOL_MEM};

/// Result type for H2 option resolution.
pub type H2Result<T> = Result<T, H2Error>;

/// Errors that can occur while resolving connection options.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum H2Error {
    /// Invalid connection factory URL.
    #[error("Invalid connection URL: {0}")]
    InvalidUrl(String),

    /// Protocol option present but not recognized.
    #[error("protocol option {protocol} is unsupported ({}, {})", PROTOCOL_FILE, PROTOCOL_MEM)]
    UnsupportedProtocol {
        /// The offending protocol value.
        protocol: String,
    },

    /// A required option was absent.
    #[error("Missing required option: {key}")]
    MissingOption {
        /// The option key that was required.
        key: String,
    },

    /// The configuration could not be finalized.
    #[error("Invalid configuration: {0}")]
    Validation(String),

    /// A property key outside the known option set.
    #[error("Unknown H2 property: {0}")]
    UnknownProperty(String),

    /// The options are not handled by this provider.
    #[error("Unsupported connection options: {0}")]
    UnsupportedOptions(String),

    /// Environment variable not found.
    #[error("Environment variable not found: {0}")]
    EnvNotFound(String),
}

impl H2Error {
    /// Create an invalid URL error.
    pub fn invalid_url(msg: impl Into<String>) -> Self {
        Self::InvalidUrl(msg.into())
    }

    /// Create a missing option error.
    pub fn missing_option(key: impl Into<String>) -> Self {
        Self::MissingOption { key: key.into() }
    }

    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Check if this error was caused by an unrecognized protocol token.
    pub fn is_unsupported_protocol(&self) -> bool {
        matches!(self, Self::UnsupportedProtocol { .. })
    }

    /// Check if this error was caused by a missing option.
    pub fn is_missing_option(&self) -> bool {
        matches!(self, Self::MissingOption { .. })
    }

    /// Check if this error was raised while finalizing a configuration.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::UnknownProperty(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_protocol_display() {
        let err = H2Error::UnsupportedProtocol {
            protocol: "tcp".to_string(),
        };
        assert_eq!(err.to_string(), "protocol option tcp is unsupported (file, mem)");
        assert!(err.is_unsupported_protocol());
    }

    #[test]
    fn test_missing_option_display() {
        let err = H2Error::missing_option("database");
        assert!(err.to_string().contains("database"));
        assert!(err.is_missing_option());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_error_constructors() {
        assert!(matches!(H2Error::invalid_url("x"), H2Error::InvalidUrl(_)));
        assert!(H2Error::validation("no target").is_validation());
        assert!(H2Error::UnknownProperty("FOO".into()).is_validation());
    }
}
