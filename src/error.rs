//! Error types for the colornamer library

use thiserror::Error;

/// Result type alias for color naming operations
pub type Result<T> = std::result::Result<T, NamingError>;

/// Error types for hex parsing, classification, and configuration
#[derive(Error, Debug)]
pub enum NamingError {
    /// Input was not a 6-digit hex color after optional `#` stripping
    #[error("Malformed hex color {input:?}: {reason}")]
    MalformedColor { input: String, reason: String },

    /// Classifier input outside the documented numeric range
    #[error("Invalid {component} value {value}: expected {min} to {max}")]
    InvalidRange {
        component: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },

    /// A label string did not match any known color name
    #[error("Unknown color label: {input:?}")]
    UnknownLabel { input: String },

    /// Threshold configuration could not be loaded or is inconsistent
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl NamingError {
    /// Create a malformed-color error with context
    pub fn malformed(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedColor {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error without an underlying cause
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
            source: None,
        }
    }

    /// Check if this error indicates a recoverable condition
    ///
    /// A malformed hex sample can be recovered by re-sampling the image;
    /// range and configuration errors indicate caller or deployment bugs.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, NamingError::MalformedColor { .. })
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            NamingError::MalformedColor { .. } => {
                "Color detection failed. Please retake the photo and try again.".to_string()
            }
            NamingError::InvalidRange { .. } => {
                "Color classification received an out-of-range value.".to_string()
            }
            NamingError::UnknownLabel { .. } => {
                "The color name could not be recognized.".to_string()
            }
            NamingError::ConfigError { .. } => {
                "Color naming configuration is invalid. Please check the config file.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_is_recoverable() {
        let err = NamingError::malformed("xyz", "not hex");
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_range_error_not_recoverable() {
        let err = NamingError::InvalidRange {
            component: "hue",
            value: 400.0,
            min: 0.0,
            max: 360.0,
        };
        assert!(!err.is_recoverable());
        assert!(err.to_string().contains("hue"));
    }

    #[test]
    fn test_user_messages_nonempty() {
        let errors = [
            NamingError::malformed("", "empty"),
            NamingError::config_invalid("bad threshold"),
            NamingError::UnknownLabel {
                input: "Chartreuse".to_string(),
            },
        ];
        for err in &errors {
            assert!(!err.user_message().is_empty());
        }
    }
}
