//! Error types for the color_ops library

use thiserror::Error;

/// Result type alias for color_ops operations
pub type Result<T> = std::result::Result<T, ColorError>;

/// Errors raised by validated parsing and configuration handling
///
/// The lenient conversion functions (`hex_to_rgb`, `saturate`, ...) return
/// `Option` instead; these variants cover the strict entry points.
#[derive(Error, Debug)]
pub enum ColorError {
    /// Text is not a recognised hex color
    #[error("Invalid hex color: {input:?}")]
    InvalidHex { input: String },

    /// Text is not a recognised `rgb(r, g, b)` function
    #[error("Invalid CSS rgb() color: {input:?}")]
    InvalidCss { input: String },

    /// A channel value is outside [0, 255] or not an integer
    #[error("Invalid {channel} channel: {value}")]
    InvalidChannel { channel: &'static str, value: String },

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    /// Palette configuration could not be read or written
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ColorError {
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

    /// Create an invalid parameter error
    pub fn invalid_parameter(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Check if this error came from parsing color text
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            ColorError::InvalidHex { .. }
                | ColorError::InvalidCss { .. }
                | ColorError::InvalidChannel { .. }
        )
    }
}
