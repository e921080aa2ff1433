//! Error types for the skin_tone library
//!
//! The analysis core itself is total; errors only arise at the edges
//! (image decoding, configuration and catalog files, invalid buffers).

use thiserror::Error;

/// Result type alias for skin_tone operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Error types for tone analysis operations
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Image file could not be loaded or decoded
    #[error("Failed to load image: {message}")]
    ImageLoadError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration file could not be read, parsed or validated
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Palette or look catalog could not be read or parsed
    #[error("Catalog error: {message}")]
    CatalogError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    /// Generic processing error
    #[error("Processing error: {0}")]
    ProcessingError(String),
}

impl AnalysisError {
    /// Create an image load error with context
    pub fn image_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageLoadError {
            message: message.into(),
            source: Some(Box::new(source)),
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

    /// Create a catalog error with context
    pub fn catalog<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::CatalogError {
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

    /// Check if this error indicates a recoverable condition
    ///
    /// A bad catalog or config file can be fixed and retried without
    /// touching the photo; a bad image cannot.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AnalysisError::ConfigError { .. } | AnalysisError::CatalogError { .. }
        )
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::ImageLoadError { .. } => {
                "Could not load the photo. Please check the file format and try again.".to_string()
            }
            AnalysisError::ConfigError { .. } => {
                "The analysis settings could not be read. Default settings can be used instead.".to_string()
            }
            AnalysisError::CatalogError { .. } => {
                "Palette data is unavailable right now. Your tone result is still valid.".to_string()
            }
            AnalysisError::InvalidParameter { parameter, .. } => {
                format!("Invalid value for '{}'.", parameter)
            }
            AnalysisError::ProcessingError(_) => {
                "Tone analysis failed. Please try with a different photo.".to_string()
            }
        }
    }
}
