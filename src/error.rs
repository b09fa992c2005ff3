//! Error types for the Soundbank application
//!
//! View operations never fail; these errors cover the ambient layers
//! (configuration, fonts, screenshots and scenario scripts).

use thiserror::Error;

/// Soundbank application errors
#[derive(Error, Debug, Clone)]
pub enum SoundbankError {
    /// Configuration file could not be parsed or is invalid
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// File system I/O error
    #[error("IO error: {0}")]
    IOError(String),

    /// CJK font could not be located or loaded
    #[error("Font error: {0}")]
    FontError(String),

    /// Screenshot could not be encoded or written
    #[error("Screenshot error: {0}")]
    ScreenshotError(String),

    /// Scenario script could not be loaded or is invalid
    #[error("Test script error: {0}")]
    TestScriptError(String),
}

impl From<std::io::Error> for SoundbankError {
    fn from(e: std::io::Error) -> Self {
        SoundbankError::IOError(e.to_string())
    }
}

impl From<image::ImageError> for SoundbankError {
    fn from(e: image::ImageError) -> Self {
        SoundbankError::ScreenshotError(e.to_string())
    }
}

impl SoundbankError {
    /// Check if this error is recoverable
    ///
    /// Recoverable errors let the window keep running with a fallback.
    pub fn is_recoverable(&self) -> bool {
        match self {
            // A bad config file blocks startup
            SoundbankError::ConfigError(_) => false,
            SoundbankError::IOError(_) => false,
            // Falls back to egui's bundled fonts
            SoundbankError::FontError(_) => true,
            // The frame is simply not saved
            SoundbankError::ScreenshotError(_) => true,
            SoundbankError::TestScriptError(_) => false,
        }
    }

    /// Get a user-friendly description of the error
    pub fn user_message(&self) -> String {
        match self {
            SoundbankError::ConfigError(_) => {
                "Configuration error. Please check config.toml.".to_string()
            }
            SoundbankError::IOError(_) => "File system error occurred.".to_string(),
            SoundbankError::FontError(_) => {
                "Japanese font not found. Kana may not display correctly.".to_string()
            }
            SoundbankError::ScreenshotError(_) => "Failed to save screenshot.".to_string(),
            SoundbankError::TestScriptError(_) => {
                "Test script is invalid. Please check the scenario file.".to_string()
            }
        }
    }
}

/// Result type alias for Soundbank operations
pub type Result<T> = std::result::Result<T, SoundbankError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_error_is_recoverable() {
        let err = SoundbankError::FontError("missing".to_string());
        assert!(err.is_recoverable());
        assert!(err.user_message().contains("font"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: SoundbankError = io.into();
        assert!(matches!(err, SoundbankError::IOError(_)));
        assert!(!err.is_recoverable());
        assert_eq!(err.to_string(), "IO error: gone");
    }
}
