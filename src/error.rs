use thiserror::Error;

/// Errors that can occur while loading or validating a [`crate::SketchConfig`]
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Errors that can occur while producing or delivering an exported image
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Canvas has no pixels to export ({width}x{height})")]
    EmptyCanvas { width: u32, height: u32 },

    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Failed to write image: {0}")]
    Io(#[from] std::io::Error),

    #[error("Browser download failed: {0}")]
    Download(String),
}

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;
