//! Error types for the editor

use thiserror::Error;

/// Result type alias for editor operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the editor's boundaries.
/// The grid model itself never fails; bad input is rejected before it gets there.
#[derive(Error, Debug)]
pub enum Error {
    /// Grid size outside the supported set
    #[error("Unsupported grid size: {0}")]
    InvalidGridSize(usize),

    /// Brush size outside 1..=3
    #[error("Unsupported brush size: {0}")]
    InvalidBrushSize(u8),

    /// Not a `#rgb` / `#rrggbb` color
    #[error("Invalid color: {0:?}")]
    InvalidColor(String),

    /// Unreadable or malformed configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Raster export failed
    #[error("Export failed: {0}")]
    Export(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::Export(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}
