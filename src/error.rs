//! Error types for the demo's canvas layout.

/// Errors raised while building the tile layout the path is drawn on.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasError {
    /// The tile size is zero.
    InvalidTileSize(&'static str),
    /// The window width or height is zero.
    InvalidDimensions(&'static str),
}

impl core::fmt::Display for CanvasError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CanvasError::InvalidTileSize(msg) => write!(f, "Invalid tile size: {}", msg),
            CanvasError::InvalidDimensions(msg) => write!(f, "Invalid canvas dimensions: {}", msg),
        }
    }
}

impl core::error::Error for CanvasError {}
