// crates/huekit-core/src/error.rs

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ColorError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("invalid hex color: {0:?} (expected 6 hex digits)")]
    InvalidColor(String),

    #[error("palette is empty")]
    EmptyPalette,

    #[error("unsupported export format: {0:?} (expected css, scss, png or svg)")]
    UnsupportedFormat(String),

    #[error("color extraction failed: {0}")]
    Extraction(String),

    #[error("meaning table config error: {0}")]
    Config(String),

    #[error("encode error: {0}")]
    Encode(String),
}
