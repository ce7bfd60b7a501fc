//! Drawing helper errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaintError {
    #[error("drawing surface cannot be missing")]
    MissingSurface,

    #[error("invalid color: {0:?}")]
    InvalidColor(String),

    #[error("image load failed: {0}")]
    Image(#[from] foyue_image::ImageError),

    #[error("failed to load font: {0}")]
    Font(String),

    #[error("failed to read config {path}: {source}")]
    ConfigIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, PaintError>;
