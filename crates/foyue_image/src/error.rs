//! Image loading errors

use thiserror::Error;

/// Errors produced while resolving or decoding an image source
#[derive(Error, Debug)]
pub enum ImageError {
    #[error("failed to read image file: {0}")]
    FileLoad(String),

    #[error("failed to fetch image: {0}")]
    Network(String),

    #[error("image load timed out after {0} ms")]
    Timeout(u64),

    #[error("invalid base64 image data: {0}")]
    Base64(String),

    #[error("failed to decode image: {0}")]
    Decode(String),
}

impl From<image::ImageError> for ImageError {
    fn from(err: image::ImageError) -> Self {
        ImageError::Decode(err.to_string())
    }
}

impl From<base64::DecodeError> for ImageError {
    fn from(err: base64::DecodeError) -> Self {
        ImageError::Base64(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ImageError>;
