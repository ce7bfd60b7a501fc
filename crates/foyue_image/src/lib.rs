//! foyue image loading
//!
//! Resolves image sources (file paths, URLs, data URIs, raw bytes) into
//! decoded RGBA pixels that a drawing surface can blit.
//!
//! # Example
//!
//! ```ignore
//! use foyue_image::{ImageData, ImageSource};
//!
//! let data = ImageData::load(ImageSource::file("avatar.png"))?;
//!
//! // URL sources need the "network" feature
//! let data = ImageData::load_async(ImageSource::url("https://example.com/a.png"), None).await?;
//! ```

mod error;
mod loader;
mod source;

pub use error::{ImageError, Result};
pub use loader::ImageData;
pub use source::{ImageFormat, ImageSource};
