//! Image loading and decoding

use std::time::Duration;

use crate::error::{ImageError, Result};
use crate::source::{ImageFormat, ImageSource};
use base64::Engine;
use image::{DynamicImage, GenericImageView};

/// Decoded RGBA image ready to be drawn onto a surface
#[derive(Debug, Clone, PartialEq)]
pub struct ImageData {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
}

impl ImageData {
    /// Create ImageData from raw RGBA pixels
    pub fn from_rgba(pixels: Vec<u8>, width: u32, height: u32) -> Result<Self> {
        let expected_len = (width as usize) * (height as usize) * 4;
        if pixels.len() != expected_len {
            return Err(ImageError::Decode(format!(
                "invalid pixel data length: expected {}, got {}",
                expected_len,
                pixels.len()
            )));
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Load an image from a local source
    ///
    /// URL sources always fail here; use [`ImageData::load_async`].
    pub fn load(source: ImageSource) -> Result<Self> {
        match source {
            ImageSource::File(path) => {
                let data = std::fs::read(&path)
                    .map_err(|e| ImageError::FileLoad(format!("{}: {}", path.display(), e)))?;
                let format = path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .and_then(ImageFormat::from_extension);
                Self::decode(&data, format)
            }

            ImageSource::Base64(data) => Self::from_base64(&data),

            ImageSource::Bytes { data, format } => Self::decode(&data, format),

            ImageSource::Rgba {
                data,
                width,
                height,
            } => Self::from_rgba(data, width, height),

            ImageSource::Url(url) => Err(ImageError::Network(format!(
                "{url}: URL sources must be loaded with load_async"
            ))),
        }
    }

    /// Load an image from any source
    ///
    /// `timeout` bounds the network request for URL sources; local sources
    /// are decoded inline.
    pub async fn load_async(source: ImageSource, timeout: Option<Duration>) -> Result<Self> {
        match source {
            ImageSource::Url(url) => Self::fetch(&url, timeout).await,
            other => Self::load(other),
        }
    }

    #[cfg(feature = "network")]
    async fn fetch(url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ImageError::Network(e.to_string()))?;

        let map_err = |e: reqwest::Error| match timeout {
            Some(limit) if e.is_timeout() => ImageError::Timeout(limit.as_millis() as u64),
            _ => ImageError::Network(e.to_string()),
        };

        tracing::debug!(url, "fetching image");
        let response = client.get(url).send().await.map_err(map_err)?;

        if !response.status().is_success() {
            return Err(ImageError::Network(format!(
                "HTTP error: {}",
                response.status()
            )));
        }

        let format = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .and_then(ImageFormat::from_mime);

        let bytes = response.bytes().await.map_err(map_err)?;
        Self::decode(&bytes, format)
    }

    #[cfg(not(feature = "network"))]
    async fn fetch(url: &str, _timeout: Option<Duration>) -> Result<Self> {
        Err(ImageError::Network(format!(
            "{url}: URL loading requires the 'network' feature"
        )))
    }

    /// Decode image from raw bytes, sniffing the format
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::decode(data, None)
    }

    /// Decode image from a base64 string or data URI
    pub fn from_base64(data: &str) -> Result<Self> {
        let (payload, format) = if data.starts_with("data:") {
            let pos = data
                .find(";base64,")
                .ok_or_else(|| ImageError::Base64("invalid data URI format".to_string()))?;
            (&data[pos + 8..], ImageFormat::from_mime(&data[5..pos]))
        } else {
            (data, None)
        };

        let bytes = base64::engine::general_purpose::STANDARD.decode(payload)?;
        Self::decode(&bytes, format)
    }

    fn decode(data: &[u8], format: Option<ImageFormat>) -> Result<Self> {
        let img = match format {
            Some(format) => image::load_from_memory_with_format(data, format.to_image_format())
                .or_else(|_| image::load_from_memory(data))?,
            None => image::load_from_memory(data)?,
        };
        Ok(Self::from_dynamic_image(img))
    }

    fn from_dynamic_image(img: DynamicImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            pixels: img.to_rgba8().into_raw(),
            width,
            height,
        }
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
