//! Drawing helper configuration (TOML)
//!
//! ```toml
//! line_gap = 12
//!
//! [border]
//! border_color = "#333"
//! border_radius = [8, 4]
//!
//! [text]
//! font = "16px sans-serif"
//!
//! [image]
//! timeout_ms = 5000
//! ```

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{PaintError, Result};
use crate::style::{RoundRectStyle, TextStyle};

/// Defaults every drawing call falls back to
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PaintConfig {
    /// Rounded-rectangle style used for fields a caller leaves out
    pub border: RoundRectStyle,
    /// Text style used for fields a caller leaves out
    pub text: TextStyle,
    /// Gap between wrapped lines when the request gives none
    pub line_gap: f32,
    /// Line height basis when the font string has no pixel size
    pub fallback_font_size: f32,
    pub image: ImageConfig,
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self {
            border: RoundRectStyle::default(),
            text: TextStyle::default(),
            line_gap: default_line_gap(),
            fallback_font_size: default_font_size(),
            image: ImageConfig::default(),
        }
    }
}

fn default_line_gap() -> f32 {
    10.0
}

fn default_font_size() -> f32 {
    18.0
}

/// Image loading settings
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    /// Abort network image loads after this many milliseconds
    pub timeout_ms: Option<u64>,
}

impl ImageConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

impl PaintConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| PaintError::ConfigIo {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), "loaded paint config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::primitives::{BorderRadius, Position};

    #[test]
    fn test_empty_config_uses_builtin_defaults() {
        let config = PaintConfig::from_toml_str("").unwrap();
        assert_eq!(config, PaintConfig::default());
        assert_eq!(config.line_gap, 10.0);
        assert_eq!(config.fallback_font_size, 18.0);
        assert_eq!(config.image.timeout(), None);
    }

    #[test]
    fn test_partial_sections_keep_remaining_defaults() {
        let config = PaintConfig::from_toml_str(
            r##"
            line_gap = 4

            [border]
            border_color = "#333"
            border_radius = [8, 4]

            [border.position]
            width = 50

            [text]
            font = "16px sans-serif"
            align = "center"

            [image]
            timeout_ms = 2500
            "##,
        )
        .unwrap();

        assert_eq!(config.line_gap, 4.0);
        assert_eq!(config.border.border_color, Color::parse("#333").unwrap());
        assert_eq!(config.border.border_radius, BorderRadius::corners([8.0, 4.0]));
        assert_eq!(config.border.border_width, 6.0);
        assert_eq!(config.border.position, Position::new(0.0, 0.0, 50.0, 100.0));
        assert_eq!(config.text.font, "16px sans-serif");
        assert_eq!(config.text.color, Color::BLACK);
        assert_eq!(config.image.timeout(), Some(Duration::from_millis(2500)));
    }

    #[test]
    fn test_invalid_color_is_rejected() {
        let result = PaintConfig::from_toml_str("[text]\ncolor = \"not-a-color\"");
        assert!(matches!(result, Err(PaintError::Config(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = PaintConfig::load("/no/such/foyue.toml");
        assert!(matches!(result, Err(PaintError::ConfigIo { .. })));
    }
}
