//! Text measurement

use std::path::Path;

use crate::error::{PaintError, Result};
use crate::text::font_size_px;

/// Measures the rendered width of text in a given CSS font
pub trait TextMeasurer {
    fn measure(&self, text: &str, font: &str) -> f32;
}

impl<F> TextMeasurer for F
where
    F: Fn(&str, &str) -> f32,
{
    fn measure(&self, text: &str, font: &str) -> f32 {
        self(text, font)
    }
}

/// How a [`MonospaceMeasurer`] sizes each character
#[derive(Clone, Copy, Debug, PartialEq)]
enum Advance {
    /// Same width regardless of font
    Fixed(f32),
    /// Fraction of the font's pixel size
    Relative { ratio: f32, fallback_size: f32 },
}

/// Gives every character the same advance
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonospaceMeasurer {
    advance: Advance,
}

impl MonospaceMeasurer {
    /// Every character is `advance` units wide
    pub fn fixed(advance: f32) -> Self {
        Self {
            advance: Advance::Fixed(advance),
        }
    }

    /// Every character is `ratio` times the font's pixel size wide
    pub fn relative(ratio: f32, fallback_size: f32) -> Self {
        Self {
            advance: Advance::Relative {
                ratio,
                fallback_size,
            },
        }
    }
}

impl Default for MonospaceMeasurer {
    fn default() -> Self {
        Self::relative(0.5, 18.0)
    }
}

impl TextMeasurer for MonospaceMeasurer {
    fn measure(&self, text: &str, font: &str) -> f32 {
        let advance = match self.advance {
            Advance::Fixed(advance) => advance,
            Advance::Relative {
                ratio,
                fallback_size,
            } => font_size_px(font).unwrap_or(fallback_size) * ratio,
        };
        text.chars().count() as f32 * advance
    }
}

/// Sums horizontal glyph advances from a TrueType/OpenType face
pub struct FontMeasurer {
    data: Vec<u8>,
    index: u32,
    fallback_size: f32,
}

impl FontMeasurer {
    /// Parse font bytes, keeping them for later measurement
    pub fn from_bytes(data: Vec<u8>, index: u32) -> Result<Self> {
        ttf_parser::Face::parse(&data, index).map_err(|e| PaintError::Font(e.to_string()))?;
        Ok(Self {
            data,
            index,
            fallback_size: 18.0,
        })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path)
            .map_err(|e| PaintError::Font(format!("{}: {}", path.display(), e)))?;
        Self::from_bytes(data, 0)
    }

    /// Size used when the font string carries no `<n>px`
    pub fn with_fallback_size(mut self, size: f32) -> Self {
        self.fallback_size = size;
        self
    }
}

impl TextMeasurer for FontMeasurer {
    fn measure(&self, text: &str, font: &str) -> f32 {
        // Validated in from_bytes
        let Ok(face) = ttf_parser::Face::parse(&self.data, self.index) else {
            return 0.0;
        };
        let size = font_size_px(font).unwrap_or(self.fallback_size);
        let scale = size / face.units_per_em() as f32;

        let units: u32 = text
            .chars()
            .filter_map(|c| face.glyph_index(c))
            .filter_map(|glyph| face.glyph_hor_advance(glyph))
            .map(u32::from)
            .sum();
        units as f32 * scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_advance_ignores_font() {
        let m = MonospaceMeasurer::fixed(10.0);
        assert_eq!(m.measure("abcd", "48px serif"), 40.0);
        assert_eq!(m.measure("", "48px serif"), 0.0);
    }

    #[test]
    fn test_relative_advance_follows_font_size() {
        let m = MonospaceMeasurer::relative(0.5, 18.0);
        assert_eq!(m.measure("ab", "20px"), 20.0);
        assert_eq!(m.measure("ab", "serif"), 18.0);
    }

    #[test]
    fn test_closure_measurer() {
        let m = |text: &str, _font: &str| text.len() as f32;
        assert_eq!(m.measure("abc", "12px"), 3.0);
    }

    #[test]
    fn test_font_measurer_rejects_garbage() {
        let result = FontMeasurer::from_bytes(vec![0, 1, 2, 3], 0);
        assert!(matches!(result, Err(PaintError::Font(_))));
    }

    #[test]
    fn test_font_measurer_missing_file() {
        let result = FontMeasurer::from_file("/no/such/font.ttf");
        assert!(matches!(result, Err(PaintError::Font(_))));
    }
}
