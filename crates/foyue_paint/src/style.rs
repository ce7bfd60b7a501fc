//! Drawing styles and their defaults
//!
//! Each style comes in two shapes: a resolved struct with every field set,
//! and a `*Props` struct where every field is optional. `fill_defaults`
//! merges props over a resolved default field by field, recursing into
//! nested structs, so callers only spell out what they want to change.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::primitives::{BorderRadius, Position};

// ============================================================================
// Rounded rectangles
// ============================================================================

/// Fully resolved rounded-rectangle style
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RoundRectStyle {
    /// Inset applied to every side of `position`
    pub padding: f32,
    pub border_radius: BorderRadius,
    pub border_color: Color,
    pub border_width: f32,
    pub position: Position,
}

impl Default for RoundRectStyle {
    fn default() -> Self {
        Self {
            padding: 0.0,
            border_radius: BorderRadius::Uniform(0.0),
            border_color: Color::BLACK,
            border_width: 6.0,
            position: Position::default(),
        }
    }
}

/// Partial position, merged over a default [`Position`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PositionProps {
    pub start_x: Option<f32>,
    pub start_y: Option<f32>,
    pub width: Option<f32>,
    pub height: Option<f32>,
}

impl PositionProps {
    pub fn fill_defaults(&self, defaults: &Position) -> Position {
        Position {
            start_x: self.start_x.unwrap_or(defaults.start_x),
            start_y: self.start_y.unwrap_or(defaults.start_y),
            width: self.width.unwrap_or(defaults.width),
            height: self.height.unwrap_or(defaults.height),
        }
    }
}

impl From<Position> for PositionProps {
    fn from(position: Position) -> Self {
        Self {
            start_x: Some(position.start_x),
            start_y: Some(position.start_y),
            width: Some(position.width),
            height: Some(position.height),
        }
    }
}

/// Partial rounded-rectangle style
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RoundRectProps {
    pub padding: Option<f32>,
    pub border_radius: Option<BorderRadius>,
    pub border_color: Option<Color>,
    pub border_width: Option<f32>,
    pub position: Option<PositionProps>,
}

impl RoundRectProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn border_radius(mut self, radius: impl Into<BorderRadius>) -> Self {
        self.border_radius = Some(radius.into());
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }

    pub fn border_width(mut self, width: f32) -> Self {
        self.border_width = Some(width);
        self
    }

    pub fn position(mut self, position: impl Into<PositionProps>) -> Self {
        self.position = Some(position.into());
        self
    }

    pub fn fill_defaults(&self, defaults: &RoundRectStyle) -> RoundRectStyle {
        RoundRectStyle {
            padding: self.padding.unwrap_or(defaults.padding),
            border_radius: self
                .border_radius
                .clone()
                .unwrap_or_else(|| defaults.border_radius.clone()),
            border_color: self.border_color.unwrap_or(defaults.border_color),
            border_width: self.border_width.unwrap_or(defaults.border_width),
            position: match &self.position {
                Some(position) => position.fill_defaults(&defaults.position),
                None => defaults.position,
            },
        }
    }
}

// ============================================================================
// Text
// ============================================================================

/// Kerning mode (canvas `fontKerning`)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontKerning {
    Auto,
    #[default]
    Normal,
    None,
}

/// Vertical anchor of drawn text (canvas `textBaseline`)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextBaseline {
    Top,
    Hanging,
    #[default]
    Middle,
    Alphabetic,
    Ideographic,
    Bottom,
}

/// Horizontal alignment relative to the start position (canvas `textAlign`)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Right,
    Center,
    Start,
    End,
}

/// Text direction (canvas `direction`)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ltr,
    Rtl,
    #[default]
    Inherit,
}

/// Fully resolved text style
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    /// CSS font shorthand, e.g. `"bold 24px serif"`
    pub font: String,
    pub kerning: FontKerning,
    pub baseline: TextBaseline,
    pub align: TextAlign,
    pub direction: Direction,
    pub color: Color,
    /// Stroke the glyph outlines instead of filling them
    pub stroke: bool,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font: "18px".to_string(),
            kerning: FontKerning::Normal,
            baseline: TextBaseline::Middle,
            align: TextAlign::Left,
            direction: Direction::Inherit,
            color: Color::BLACK,
            stroke: false,
        }
    }
}

/// Partial text style
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TextProps {
    pub font: Option<String>,
    pub kerning: Option<FontKerning>,
    pub baseline: Option<TextBaseline>,
    pub align: Option<TextAlign>,
    pub direction: Option<Direction>,
    pub color: Option<Color>,
    pub stroke: Option<bool>,
}

impl TextProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }

    pub fn kerning(mut self, kerning: FontKerning) -> Self {
        self.kerning = Some(kerning);
        self
    }

    pub fn baseline(mut self, baseline: TextBaseline) -> Self {
        self.baseline = Some(baseline);
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = Some(align);
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn stroke(mut self, stroke: bool) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// An empty font string counts as unset
    pub fn fill_defaults(&self, defaults: &TextStyle) -> TextStyle {
        TextStyle {
            font: self
                .font
                .as_deref()
                .filter(|font| !font.is_empty())
                .unwrap_or(defaults.font.as_str())
                .to_string(),
            kerning: self.kerning.unwrap_or(defaults.kerning),
            baseline: self.baseline.unwrap_or(defaults.baseline),
            align: self.align.unwrap_or(defaults.align),
            direction: self.direction.unwrap_or(defaults.direction),
            color: self.color.unwrap_or(defaults.color),
            stroke: self.stroke.unwrap_or(defaults.stroke),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_props_resolve_to_defaults() {
        let defaults = RoundRectStyle::default();
        assert_eq!(RoundRectProps::new().fill_defaults(&defaults), defaults);
        assert_eq!(defaults.border_width, 6.0);
        assert_eq!(defaults.position, Position::new(0.0, 0.0, 100.0, 100.0));
    }

    #[test]
    fn test_nested_position_merges_field_by_field() {
        let props = RoundRectProps {
            position: Some(PositionProps {
                width: Some(40.0),
                ..Default::default()
            }),
            ..Default::default()
        };
        let style = props.fill_defaults(&RoundRectStyle::default());
        assert_eq!(style.position, Position::new(0.0, 0.0, 40.0, 100.0));
    }

    #[test]
    fn test_props_override_only_given_fields() {
        let style = RoundRectProps::new()
            .padding(4.0)
            .border_color(Color::RED)
            .fill_defaults(&RoundRectStyle::default());
        assert_eq!(style.padding, 4.0);
        assert_eq!(style.border_color, Color::RED);
        assert_eq!(style.border_width, 6.0);
        assert_eq!(style.border_radius, BorderRadius::Uniform(0.0));
    }

    #[test]
    fn test_text_defaults() {
        let style = TextProps::new().fill_defaults(&TextStyle::default());
        assert_eq!(style.font, "18px");
        assert_eq!(style.kerning, FontKerning::Normal);
        assert_eq!(style.baseline, TextBaseline::Middle);
        assert_eq!(style.align, TextAlign::Left);
        assert_eq!(style.direction, Direction::Inherit);
        assert_eq!(style.color, Color::BLACK);
        assert!(!style.stroke);
    }

    #[test]
    fn test_empty_font_falls_back() {
        let style = TextProps::new().font("").fill_defaults(&TextStyle::default());
        assert_eq!(style.font, "18px");
    }

    #[test]
    fn test_props_deserialize_from_json() {
        let props: RoundRectProps = serde_json::from_str(
            r##"{"border_radius": [4, 8], "border_color": "#f00", "position": {"start_x": 10}}"##,
        )
        .unwrap();
        let style = props.fill_defaults(&RoundRectStyle::default());
        assert_eq!(style.border_radius.normalize().to_array(), [4.0, 8.0, 4.0, 8.0]);
        assert_eq!(style.border_color, Color::RED);
        assert_eq!(style.position.start_x, 10.0);
        assert_eq!(style.position.width, 100.0);
    }

    #[test]
    fn test_non_numeric_radius_deserializes_as_invalid() {
        let props: RoundRectProps =
            serde_json::from_str(r#"{"border_radius": "large"}"#).unwrap();
        assert_eq!(props.border_radius, Some(BorderRadius::Invalid));
        assert_eq!(
            props.border_radius.unwrap().normalize().to_array(),
            [0.0; 4]
        );
    }
}
