//! Drawing surface abstraction
//!
//! `Surface` mirrors a 2D canvas context: it owns the current path, the
//! stroke/fill/text state and a save/restore stack. The drawing helper only
//! talks to a surface through this trait, so any backend (a recorder, a
//! rasterizer, a remote canvas) can sit underneath it.

use foyue_image::ImageData;

use crate::color::Color;
use crate::style::{Direction, FontKerning, TextAlign, TextBaseline};

/// Result of measuring a run of text
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextMetrics {
    pub width: f32,
}

/// A stateful 2D drawing target
pub trait Surface {
    // === State ===

    /// Push the current drawing state (styles and clip)
    fn save(&mut self);

    /// Pop the most recently saved drawing state
    fn restore(&mut self);

    // === Paths ===

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);

    /// Tangent arc through the control point `(x1, y1)` towards `(x2, y2)`
    fn arc_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, radius: f32);
    fn close_path(&mut self);

    fn stroke(&mut self);
    fn fill(&mut self);

    /// Intersect the clip region with the current path
    fn clip(&mut self);

    // === Styles ===

    fn set_stroke_style(&mut self, color: Color);
    fn set_fill_style(&mut self, color: Color);
    fn set_line_width(&mut self, width: f32);

    fn set_font(&mut self, font: &str);
    fn set_font_kerning(&mut self, kerning: FontKerning);
    fn set_text_baseline(&mut self, baseline: TextBaseline);
    fn set_text_align(&mut self, align: TextAlign);
    fn set_direction(&mut self, direction: Direction);

    // === Text and images ===

    fn fill_text(&mut self, text: &str, x: f32, y: f32);
    fn stroke_text(&mut self, text: &str, x: f32, y: f32);

    /// Measure `text` in the current font
    fn measure_text(&mut self, text: &str) -> TextMetrics;

    fn draw_image(&mut self, image: &ImageData, dx: f32, dy: f32, dw: f32, dh: f32);
}
