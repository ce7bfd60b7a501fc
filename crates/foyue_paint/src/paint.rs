//! The drawing helper
//!
//! `Paint` owns a [`Surface`] and layers a few compound operations on top of
//! it: stroked rounded rectangles, images clipped to rounded rectangles and
//! wrapped text. Synchronous operations return `&mut Self` so calls chain;
//! image operations are async and return a `Result` because loading can fail.

use foyue_image::{ImageData, ImageSource};

use crate::color::Color;
use crate::config::PaintConfig;
use crate::error::{PaintError, Result};
use crate::primitives::Position;
use crate::style::{RoundRectProps, RoundRectStyle, TextProps, TextStyle};
use crate::surface::Surface;
use crate::text::{font_size_px, wrap_lines, WrapOptions};

/// An image and the destination rectangle to draw it into
#[derive(Clone, Debug, PartialEq)]
pub struct ImageProps {
    pub source: ImageSource,
    pub dx: f32,
    pub dy: f32,
    pub dw: f32,
    pub dh: f32,
}

impl ImageProps {
    pub fn new(source: impl Into<ImageSource>, dx: f32, dy: f32, dw: f32, dh: f32) -> Self {
        Self {
            source: source.into(),
            dx,
            dy,
            dw,
            dh,
        }
    }
}

/// An image clipped to a rounded rectangle covering its destination
#[derive(Clone, Debug, PartialEq)]
pub struct RoundImageProps {
    pub image: ImageProps,
    /// Corner style; any position given here is replaced by the destination
    pub rect: Option<RoundRectProps>,
}

impl RoundImageProps {
    pub fn new(image: ImageProps) -> Self {
        Self { image, rect: None }
    }

    pub fn rect(mut self, rect: RoundRectProps) -> Self {
        self.rect = Some(rect);
        self
    }
}

/// Single line of text at a start position
#[derive(Clone, Debug, PartialEq)]
pub struct TextRequest {
    pub text: String,
    pub start_x: f32,
    pub start_y: f32,
    pub style: TextProps,
}

impl TextRequest {
    pub fn new(text: impl Into<String>, start_x: f32, start_y: f32) -> Self {
        Self {
            text: text.into(),
            start_x,
            start_y,
            style: TextProps::default(),
        }
    }

    pub fn style(mut self, style: TextProps) -> Self {
        self.style = style;
        self
    }
}

/// Text wrapped to a width, optionally cut off at a height
#[derive(Clone, Debug, PartialEq)]
pub struct MultiTextRequest {
    pub text: String,
    pub start_x: f32,
    pub start_y: f32,
    pub max_width: f32,
    pub max_height: Option<f32>,
    /// Space between lines, on top of the font size
    pub gap: Option<f32>,
    pub style: TextProps,
}

impl MultiTextRequest {
    pub fn new(text: impl Into<String>, start_x: f32, start_y: f32, max_width: f32) -> Self {
        Self {
            text: text.into(),
            start_x,
            start_y,
            max_width,
            max_height: None,
            gap: None,
            style: TextProps::default(),
        }
    }

    pub fn max_height(mut self, max_height: f32) -> Self {
        self.max_height = Some(max_height);
        self
    }

    pub fn gap(mut self, gap: f32) -> Self {
        self.gap = Some(gap);
        self
    }

    pub fn style(mut self, style: TextProps) -> Self {
        self.style = style;
        self
    }
}

/// Chainable drawing helper over an owned surface
pub struct Paint<S: Surface> {
    surface: S,
    config: PaintConfig,
}

impl<S: Surface> Paint<S> {
    pub fn new(surface: S) -> Self {
        Self::with_config(surface, PaintConfig::default())
    }

    pub fn with_config(surface: S, config: PaintConfig) -> Self {
        Self { surface, config }
    }

    /// Build from a surface that may not exist yet
    pub fn from_optional(surface: Option<S>) -> Result<Self> {
        surface.map(Self::new).ok_or(PaintError::MissingSurface)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn config(&self) -> &PaintConfig {
        &self.config
    }

    /// Stroke a rounded rectangle
    ///
    /// Fields missing from `props` come from the configured border style.
    /// The stroked path stays current, so a following [`Paint::fill`]
    /// fills the same shape.
    pub fn round_rect(&mut self, props: &RoundRectProps) -> &mut Self {
        let style = props.fill_defaults(&self.config.border);
        tracing::debug!(
            position = ?style.position,
            padding = style.padding,
            "stroking rounded rect"
        );

        self.surface.set_stroke_style(style.border_color);
        self.surface.set_line_width(style.border_width);
        self.trace_round_rect(&style);
        self.surface.stroke();
        self
    }

    /// Fill the current path
    pub fn fill(&mut self, color: Color) -> &mut Self {
        self.surface.set_fill_style(color);
        self.surface.fill();
        self
    }

    /// Load an image and draw it into its destination rectangle
    pub async fn draw_image(&mut self, props: &ImageProps) -> Result<&mut Self> {
        let image = self.load_image(&props.source).await?;
        self.surface
            .draw_image(&image, props.dx, props.dy, props.dw, props.dh);
        Ok(self)
    }

    /// Load an image and draw it clipped to a rounded rectangle
    ///
    /// The clip is set up between a save and a restore, and the restore
    /// runs whether or not the load succeeds, so the clip never outlasts
    /// this call.
    pub async fn draw_round_image(&mut self, props: &RoundImageProps) -> Result<&mut Self> {
        let ImageProps {
            dx, dy, dw, dh, ..
        } = props.image;
        let style = props
            .rect
            .clone()
            .unwrap_or_default()
            .position(Position::new(dx, dy, dw, dh))
            .fill_defaults(&self.config.border);

        self.surface.save();
        self.trace_round_rect(&style);
        self.surface.clip();

        let loaded = self.load_image(&props.image.source).await;
        if let Ok(image) = &loaded {
            self.surface.draw_image(image, dx, dy, dw, dh);
        }
        self.surface.restore();

        loaded?;
        Ok(self)
    }

    /// Draw one line of text
    pub fn draw_text(&mut self, request: &TextRequest) -> &mut Self {
        let style = request.style.fill_defaults(&self.config.text);
        self.apply_text_style(&style);
        self.paint_text(&request.text, request.start_x, request.start_y, &style);
        self
    }

    /// Draw text wrapped to `max_width`
    ///
    /// Lines are `font size + gap` apart, the font size coming from the
    /// `<n>px` part of the font. When `max_height` is set and the next line
    /// would start past it, the current line ends in `...` and drawing stops.
    pub fn draw_multi_text(&mut self, request: &MultiTextRequest) -> &mut Self {
        let style = request.style.fill_defaults(&self.config.text);
        self.apply_text_style(&style);

        let font_size = font_size_px(&style.font).unwrap_or(self.config.fallback_font_size);
        let gap = request.gap.unwrap_or(self.config.line_gap);
        let options = WrapOptions {
            start_y: request.start_y,
            max_width: request.max_width,
            max_height: request.max_height,
            line_advance: font_size + gap,
        };

        let surface = &mut self.surface;
        let lines = wrap_lines(&request.text, &options, |text| {
            surface.measure_text(text).width
        });
        tracing::debug!(
            lines = lines.len(),
            max_width = request.max_width,
            "drawing wrapped text"
        );

        for line in &lines {
            tracing::trace!(text = %line.text, y = line.y, "line");
            self.paint_text(&line.text, request.start_x, line.y, &style);
        }
        self
    }

    async fn load_image(&self, source: &ImageSource) -> Result<ImageData> {
        ImageData::load_async(source.clone(), self.config.image.timeout())
            .await
            .map_err(|err| {
                tracing::warn!(source = %source, error = %err, "image load failed");
                PaintError::from(err)
            })
    }

    /// Start a new path tracing the rounded rectangle, without painting it
    fn trace_round_rect(&mut self, style: &RoundRectStyle) {
        let radius = style.border_radius.normalize();
        let Position {
            start_x,
            start_y,
            width,
            height,
        } = style.position;
        let inset = style.padding;

        let sx = start_x + inset;
        let sy = start_y + inset;
        let ex = start_x + width - inset;
        let ey = start_y + height - inset;

        let s = &mut self.surface;
        s.begin_path();

        // top
        s.move_to(sx + radius.top_left, sy);
        s.line_to(ex - radius.top_right, sy);
        s.arc_to(ex, sy, ex, sy + radius.top_right, radius.top_right);

        // right
        s.line_to(ex, ey - radius.bottom_right);
        s.arc_to(ex, ey, ex - radius.bottom_right, ey, radius.bottom_right);

        // bottom
        s.line_to(sx + radius.bottom_left, ey);
        s.arc_to(sx, ey, sx, ey - radius.bottom_left, radius.bottom_left);

        // left
        s.line_to(sx, sy + radius.top_left);
        s.arc_to(sx, sy, sx + radius.top_left, sy, radius.top_left);
    }

    fn apply_text_style(&mut self, style: &TextStyle) {
        self.surface.set_font(&style.font);
        self.surface.set_font_kerning(style.kerning);
        self.surface.set_text_baseline(style.baseline);
        self.surface.set_text_align(style.align);
        self.surface.set_direction(style.direction);
    }

    fn paint_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle) {
        if style.stroke {
            self.surface.set_stroke_style(style.color);
            self.surface.stroke_text(text, x, y);
        } else {
            self.surface.set_fill_style(style.color);
            self.surface.fill_text(text, x, y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::MonospaceMeasurer;
    use crate::path::{PathBuilder, PathCommand, Point};
    use crate::recording::{RecordingSurface, SurfaceCommand};
    use crate::style::TextAlign;

    fn paint() -> Paint<RecordingSurface> {
        Paint::new(RecordingSurface::with_measurer(MonospaceMeasurer::fixed(10.0)))
    }

    #[test]
    fn test_missing_surface_is_rejected() {
        let result = Paint::<RecordingSurface>::from_optional(None);
        assert!(matches!(result, Err(PaintError::MissingSurface)));
        assert!(Paint::from_optional(Some(RecordingSurface::new())).is_ok());
    }

    #[test]
    fn test_default_round_rect_path() {
        let mut paint = paint();
        paint.round_rect(&RoundRectProps::new());

        let expected = PathBuilder::new()
            .move_to(0.0, 0.0)
            .line_to(100.0, 0.0)
            .arc_to(100.0, 0.0, 100.0, 0.0, 0.0)
            .line_to(100.0, 100.0)
            .arc_to(100.0, 100.0, 100.0, 100.0, 0.0)
            .line_to(0.0, 100.0)
            .arc_to(0.0, 100.0, 0.0, 100.0, 0.0)
            .line_to(0.0, 0.0)
            .arc_to(0.0, 0.0, 0.0, 0.0, 0.0)
            .build();

        assert_eq!(
            paint.surface().commands(),
            &[SurfaceCommand::Stroke {
                path: expected,
                color: Color::BLACK,
                width: 6.0,
            }]
        );
    }

    #[test]
    fn test_round_rect_corner_order() {
        let mut paint = paint();
        paint.round_rect(&RoundRectProps::new().border_radius([1.0, 2.0, 3.0, 4.0]));

        let commands = paint.surface().current_path().commands().to_vec();
        assert_eq!(commands[0], PathCommand::MoveTo(Point::new(1.0, 0.0)));
        assert_eq!(commands[1], PathCommand::LineTo(Point::new(98.0, 0.0)));
        assert_eq!(
            commands[2],
            PathCommand::ArcTo {
                control: Point::new(100.0, 0.0),
                end: Point::new(100.0, 2.0),
                radius: 2.0,
            }
        );
        assert_eq!(commands[3], PathCommand::LineTo(Point::new(100.0, 97.0)));
        assert_eq!(commands[5], PathCommand::LineTo(Point::new(4.0, 100.0)));
        assert_eq!(commands[7], PathCommand::LineTo(Point::new(0.0, 1.0)));
        assert_eq!(
            commands[8],
            PathCommand::ArcTo {
                control: Point::new(0.0, 0.0),
                end: Point::new(1.0, 0.0),
                radius: 1.0,
            }
        );
    }

    #[test]
    fn test_fill_reuses_current_path() {
        let mut paint = paint();
        paint
            .round_rect(&RoundRectProps::new().border_radius(8.0))
            .fill(Color::RED);

        let commands = paint.surface().commands();
        assert_eq!(commands.len(), 2);
        match (&commands[0], &commands[1]) {
            (
                SurfaceCommand::Stroke { path: stroked, .. },
                SurfaceCommand::Fill {
                    path: filled,
                    color,
                },
            ) => {
                assert_eq!(stroked, filled);
                assert_eq!(*color, Color::RED);
            }
            other => panic!("unexpected commands {other:?}"),
        }
    }

    #[test]
    fn test_draw_text_stroke_and_fill() {
        let mut paint = paint();
        paint
            .draw_text(&TextRequest::new("filled", 1.0, 2.0))
            .draw_text(
                &TextRequest::new("stroked", 3.0, 4.0)
                    .style(TextProps::new().stroke(true).color(Color::BLUE)),
            );

        let commands = paint.surface().commands();
        assert!(matches!(&commands[0], SurfaceCommand::FillText { text, .. } if text == "filled"));
        match &commands[1] {
            SurfaceCommand::StrokeText { run, position, .. } => {
                assert_eq!(run.color, Color::BLUE);
                assert_eq!(*position, Point::new(3.0, 4.0));
                assert_eq!(run.font, "18px");
                assert_eq!(run.align, TextAlign::Left);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_multi_text_uses_config_gap_and_fallback_size() {
        let config = PaintConfig {
            line_gap: 2.0,
            fallback_font_size: 8.0,
            ..PaintConfig::default()
        };
        let surface = RecordingSurface::with_measurer(MonospaceMeasurer::fixed(10.0));
        let mut paint = Paint::with_config(surface, config);
        paint.draw_multi_text(
            &MultiTextRequest::new("abcdef", 0.0, 5.0, 35.0)
                .style(TextProps::new().font("serif")),
        );

        let ys: Vec<f32> = paint
            .surface()
            .commands()
            .iter()
            .filter_map(|c| match c {
                SurfaceCommand::FillText { position, .. } => Some(position.y),
                _ => None,
            })
            .collect();
        assert_eq!(ys, vec![5.0, 15.0]);
    }
}
