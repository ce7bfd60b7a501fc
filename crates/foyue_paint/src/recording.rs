//! Recording surface - keeps canvas state and records what gets drawn

use foyue_image::ImageData;
use serde::Serialize;

use crate::color::Color;
use crate::measure::{MonospaceMeasurer, TextMeasurer};
use crate::path::{Path, PathCommand, Point};
use crate::primitives::Rect;
use crate::style::{Direction, FontKerning, TextAlign, TextBaseline};
use crate::surface::{Surface, TextMetrics};

/// Text state captured with every text command
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TextRun {
    pub font: String,
    pub kerning: FontKerning,
    pub baseline: TextBaseline,
    pub align: TextAlign,
    pub direction: Direction,
    pub color: Color,
}

/// A drawing command produced by the recording surface
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SurfaceCommand {
    Save,
    Restore,
    Stroke {
        path: Path,
        color: Color,
        width: f32,
    },
    Fill {
        path: Path,
        color: Color,
    },
    Clip {
        path: Path,
    },
    FillText {
        text: String,
        position: Point,
        run: TextRun,
    },
    StrokeText {
        text: String,
        position: Point,
        run: TextRun,
    },
    DrawImage {
        rect: Rect,
        image_width: u32,
        image_height: u32,
    },
}

/// State covered by save/restore
#[derive(Clone, Debug)]
struct DrawState {
    fill: Color,
    stroke: Color,
    line_width: f32,
    font: String,
    kerning: FontKerning,
    baseline: TextBaseline,
    align: TextAlign,
    direction: Direction,
    /// Clip paths, intersected
    clip: Vec<Path>,
}

impl Default for DrawState {
    // Canvas initial state
    fn default() -> Self {
        Self {
            fill: Color::BLACK,
            stroke: Color::BLACK,
            line_width: 1.0,
            font: "10px sans-serif".to_string(),
            kerning: FontKerning::Auto,
            baseline: TextBaseline::Alphabetic,
            align: TextAlign::Start,
            direction: Direction::Inherit,
            clip: Vec::new(),
        }
    }
}

impl DrawState {
    fn text_run(&self, color: Color) -> TextRun {
        TextRun {
            font: self.font.clone(),
            kerning: self.kerning,
            baseline: self.baseline,
            align: self.align,
            direction: self.direction,
            color,
        }
    }
}

/// A [`Surface`] that records commands instead of rasterizing
///
/// Useful for tests, for serializing a drawing, and as the reference for
/// what a real backend is asked to do.
pub struct RecordingSurface {
    commands: Vec<SurfaceCommand>,
    current_path: Path,
    state: DrawState,
    saved: Vec<DrawState>,
    measurer: Box<dyn TextMeasurer>,
}

impl RecordingSurface {
    /// Create a surface measuring text at half the font size per character
    pub fn new() -> Self {
        Self::with_measurer(MonospaceMeasurer::default())
    }

    pub fn with_measurer(measurer: impl TextMeasurer + 'static) -> Self {
        Self {
            commands: Vec::new(),
            current_path: Path::new(),
            state: DrawState::default(),
            saved: Vec::new(),
            measurer: Box::new(measurer),
        }
    }

    /// Get all recorded commands
    pub fn commands(&self) -> &[SurfaceCommand] {
        &self.commands
    }

    /// Take ownership of recorded commands
    pub fn take_commands(&mut self) -> Vec<SurfaceCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn current_path(&self) -> &Path {
        &self.current_path
    }

    /// Active clip paths, empty when nothing is clipped
    pub fn clip_region(&self) -> &[Path] {
        &self.state.clip
    }

    /// Number of unmatched `save` calls
    pub fn save_depth(&self) -> usize {
        self.saved.len()
    }

    pub fn fill_style(&self) -> Color {
        self.state.fill
    }

    pub fn stroke_style(&self) -> Color {
        self.state.stroke
    }

    pub fn line_width(&self) -> f32 {
        self.state.line_width
    }

    pub fn font(&self) -> &str {
        &self.state.font
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for RecordingSurface {
    fn save(&mut self) {
        self.saved.push(self.state.clone());
        self.commands.push(SurfaceCommand::Save);
    }

    fn restore(&mut self) {
        match self.saved.pop() {
            Some(state) => {
                self.state = state;
                self.commands.push(SurfaceCommand::Restore);
            }
            None => tracing::warn!("restore without matching save ignored"),
        }
    }

    fn begin_path(&mut self) {
        self.current_path = Path::new();
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.current_path
            .push(PathCommand::MoveTo(Point::new(x, y)));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.current_path
            .push(PathCommand::LineTo(Point::new(x, y)));
    }

    fn arc_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, radius: f32) {
        self.current_path.push(PathCommand::ArcTo {
            control: Point::new(x1, y1),
            end: Point::new(x2, y2),
            radius,
        });
    }

    fn close_path(&mut self) {
        self.current_path.push(PathCommand::Close);
    }

    fn stroke(&mut self) {
        self.commands.push(SurfaceCommand::Stroke {
            path: self.current_path.clone(),
            color: self.state.stroke,
            width: self.state.line_width,
        });
    }

    fn fill(&mut self) {
        self.commands.push(SurfaceCommand::Fill {
            path: self.current_path.clone(),
            color: self.state.fill,
        });
    }

    fn clip(&mut self) {
        self.state.clip.push(self.current_path.clone());
        self.commands.push(SurfaceCommand::Clip {
            path: self.current_path.clone(),
        });
    }

    fn set_stroke_style(&mut self, color: Color) {
        self.state.stroke = color;
    }

    fn set_fill_style(&mut self, color: Color) {
        self.state.fill = color;
    }

    fn set_line_width(&mut self, width: f32) {
        self.state.line_width = width;
    }

    fn set_font(&mut self, font: &str) {
        self.state.font = font.to_string();
    }

    fn set_font_kerning(&mut self, kerning: FontKerning) {
        self.state.kerning = kerning;
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.state.baseline = baseline;
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.state.align = align;
    }

    fn set_direction(&mut self, direction: Direction) {
        self.state.direction = direction;
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        self.commands.push(SurfaceCommand::FillText {
            text: text.to_string(),
            position: Point::new(x, y),
            run: self.state.text_run(self.state.fill),
        });
    }

    fn stroke_text(&mut self, text: &str, x: f32, y: f32) {
        self.commands.push(SurfaceCommand::StrokeText {
            text: text.to_string(),
            position: Point::new(x, y),
            run: self.state.text_run(self.state.stroke),
        });
    }

    fn measure_text(&mut self, text: &str) -> TextMetrics {
        TextMetrics {
            width: self.measurer.measure(text, &self.state.font),
        }
    }

    fn draw_image(&mut self, image: &ImageData, dx: f32, dy: f32, dw: f32, dh: f32) {
        self.commands.push(SurfaceCommand::DrawImage {
            rect: Rect::new(dx, dy, dw, dh),
            image_width: image.width(),
            image_height: image.height(),
        });
    }
}
