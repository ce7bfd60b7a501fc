//! Foyue Paint
//!
//! Compound 2D drawing operations on top of a canvas-like [`Surface`].
//!
//! # Features
//!
//! - Stroked rounded rectangles with per-corner radii and padding
//! - Images drawn plain or clipped to a rounded rectangle
//! - Single-line text and greedy wrapped text with ellipsis truncation
//! - A recording surface for tests and serialization
//! - TOML configuration for default styles
//!
//! # Example
//!
//! ```
//! use foyue_paint::{Color, MultiTextRequest, Paint, RecordingSurface, RoundRectProps};
//!
//! let mut paint = Paint::new(RecordingSurface::new());
//! paint
//!     .round_rect(&RoundRectProps::new().border_radius(8.0))
//!     .fill(Color::WHITE)
//!     .draw_multi_text(&MultiTextRequest::new("hello world", 10.0, 10.0, 80.0));
//!
//! assert!(!paint.surface().commands().is_empty());
//! ```

pub mod color;
pub mod config;
pub mod error;
pub mod measure;
pub mod paint;
pub mod path;
pub mod primitives;
pub mod recording;
pub mod style;
pub mod surface;
pub mod text;

pub use color::Color;
pub use config::{ImageConfig, PaintConfig};
pub use error::{PaintError, Result};
pub use measure::{FontMeasurer, MonospaceMeasurer, TextMeasurer};
pub use paint::{ImageProps, MultiTextRequest, Paint, RoundImageProps, TextRequest};
pub use path::{Path, PathBuilder, PathCommand, Point};
pub use primitives::*;
pub use recording::{RecordingSurface, SurfaceCommand, TextRun};
pub use style::{
    Direction, FontKerning, PositionProps, RoundRectProps, RoundRectStyle, TextAlign,
    TextBaseline, TextProps, TextStyle,
};
pub use surface::{Surface, TextMetrics};
pub use text::{font_size_px, wrap_lines, WrapOptions, WrappedLine};

pub use foyue_image::{ImageData, ImageError, ImageSource};
