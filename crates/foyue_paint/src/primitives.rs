//! Geometric primitives

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::path::Point;

/// A rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_points(p1: Point, p2: Point) -> Self {
        let x = p1.x.min(p2.x);
        let y = p1.y.min(p2.y);
        let width = (p2.x - p1.x).abs();
        let height = (p2.y - p1.y).abs();
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

/// Top-left corner plus extent, in surface units
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Position {
    pub start_x: f32,
    pub start_y: f32,
    pub width: f32,
    pub height: f32,
}

impl Position {
    pub const fn new(start_x: f32, start_y: f32, width: f32, height: f32) -> Self {
        Self {
            start_x,
            start_y,
            width,
            height,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(0.0, 0.0, 100.0, 100.0)
    }
}

/// Corner radius for rounded rectangles
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CornerRadius {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadius {
    pub const fn new(top_left: f32, top_right: f32, bottom_right: f32, bottom_left: f32) -> Self {
        Self {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        }
    }

    pub const fn uniform(radius: f32) -> Self {
        Self::new(radius, radius, radius, radius)
    }

    /// Radii in `[top_left, top_right, bottom_right, bottom_left]` order
    pub fn to_array(&self) -> [f32; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_right,
            self.bottom_left,
        ]
    }
}

/// Border radius as supplied by callers
///
/// Deserializes from a number, a list of numbers, or anything else; the
/// last case becomes [`BorderRadius::Invalid`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(from = "RawBorderRadius")]
pub enum BorderRadius {
    /// One radius for all four corners
    Uniform(f32),
    /// Radii in top-left, top-right, bottom-right, bottom-left order
    PerCorner(SmallVec<[f32; 4]>),
    /// Unusable input, draws square corners
    Invalid,
}

impl BorderRadius {
    pub fn corners(radii: impl IntoIterator<Item = f32>) -> Self {
        Self::PerCorner(radii.into_iter().collect())
    }

    /// Expand into four corner radii
    ///
    /// Three values reuse the second for the bottom-left corner, two values
    /// repeat as a pair, a single value is broadcast and extra values are
    /// ignored.
    pub fn normalize(&self) -> CornerRadius {
        match self {
            Self::Uniform(r) => CornerRadius::uniform(*r),
            Self::PerCorner(radii) => match radii.as_slice() {
                [tl, tr, br, bl, ..] => CornerRadius::new(*tl, *tr, *br, *bl),
                [tl, tr, br] => CornerRadius::new(*tl, *tr, *br, *tr),
                [a, b] => CornerRadius::new(*a, *b, *a, *b),
                [r] => CornerRadius::uniform(*r),
                [] => CornerRadius::default(),
            },
            Self::Invalid => CornerRadius::default(),
        }
    }
}

impl Default for BorderRadius {
    fn default() -> Self {
        Self::Uniform(0.0)
    }
}

impl From<f32> for BorderRadius {
    fn from(radius: f32) -> Self {
        Self::Uniform(radius)
    }
}

impl From<Vec<f32>> for BorderRadius {
    fn from(radii: Vec<f32>) -> Self {
        Self::corners(radii)
    }
}

impl<const N: usize> From<[f32; N]> for BorderRadius {
    fn from(radii: [f32; N]) -> Self {
        Self::corners(radii)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawBorderRadius {
    Uniform(f32),
    PerCorner(SmallVec<[f32; 4]>),
    Other(serde::de::IgnoredAny),
}

impl From<RawBorderRadius> for BorderRadius {
    fn from(raw: RawBorderRadius) -> Self {
        match raw {
            RawBorderRadius::Uniform(r) => Self::Uniform(r),
            RawBorderRadius::PerCorner(radii) => Self::PerCorner(radii),
            RawBorderRadius::Other(_) => Self::Invalid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_radius_broadcasts() {
        for r in [0.0, 1.5, 8.0, 250.0] {
            assert_eq!(BorderRadius::from(r).normalize().to_array(), [r, r, r, r]);
        }
    }

    #[test]
    fn test_list_radius_expansion() {
        let cases: [(&[f32], [f32; 4]); 6] = [
            (&[1.0, 2.0, 3.0, 4.0, 5.0], [1.0, 2.0, 3.0, 4.0]),
            (&[1.0, 2.0, 3.0, 4.0], [1.0, 2.0, 3.0, 4.0]),
            (&[1.0, 2.0, 3.0], [1.0, 2.0, 3.0, 2.0]),
            (&[1.0, 2.0], [1.0, 2.0, 1.0, 2.0]),
            (&[7.0], [7.0, 7.0, 7.0, 7.0]),
            (&[], [0.0, 0.0, 0.0, 0.0]),
        ];
        for (input, expected) in cases {
            let radius = BorderRadius::corners(input.iter().copied());
            assert_eq!(radius.normalize().to_array(), expected, "input {input:?}");
        }
    }

    #[test]
    fn test_invalid_radius_is_square() {
        assert_eq!(BorderRadius::Invalid.normalize(), CornerRadius::default());
    }

    #[test]
    fn test_rect_from_points_normalizes_order() {
        let rect = Rect::from_points(Point::new(10.0, 20.0), Point::new(0.0, 5.0));
        assert_eq!(rect, Rect::new(0.0, 5.0, 10.0, 15.0));
        assert!(rect.contains(rect.origin()));
    }
}
