#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};

/// A 2D point.
///
/// Stroke points are stored relative to the position of the initial contact,
/// so the first point of every captured stroke is [`Point::ORIGIN`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    /// Constructs a new point
    pub fn new(x: f32, y: f32) -> Self {
        Point { x, y }
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}
