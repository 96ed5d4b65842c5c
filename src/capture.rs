#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::point::Point;

/// Running min/max of the coordinates appended to a stroke.
///
/// The extremes start at the zero box: the seeded origin point already lies
/// inside it, and the box widens only when a sample leaves the origin.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoundingExtremes {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl BoundingExtremes {
    /// Widens the box to include p
    pub fn update(&mut self, p: &Point) {
        if p.x < self.min_x {
            self.min_x = p.x;
        }
        if p.x > self.max_x {
            self.max_x = p.x;
        }
        if p.y < self.min_y {
            self.min_y = p.y;
        }
        if p.y > self.max_y {
            self.max_y = p.y;
        }
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    /// The larger of the two box dimensions, the quantity the rescale step
    /// normalizes against.
    pub fn larger_dimension(&self) -> f32 {
        self.width().max(self.height())
    }
}

/// A finished capture: the ordered points of one continuous drag, relative to
/// where it started, and the bounding extremes observed while they were
/// appended.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawStroke {
    pub points: Vec<Point>,
    pub extremes: BoundingExtremes,
}

/// Where a [`CaptureSession`] is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CaptureState {
    #[default]
    Idle,
    Capturing,
    Completed,
}

#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum CaptureError {
    #[error("a capture is already in progress")]
    AlreadyCapturing,
    #[error("no capture in progress")]
    NotCapturing,
}

/// Accumulates one stroke from a stream of device positions.
///
/// The input loop drives the session: [`begin`](CaptureSession::begin) with
/// the position of the initial contact, [`sample`](CaptureSession::sample)
/// with every position that follows, [`finish`](CaptureSession::finish) when
/// the contact ends. Every sample is stored relative to the initial contact,
/// so the first stored point is always the origin. After `finish` the session
/// can be reused with another `begin`.
#[derive(Debug, Default)]
pub struct CaptureSession {
    state: CaptureState,
    origin: Point,
    points: Vec<Point>,
    extremes: BoundingExtremes,
}

impl CaptureSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CaptureState {
        self.state
    }

    /// Starts a capture at the given device position.
    pub fn begin(&mut self, origin: Point) -> Result<(), CaptureError> {
        if self.state == CaptureState::Capturing {
            return Err(CaptureError::AlreadyCapturing);
        }
        self.state = CaptureState::Capturing;
        self.origin = origin;
        self.points.clear();
        self.points.push(Point::ORIGIN);
        self.extremes = BoundingExtremes::default();
        trace!(x = origin.x, y = origin.y, "capture started");
        Ok(())
    }

    /// Appends one device position to the stroke in progress.
    pub fn sample(&mut self, position: Point) -> Result<(), CaptureError> {
        if self.state != CaptureState::Capturing {
            return Err(CaptureError::NotCapturing);
        }
        let p = position - self.origin;
        self.extremes.update(&p);
        self.points.push(p);
        Ok(())
    }

    /// Ends the capture in progress and yields the accumulated stroke.
    pub fn finish(&mut self) -> Result<RawStroke, CaptureError> {
        if self.state != CaptureState::Capturing {
            return Err(CaptureError::NotCapturing);
        }
        self.state = CaptureState::Completed;
        debug!(samples = self.points.len(), "capture finished");
        Ok(RawStroke {
            points: std::mem::take(&mut self.points),
            extremes: self.extremes,
        })
    }
}
