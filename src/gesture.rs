#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};

use crate::capture::{BoundingExtremes, RawStroke};
use crate::config::RecognizerConfig;
use crate::geometry;
use crate::point::Point;

/// A stroke in its comparable form: rescaled to the standard size and
/// resampled into a fixed number of points spaced evenly along the path.
///
/// A freshly captured gesture and a stored template are the same thing; a
/// template is a gesture that was appended to the library.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Gesture {
    /// Gesture class
    pub name: String,
    /// Gesture points (rescaled and resampled)
    pub points: Vec<Point>,
    /// Bounding extremes of the raw stroke, before rescaling
    pub extremes: BoundingExtremes,
}

impl Gesture {
    /// Builds a gesture from a finished capture.
    ///
    /// Consumes the stroke: the rescale mutates its points in place before
    /// they are resampled into a fresh vector of exactly
    /// `config.points_per_gesture()` points.
    pub fn from_stroke(mut stroke: RawStroke, name: &str, config: &RecognizerConfig) -> Self {
        Self::scale(&mut stroke, config.standard_ratio());
        let points = Self::resample(&stroke.points, config.points_per_gesture());
        Gesture {
            name: name.into(),
            points,
            extremes: stroke.extremes,
        }
    }

    /// Uniformly rescales the stroke so the larger dimension of its bounding
    /// box equals `target_size`, preserving aspect ratio and direction.
    /// A stroke with no extent has nothing to normalize and is left as is.
    fn scale(stroke: &mut RawStroke, target_size: f32) {
        let extent = stroke.extremes.larger_dimension();
        if extent == 0.0 {
            return;
        }
        let factor = target_size / extent;
        for p in &mut stroke.points {
            p.x *= factor;
            p.y *= factor;
        }
    }

    /// Resamples the array of points into n points separated by equal
    /// intervals of path length.
    ///
    /// The first output point is the first input point; the rest are
    /// interpolated along the path. When the walk runs out of path before all
    /// slots are filled (rounding, or degenerate input), the path endpoint is
    /// repeated.
    fn resample(points: &[Point], n: usize) -> Vec<Point> {
        let mut resampled = Vec::with_capacity(n);
        let Some(&first) = points.first() else {
            resampled.resize(n, Point::ORIGIN);
            return resampled;
        };
        resampled.push(first);

        let interval = geometry::path_length(points) / (n as f32 - 1.0);
        let mut covered = 0.0;

        for window in points.windows(2) {
            let [a, b] = window else { continue };
            let mut reference = *a;
            let mut remaining = geometry::euclidean_distance(a, b);
            // duplicate consecutive samples contribute no path length
            if remaining == 0.0 {
                continue;
            }
            if covered + remaining < interval {
                covered += remaining;
                continue;
            }
            while covered + remaining >= interval && resampled.len() < n {
                // fraction of the remaining segment at which the next evenly
                // spaced point falls
                let t = ((interval - covered) / remaining).clamp(0.0, 1.0);
                let next = Point::new(
                    reference.x + t * (b.x - reference.x),
                    reference.y + t * (b.y - reference.y),
                );
                remaining = covered + remaining - interval;
                covered = 0.0;
                reference = next;
                resampled.push(next);
            }
            covered = remaining;
            if resampled.len() == n {
                break;
            }
        }
        // sometimes we fall a rounding-error short of filling every slot
        let last = *points.last().unwrap();
        while resampled.len() < n {
            resampled.push(last);
        }
        resampled
    }
}
