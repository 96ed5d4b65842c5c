use tracing::{debug, warn};

use crate::capture::RawStroke;
use crate::comparator;
use crate::config::RecognizerConfig;
use crate::gesture::Gesture;
use crate::library::GestureLibrary;

/// Outcome of matching a captured gesture against a template library.
#[derive(Clone, Debug, PartialEq)]
pub struct Match {
    /// Name of the closest template; empty when the library held no
    /// comparable template.
    pub name: String,
    /// Distance to the closest template under the configured metric.
    pub distance: f32,
}

impl Match {
    /// The sentinel returned when no template could be compared.
    pub fn none() -> Self {
        Match {
            name: String::new(),
            distance: f32::MAX,
        }
    }

    pub fn is_match(&self) -> bool {
        !self.name.is_empty()
    }
}

/// Classifies a candidate gesture against a template library.
///
/// Scans the library in insertion order and returns the first template
/// minimizing the configured distance metric. There is no distance cutoff:
/// the closest template is returned however poor the match is. Templates
/// whose point count differs from the candidate's cannot be compared and are
/// skipped. An empty library yields [`Match::none`].
pub fn classify(candidate: &Gesture, library: &GestureLibrary, config: &RecognizerConfig) -> Match {
    let mut best = Match::none();
    for template in library {
        let result = if config.anomalies_enabled() {
            comparator::anomaly_weighted_distance(
                candidate,
                template,
                config.dev_tightness(),
                config.anomalies_factor(),
            )
        } else {
            comparator::average_distance(candidate, template)
        };
        let distance = match result {
            Ok(distance) => distance,
            Err(err) => {
                warn!(template = %template.name, %err, "skipping template");
                continue;
            }
        };
        if distance < best.distance {
            best = Match {
                name: template.name.clone(),
                distance,
            };
        }
    }
    debug!(name = %best.name, distance = best.distance, "classified gesture");
    best
}

/// Recognizes a finished capture in one call: rescales and resamples the
/// stroke, then classifies the resulting gesture.
pub fn recognize(stroke: RawStroke, library: &GestureLibrary, config: &RecognizerConfig) -> Match {
    let candidate = Gesture::from_stroke(stroke, "", config);
    classify(&candidate, library, config)
}
