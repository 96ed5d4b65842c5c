#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};

use crate::gesture::Gesture;

/// Ordered collection of recorded gestures.
///
/// Templates keep their insertion order, and recognition scans them in that
/// order, keeping the first of two equally distant templates, so the order is
/// part of the matching behavior. The core only appends; loading the
/// collection at startup and saving it back belong to the caller.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GestureLibrary {
    gestures: Vec<Gesture>,
}

impl GestureLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a recorded gesture, making it a template.
    pub fn add(&mut self, gesture: Gesture) {
        self.gestures.push(gesture);
    }

    pub fn gestures(&self) -> &[Gesture] {
        &self.gestures
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Gesture> {
        self.gestures.iter()
    }

    pub fn len(&self) -> usize {
        self.gestures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gestures.is_empty()
    }
}

impl From<Vec<Gesture>> for GestureLibrary {
    fn from(gestures: Vec<Gesture>) -> Self {
        GestureLibrary { gestures }
    }
}

impl FromIterator<Gesture> for GestureLibrary {
    fn from_iter<I: IntoIterator<Item = Gesture>>(iter: I) -> Self {
        GestureLibrary {
            gestures: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a GestureLibrary {
    type Item = &'a Gesture;
    type IntoIter = std::slice::Iter<'a, Gesture>;

    fn into_iter(self) -> Self::IntoIter {
        self.gestures.iter()
    }
}
