//! Template-based recognition of freehand 2D strokes.
//!
//! A raw pointer trace is captured relative to the position where it started,
//! rescaled so the larger dimension of its bounding box matches a configured
//! size, and resampled into a fixed number of points spaced evenly along the
//! path. Recognition compares the resulting [`gesture::Gesture`] against a
//! [`library::GestureLibrary`] of previously recorded templates and returns
//! the closest one, using a plain average point distance or a variant that
//! reweights outlier distances.
//!
//! The crate performs no input polling and no file I/O. Feed it positions
//! through a [`capture::CaptureSession`] and persist the library however you
//! like; with the `serde` feature enabled all record types derive
//! `Serialize`/`Deserialize`.

pub mod capture;
pub mod comparator;
pub mod config;
pub mod geometry;
pub mod gesture;
pub mod library;
pub mod point;
pub mod recognizer;
