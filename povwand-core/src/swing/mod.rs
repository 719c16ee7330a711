//! Swing motion sensing
//!
//! Classifies raw comparator edges into validated swing boundaries and
//! derives the adaptive per-frame display period from swing speed.

pub mod classifier;

pub use classifier::{frame_period, EdgeClassifier, EdgeDirection, EdgeOutcome};
