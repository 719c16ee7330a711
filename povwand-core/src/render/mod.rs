//! Frame rendering
//!
//! Sweeps the encoded frame sequence across the output port, one frame per
//! swing-derived period, honoring mid-frame abort.

pub mod sequencer;

pub use sequencer::{DisplaySequencer, SequenceOutcome};
