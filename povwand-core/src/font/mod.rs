//! Message-to-bitmap font encoding
//!
//! Converts the fixed message text into the flat frame sequence the
//! sequencer sweeps through the air. Built once at startup, read-only
//! afterwards.

pub mod encoder;
pub mod glyphs;

pub use encoder::{encode, FrameSequence};
pub use glyphs::{glyph, GLYPH_COLUMNS};
