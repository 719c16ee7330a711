//! Hardware abstraction traits
//!
//! These traits define the interface between the wand logic and
//! hardware-specific implementations.

pub mod output;
pub mod pacer;

pub use output::OutputPort;
pub use pacer::{Pace, RenderPacer};
