//! Wand run state
//!
//! The run/idle state machine and the controller that wires the font
//! encoder, edge classifier, and shared state together.

pub mod controller;
pub mod machine;

pub use controller::{WandController, WandState};
pub use machine::{Event, State};
