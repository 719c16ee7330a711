//! Board-agnostic core logic for the povwand POV display
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (output port, render pacer)
//! - Font encoding (message text to bitmap frame sequence)
//! - Swing edge classification and debounce
//! - Frame sequencer with mid-frame abort
//! - Wand run state machine

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod font;
pub mod render;
pub mod swing;
pub mod traits;
pub mod wand;
