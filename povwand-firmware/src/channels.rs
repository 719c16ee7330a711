//! Inter-task communication channels
//!
//! Defines the static signals and flags shared between the motion watcher
//! and the render loop. The motion watcher runs at interrupt priority, so
//! everything here must be safe to touch from both contexts.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use portable_atomic::AtomicBool;

/// Signal that a swing has been validated and rendering should begin.
/// Payload is the frame period in wand ticks.
pub static SWING_START: Signal<CriticalSectionRawMutex, u32> = Signal::new();

/// Abort flag, set by the motion watcher when the swing ends early.
/// Polled by the render pacer between every dwell tick.
pub static ABORT: AtomicBool = AtomicBool::new(false);

/// Set by the render loop when a sequence finishes (complete or aborted).
/// Drained by the motion watcher before classifying the next edge, so the
/// re-entry gate only holds while a sequence is genuinely in flight.
pub static SEQUENCE_DONE: AtomicBool = AtomicBool::new(false);
