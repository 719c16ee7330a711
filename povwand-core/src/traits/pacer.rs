//! Render pacing trait
//!
//! Frame dwell is a busy-wait countdown; the motion context aborts it by
//! collapsing the remaining count. The countdown step is a trait so the
//! sequencer's abort-during-frame behavior can be exercised with simulated
//! tick sources on the host.

/// Outcome of waiting one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pace {
    /// Keep displaying the current frame.
    Continue,
    /// An end-of-swing trigger fired; collapse the remaining dwell time.
    Abort,
}

/// Trait for the per-tick delay inside frame rendering
///
/// `tick` blocks (or yields) for one tick of the frame period and reports
/// whether an abort was requested while waiting. It is the only
/// cancellation point the sequencer has.
pub trait RenderPacer {
    /// Wait one tick, then report whether rendering should continue.
    fn tick(&mut self) -> Pace;
}
