//! Motion edge classification
//!
//! The motion sensor is a comparator squaring the accelerometer output
//! against a fixed reference: its output rises when leftward acceleration
//! dominates and falls when rightward acceleration takes over. Every edge
//! arrives with the tick count elapsed since the last *validated* edge.
//!
//! Classification is a pure function so it can run in the interrupt
//! context (a few comparisons and one division) and be tested on the host.

use crate::config::{
    END_DEBOUNCE_TICKS, START_DEBOUNCE_TICKS, SWEEP_RATIO_DEN, SWEEP_RATIO_NUM,
};

/// Direction of a comparator edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdgeDirection {
    /// Leftward acceleration dominant - a swing is starting.
    Rising,
    /// Rightward acceleration dominant - the swing is returning.
    Falling,
}

/// Verdict for one raw edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdgeOutcome {
    /// Bounce or jitter: below the debounce threshold. No state change,
    /// and the tick counter keeps running so bounce time accumulates.
    Noise,
    /// Validated start-of-swing with the period to display each frame for.
    SwingStart { frame_period: u32 },
    /// Validated end-of-swing: truncate any in-progress display.
    SwingEnd,
}

impl EdgeOutcome {
    /// Whether the caller should reset the free-running tick counter.
    ///
    /// Only validated edges reset it; resetting on noise would let a burst
    /// of bounces postpone validation forever.
    pub fn resets_counter(&self) -> bool {
        !matches!(self, EdgeOutcome::Noise)
    }
}

/// Edge classifier for a fixed frame count
///
/// The frame count is fixed once the message is encoded, so it is captured
/// at construction rather than passed per edge.
#[derive(Debug, Clone, Copy)]
pub struct EdgeClassifier {
    frame_count: u32,
}

impl EdgeClassifier {
    /// Create a classifier for a message of `frame_count` frames.
    pub fn new(frame_count: usize) -> Self {
        Self {
            frame_count: frame_count as u32,
        }
    }

    /// Classify one raw edge.
    ///
    /// The thresholds are asymmetric: a false start costs at worst a
    /// garbled partial display, but a false end mid-render truncates the
    /// message, so ends need nearly ten times the elapsed time to qualify.
    pub fn classify(&self, direction: EdgeDirection, elapsed_ticks: u32) -> EdgeOutcome {
        match direction {
            EdgeDirection::Falling if elapsed_ticks > END_DEBOUNCE_TICKS => EdgeOutcome::SwingEnd,
            EdgeDirection::Rising if elapsed_ticks > START_DEBOUNCE_TICKS => {
                EdgeOutcome::SwingStart {
                    frame_period: frame_period(elapsed_ticks, self.frame_count),
                }
            }
            _ => EdgeOutcome::Noise,
        }
    }
}

/// Per-frame display period for a swing of `elapsed_ticks`.
///
/// `elapsed_ticks / (2.4 * frame_count)`, truncated. The 2.4 sweep ratio
/// is applied as 24/10 in integer math; the u64 intermediate keeps the
/// scaled numerator from overflowing.
pub fn frame_period(elapsed_ticks: u32, frame_count: u32) -> u32 {
    if frame_count == 0 {
        return 0;
    }
    let scaled = elapsed_ticks as u64 * SWEEP_RATIO_DEN as u64;
    (scaled / (SWEEP_RATIO_NUM as u64 * frame_count as u64)) as u32
}
