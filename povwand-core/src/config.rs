//! Build-time configuration constants
//!
//! The wand has no runtime configuration surface: the message text, the
//! debounce thresholds, and the sweep ratio are fixed at compile time.
//! Changing any of them means recompiling.

/// Maximum message length in characters.
pub const MAX_MESSAGE_LEN: usize = 9;

/// Maximum frames per character: 3 glyph columns plus the 2-frame spacer.
pub const MAX_FRAMES_PER_CHAR: usize = 5;

/// Frame sequence capacity. Sized so any `MAX_MESSAGE_LEN` message fits.
pub const MAX_FRAME_COUNT: usize = MAX_MESSAGE_LEN * MAX_FRAMES_PER_CHAR;

/// Minimum elapsed ticks for a rising edge to count as a swing start.
///
/// A false start is cheap (worst case a garbled partial display), so the
/// threshold is low.
pub const START_DEBOUNCE_TICKS: u32 = 1_500;

/// Minimum elapsed ticks for a falling edge to count as a swing end.
///
/// A false end truncates an in-progress display, so the threshold is much
/// higher than the start threshold to reject sensor jitter.
pub const END_DEBOUNCE_TICKS: u32 = 14_000;

/// Sweep ratio numerator/denominator pair.
///
/// The per-frame display period is `swing_ticks / (2.4 * frame_count)`.
/// The ratio 2.4 is carried as 24/10 so the division stays in integer
/// arithmetic, truncating toward zero.
pub const SWEEP_RATIO_NUM: u32 = 24;
pub const SWEEP_RATIO_DEN: u32 = 10;
