//! Wand tick timebase
//!
//! All swing timing is counted in wand ticks rather than raw microseconds,
//! so the debounce thresholds and frame periods stay in one unit. One tick
//! is 8 us (a 125 kHz counter), which puts the start debounce at 12 ms and
//! the end debounce at 112 ms of elapsed swing.

use embassy_time::{Duration, Instant};

/// Length of one wand tick in microseconds.
pub const WAND_TICK_MICROS: u64 = 8;

/// One wand tick as an embassy duration, for the render pacer.
pub const WAND_TICK: Duration = Duration::from_micros(WAND_TICK_MICROS);

/// Elapsed wand ticks between two instants, saturating at `u32::MAX`.
pub fn ticks_since(earlier: Instant, now: Instant) -> u32 {
    let micros = now.duration_since(earlier).as_micros();
    (micros / WAND_TICK_MICROS).min(u32::MAX as u64) as u32
}
