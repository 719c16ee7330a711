//! Render loop task
//!
//! Waits for a validated swing, then flashes the frame sequence onto the
//! LED column at the swing-derived period. Runs on the thread executor;
//! the motion watcher preempts it, so the abort flag can flip mid-frame
//! and is observed at the next dwell tick.

use defmt::*;
use embassy_time::block_for;
use portable_atomic::Ordering;

use povwand_core::render::{DisplaySequencer, SequenceOutcome};
use povwand_core::traits::{Pace, RenderPacer};

use crate::channels::{ABORT, SEQUENCE_DONE, SWING_START};
use crate::leds::WandLeds;
use crate::timebase::WAND_TICK;

/// Pacer that blocks for one wand tick, then checks the abort flag.
///
/// Blocking is deliberate: frame dwell is the timing-critical part of the
/// display and must not be at the mercy of executor wakeup latency.
struct TickPacer;

impl RenderPacer for TickPacer {
    fn tick(&mut self) -> Pace {
        block_for(WAND_TICK);
        if ABORT.load(Ordering::Acquire) {
            Pace::Abort
        } else {
            Pace::Continue
        }
    }
}

/// Render loop task
#[embassy_executor::task]
pub async fn render_task(frames: &'static [u8], mut leds: WandLeds) {
    info!("Render loop started, {} frames", frames.len());

    let sequencer = DisplaySequencer::new(frames);

    loop {
        let frame_period = SWING_START.wait().await;
        debug!("rendering at {} ticks/frame", frame_period);

        let mut pacer = TickPacer;
        match sequencer.run(frame_period, &mut leds, &mut pacer) {
            SequenceOutcome::Completed => debug!("sequence complete"),
            SequenceOutcome::Aborted => debug!("sequence aborted"),
        }

        SEQUENCE_DONE.store(true, Ordering::Release);
    }
}
