//! Motion watcher task
//!
//! Watches the comparator pin wired to the tilt sensor and feeds every edge
//! to the wand controller. Runs on the interrupt executor so it preempts the
//! render loop, which busy-waits for whole frames at a time.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::Instant;
use portable_atomic::Ordering;

use povwand_core::swing::{EdgeDirection, EdgeOutcome};
use povwand_core::wand::WandController;

use crate::channels::{ABORT, SEQUENCE_DONE, SWING_START};
use crate::timebase::ticks_since;

/// Motion watcher task
///
/// Classifies comparator edges into swing starts, swing ends, and noise.
/// The elapsed-tick counter only resets on validated edges, so bounce
/// around a threshold cannot stretch or restart the measurement window.
#[embassy_executor::task]
pub async fn motion_task(mut comparator: Input<'static>, mut controller: WandController) {
    info!("Motion watcher started");

    let mut counter_start = Instant::now();

    loop {
        comparator.wait_for_any_edge().await;
        let now = Instant::now();

        let direction = if comparator.is_high() {
            EdgeDirection::Rising
        } else {
            EdgeDirection::Falling
        };
        let elapsed = ticks_since(counter_start, now);

        // Pick up a finished sequence before classifying, so the re-entry
        // gate below reflects whether the render loop is actually busy.
        if SEQUENCE_DONE.swap(false, Ordering::AcqRel) {
            controller.sequence_finished();
        }

        let was_running = controller.state().is_running();
        let outcome = controller.on_edge(direction, elapsed);

        match outcome {
            EdgeOutcome::SwingStart { frame_period } if !was_running => {
                debug!(
                    "swing validated: {} ticks elapsed, {} ticks/frame",
                    elapsed, frame_period
                );
                ABORT.store(false, Ordering::Release);
                SWING_START.signal(frame_period);
            }
            EdgeOutcome::SwingStart { .. } => {
                // Sequence still in flight, start ignored.
                trace!("swing start while rendering, ignored");
            }
            EdgeOutcome::SwingEnd => {
                debug!("swing ended after {} ticks", elapsed);
                ABORT.store(true, Ordering::Release);
            }
            EdgeOutcome::Noise => {}
        }

        if outcome.resets_counter() {
            counter_start = now;
        }
    }
}
