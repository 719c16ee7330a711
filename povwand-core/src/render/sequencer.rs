//! Display sequencer
//!
//! Renders the frame sequence once per validated swing. Iteration runs in
//! *reverse* (last frame first): the message is encoded in reading order
//! but the LEDs pass through the air the other way, so reversing here is
//! what makes the afterimage read left to right.

use crate::traits::{OutputPort, Pace, RenderPacer};

/// How a render run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SequenceOutcome {
    /// Every frame got its full dwell time.
    Completed,
    /// An end-of-swing trigger collapsed the remaining dwell time.
    Aborted,
}

/// Sequencer over a read-only frame sequence
///
/// Holds no mutable state of its own; the per-run state (current frame,
/// remaining dwell) lives on the stack of [`run`](Self::run).
#[derive(Debug, Clone, Copy)]
pub struct DisplaySequencer<'a> {
    frames: &'a [u8],
}

impl<'a> DisplaySequencer<'a> {
    /// Create a sequencer over an encoded frame sequence.
    pub fn new(frames: &'a [u8]) -> Self {
        Self { frames }
    }

    /// Number of frames in the sequence.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Render the whole sequence once.
    ///
    /// Each frame is written to `out` and held for `frame_period` ticks of
    /// `pacer`. An abort reported by the pacer zeroes both the remaining
    /// dwell of the current frame and the period for all frames after it,
    /// so the loop falls through (remaining frames are still written, with
    /// no dwell) rather than being cancelled preemptively. The output is
    /// forced to all-zero before returning, on both paths.
    pub fn run<O, P>(&self, frame_period: u32, out: &mut O, pacer: &mut P) -> SequenceOutcome
    where
        O: OutputPort,
        P: RenderPacer,
    {
        let mut period = frame_period;
        let mut aborted = false;

        for &frame in self.frames.iter().rev() {
            out.set_pattern(frame);

            let mut remaining = period;
            while remaining > 0 {
                match pacer.tick() {
                    Pace::Continue => remaining -= 1,
                    Pace::Abort => {
                        remaining = 0;
                        period = 0;
                        aborted = true;
                    }
                }
            }
        }

        out.clear();

        if aborted {
            SequenceOutcome::Aborted
        } else {
            SequenceOutcome::Completed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::encode;
    use crate::swing::frame_period;

    /// Records every pattern written, tagged with the pacer tick count at
    /// the time of the write.
    struct RecordingOutput {
        writes: heapless::Vec<u8, 64>,
    }

    impl RecordingOutput {
        fn new() -> Self {
            Self {
                writes: heapless::Vec::new(),
            }
        }
    }

    impl OutputPort for RecordingOutput {
        fn set_pattern(&mut self, pattern: u8) {
            let _ = self.writes.push(pattern);
        }
    }

    /// Pacer that counts ticks and optionally aborts on a scripted tick.
    struct ScriptedPacer {
        ticks: u32,
        abort_on_tick: Option<u32>,
    }

    impl ScriptedPacer {
        fn free_running() -> Self {
            Self {
                ticks: 0,
                abort_on_tick: None,
            }
        }

        fn aborting_on(tick: u32) -> Self {
            Self {
                ticks: 0,
                abort_on_tick: Some(tick),
            }
        }
    }

    impl RenderPacer for ScriptedPacer {
        fn tick(&mut self) -> Pace {
            self.ticks += 1;
            if self.abort_on_tick == Some(self.ticks) {
                Pace::Abort
            } else {
                Pace::Continue
            }
        }
    }

    #[test]
    fn test_frames_rendered_in_reverse_then_cleared() {
        let frames = [0x01, 0x02, 0x03];
        let sequencer = DisplaySequencer::new(&frames);
        let mut out = RecordingOutput::new();
        let mut pacer = ScriptedPacer::free_running();

        let outcome = sequencer.run(2, &mut out, &mut pacer);

        assert_eq!(outcome, SequenceOutcome::Completed);
        assert_eq!(out.writes.as_slice(), &[0x03, 0x02, 0x01, 0x00]);
        assert_eq!(pacer.ticks, 3 * 2);
    }

    #[test]
    fn test_abort_collapses_remaining_dwell() {
        let frames = [0x01, 0x02, 0x03];
        let sequencer = DisplaySequencer::new(&frames);
        let mut out = RecordingOutput::new();
        // Frame 0x03 gets ticks 1-4; the abort lands on tick 6, two ticks
        // into frame 0x02.
        let mut pacer = ScriptedPacer::aborting_on(6);

        let outcome = sequencer.run(4, &mut out, &mut pacer);

        assert_eq!(outcome, SequenceOutcome::Aborted);
        // Remaining frames still fall through with zero dwell, and the
        // output ends dark either way
        assert_eq!(out.writes.as_slice(), &[0x03, 0x02, 0x01, 0x00]);
        assert_eq!(pacer.ticks, 6);
    }

    #[test]
    fn test_abort_shortens_but_does_not_skip_current_frame() {
        let frames = [0xAA];
        let sequencer = DisplaySequencer::new(&frames);
        let mut out = RecordingOutput::new();
        let mut pacer = ScriptedPacer::aborting_on(1);

        sequencer.run(100, &mut out, &mut pacer);

        // The frame was written before the first dwell tick, so it showed
        // for one tick rather than none
        assert_eq!(out.writes.as_slice(), &[0xAA, 0x00]);
        assert_eq!(pacer.ticks, 1);
    }

    #[test]
    fn test_empty_sequence_just_clears() {
        let sequencer = DisplaySequencer::new(&[]);
        let mut out = RecordingOutput::new();
        let mut pacer = ScriptedPacer::free_running();

        let outcome = sequencer.run(100, &mut out, &mut pacer);

        assert_eq!(outcome, SequenceOutcome::Completed);
        assert_eq!(out.writes.as_slice(), &[0x00]);
        assert_eq!(pacer.ticks, 0);
    }

    #[test]
    fn test_zero_period_writes_frames_without_dwell() {
        let frames = [0x01, 0x02];
        let sequencer = DisplaySequencer::new(&frames);
        let mut out = RecordingOutput::new();
        let mut pacer = ScriptedPacer::free_running();

        sequencer.run(0, &mut out, &mut pacer);

        assert_eq!(out.writes.as_slice(), &[0x02, 0x01, 0x00]);
        assert_eq!(pacer.ticks, 0);
    }

    #[test]
    fn test_hi_end_to_end() {
        // "HI" encodes to 10 frames; a 2400-tick swing gives a 100-tick
        // period; the full run spends 1000 ticks and ends dark
        let frames = encode("HI");
        assert_eq!(frames.len(), 10);

        let period = frame_period(2_400, frames.len() as u32);
        assert_eq!(period, 100);

        let sequencer = DisplaySequencer::new(&frames);
        let mut out = RecordingOutput::new();
        let mut pacer = ScriptedPacer::free_running();

        let outcome = sequencer.run(period, &mut out, &mut pacer);

        assert_eq!(outcome, SequenceOutcome::Completed);
        assert_eq!(pacer.ticks, 1_000);
        assert_eq!(out.writes.len(), 11);
        assert_eq!(out.writes.last(), Some(&0));

        // Reverse order: writes are the frame sequence back to front
        for (write, frame) in out.writes.iter().zip(frames.iter().rev()) {
            assert_eq!(write, frame);
        }
    }
}
