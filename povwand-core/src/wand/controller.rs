//! Wand controller
//!
//! Central coordinator: owns the edge classifier and the shared state read
//! by the render context. The motion context feeds edges in through
//! [`WandController::on_edge`]; the render context reads [`WandState`] and
//! reports completion. The frame sequence itself lives with the render
//! side; the controller only needs its length for the period math.
//!
//! Single-writer/single-reader discipline: `on_edge` is the only writer of
//! the start/abort side, `sequence_finished` the only writer of the
//! clear-running side.

use crate::swing::{EdgeClassifier, EdgeDirection, EdgeOutcome};
use crate::wand::machine::{Event, State};

/// Snapshot of the state shared between the motion and render contexts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WandState {
    /// A validated swing started and the sequence should be rendered.
    pub running: bool,
    /// Ticks to hold each frame, derived from the last validated swing.
    pub frame_period: u32,
    /// An end trigger fired; the sequencer should collapse its dwell.
    pub abort: bool,
}

/// Controller wiring classifier and run state together
pub struct WandController {
    classifier: EdgeClassifier,
    state: State,
    frame_period: u32,
    abort: bool,
}

impl WandController {
    /// Build a controller for a message of `frame_count` encoded frames.
    ///
    /// Taking the count rather than the sequence keeps the frames in one
    /// place: the render side holds the only copy.
    pub fn new(frame_count: usize) -> Self {
        Self {
            classifier: EdgeClassifier::new(frame_count),
            state: State::Idle,
            frame_period: 0,
            abort: false,
        }
    }

    /// Current run state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Snapshot of the shared state.
    pub fn wand_state(&self) -> WandState {
        WandState {
            running: self.state.is_running(),
            frame_period: self.frame_period,
            abort: self.abort,
        }
    }

    /// Feed one raw comparator edge from the motion context.
    ///
    /// Returns the classification so the caller can decide whether to
    /// reset the tick counter (noise must not reset it).
    pub fn on_edge(&mut self, direction: EdgeDirection, elapsed_ticks: u32) -> EdgeOutcome {
        let outcome = self.classifier.classify(direction, elapsed_ticks);

        match outcome {
            EdgeOutcome::SwingStart { frame_period } => {
                // The running gate: a start while already rendering is
                // dropped, keeping the in-flight period stable
                if !self.state.is_running() {
                    self.frame_period = frame_period;
                    self.abort = false;
                    self.state = self.state.transition(Event::SwingValidated { frame_period });
                }
            }
            EdgeOutcome::SwingEnd => {
                // Truncate: zero the period so the render loop falls
                // through, and flag the pacer to collapse the current dwell
                self.frame_period = 0;
                self.abort = true;
                self.state = self.state.transition(Event::SwingEnded);
            }
            EdgeOutcome::Noise => {}
        }

        outcome
    }

    /// Render context reports that the sequence run returned.
    pub fn sequence_finished(&mut self) {
        self.abort = false;
        self.state = self.state.transition(Event::SequenceFinished);
    }
}
