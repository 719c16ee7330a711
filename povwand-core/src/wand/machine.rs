//! Run state machine
//!
//! The wand's rendering behavior is a function of the current state and an
//! event. The machine is deliberately tiny: one display run per validated
//! swing, no other modes.

/// Machine states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Waiting for a validated swing start.
    Idle,
    /// Frame sequence is being rendered.
    Running,
}

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// A rising edge passed the start debounce threshold.
    SwingValidated { frame_period: u32 },
    /// A falling edge passed the end debounce threshold.
    SwingEnded,
    /// The sequencer finished (or fell through after an abort).
    SequenceFinished,
}

impl State {
    /// Whether the sequencer should be running in this state.
    pub fn is_running(&self) -> bool {
        matches!(self, State::Running)
    }

    /// Process an event and return the next state.
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use State::*;

        match (self, event) {
            (Idle, SwingValidated { .. }) => Running,
            (Running, SwingEnded) => Idle,
            (Running, SequenceFinished) => Idle,

            // Re-entrant starts while running are ignored; stray end or
            // finish events while idle change nothing.
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_to_running_on_validated_start() {
        let next = State::Idle.transition(Event::SwingValidated { frame_period: 100 });
        assert_eq!(next, State::Running);
        assert!(next.is_running());
    }

    #[test]
    fn test_running_to_idle_on_swing_end() {
        assert_eq!(State::Running.transition(Event::SwingEnded), State::Idle);
    }

    #[test]
    fn test_running_to_idle_on_sequence_finished() {
        assert_eq!(
            State::Running.transition(Event::SequenceFinished),
            State::Idle
        );
    }

    #[test]
    fn test_reentrant_start_is_ignored() {
        let next = State::Running.transition(Event::SwingValidated { frame_period: 7 });
        assert_eq!(next, State::Running);
    }

    #[test]
    fn test_stray_events_while_idle_are_ignored() {
        assert_eq!(State::Idle.transition(Event::SwingEnded), State::Idle);
        assert_eq!(State::Idle.transition(Event::SequenceFinished), State::Idle);
    }
}
