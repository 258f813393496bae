//! Mutable run state
//!
//! One `RunState` exists per process run. It is owned by the caller and
//! lent to the engine for each phase, so the summary can still be read after
//! a countdown is cancelled mid-phase.

use crate::phase::{next_phase, Phase};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunState {
    /// Phase currently running
    pub phase: Phase,
    /// Work sessions completed since the last long break
    pub cycle_count: u32,
    /// Seconds of fully completed work phases
    pub accumulated_work_secs: u64,
    /// Seconds of fully completed short and long breaks
    pub accumulated_break_secs: u64,
    /// Seconds spent in the running phase so far
    pub current_phase_elapsed_secs: u64,
}

impl RunState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_phase(&mut self) {
        self.current_phase_elapsed_secs = 0;
    }

    pub fn record_elapsed(&mut self, secs: u64) {
        self.current_phase_elapsed_secs = secs;
    }

    /// Credit the running phase with its full configured `duration`.
    ///
    /// The configured value is used rather than the observed elapsed time
    /// so scheduling jitter never leaks into the lifetime totals.
    pub fn complete_phase(&mut self, duration: u64) {
        if self.phase.is_work() {
            self.accumulated_work_secs = self.accumulated_work_secs.saturating_add(duration);
        } else {
            self.accumulated_break_secs = self.accumulated_break_secs.saturating_add(duration);
        }
        self.current_phase_elapsed_secs = 0;
    }

    /// Move on to the next phase of the rotation
    pub fn advance(&mut self, cycles_per_long_break: u32) {
        let (phase, cycle_count) = next_phase(cycles_per_long_break, self.phase, self.cycle_count);
        self.phase = phase;
        self.cycle_count = cycle_count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = RunState::new();
        assert_eq!(state.phase, Phase::Work);
        assert_eq!(state.cycle_count, 0);
        assert_eq!(state.accumulated_work_secs, 0);
        assert_eq!(state.accumulated_break_secs, 0);
        assert_eq!(state.current_phase_elapsed_secs, 0);
    }

    #[test]
    fn test_complete_phase_attributes_by_phase() {
        let mut state = RunState::new();
        state.record_elapsed(1499);
        state.complete_phase(1500);
        assert_eq!(state.accumulated_work_secs, 1500);
        assert_eq!(state.accumulated_break_secs, 0);
        assert_eq!(state.current_phase_elapsed_secs, 0);

        state.phase = Phase::ShortBreak;
        state.complete_phase(300);
        state.phase = Phase::LongBreak;
        state.complete_phase(1800);
        assert_eq!(state.accumulated_work_secs, 1500);
        assert_eq!(state.accumulated_break_secs, 2100);
    }

    #[test]
    fn test_advance_through_cycle() {
        let mut state = RunState::new();
        state.advance(2);
        assert_eq!((state.phase, state.cycle_count), (Phase::ShortBreak, 1));
        state.advance(2);
        assert_eq!((state.phase, state.cycle_count), (Phase::Work, 1));
        state.advance(2);
        assert_eq!((state.phase, state.cycle_count), (Phase::LongBreak, 2));
        state.advance(2);
        assert_eq!((state.phase, state.cycle_count), (Phase::Work, 0));
    }

    #[test]
    fn test_begin_phase_resets_elapsed() {
        let mut state = RunState::new();
        state.record_elapsed(42);
        state.begin_phase();
        assert_eq!(state.current_phase_elapsed_secs, 0);
    }
}
