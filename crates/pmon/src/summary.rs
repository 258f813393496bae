//! Lifetime accounting
//!
//! Folds the completed-phase totals and the partial progress of the running
//! phase into the figures shown when the timer exits.

use pmon_core::format::hms;
use std::fmt;

use crate::state::RunState;

/// Work and break totals in seconds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub work_secs: u64,
    pub break_secs: u64,
}

impl Summary {
    /// Totals including the running phase's elapsed time; safe to call mid-phase
    pub fn from_state(state: &RunState) -> Self {
        let current = state.current_phase_elapsed_secs;
        let (work_extra, break_extra) = if state.phase.is_work() {
            (current, 0)
        } else {
            (0, current)
        };

        Self {
            work_secs: state.accumulated_work_secs.saturating_add(work_extra),
            break_secs: state.accumulated_break_secs.saturating_add(break_extra),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Time Working: {}", hms(self.work_secs))?;
        write!(f, "Time On Break: {}", hms(self.break_secs))
    }
}
