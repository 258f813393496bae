//! Phase rotation
//!
//! Work alternates with short breaks until enough work sessions have been
//! completed, then a long break resets the cycle.

use std::fmt;

/// One timed interval of the rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Work,
    ShortBreak,
    LongBreak,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Work => "Work",
            Phase::ShortBreak => "Short Break",
            Phase::LongBreak => "Long Break",
        }
    }

    pub fn is_work(&self) -> bool {
        matches!(self, Phase::Work)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decide the phase that follows `phase`.
///
/// Finishing Work bumps `cycle_count` and picks a long break once it reaches
/// `cycles_per_long_break`. The count is only cleared when the long break
/// itself is left, so it still reads `cycles_per_long_break` during the
/// long break.
pub fn next_phase(cycles_per_long_break: u32, phase: Phase, cycle_count: u32) -> (Phase, u32) {
    match phase {
        Phase::Work => {
            let count = cycle_count.saturating_add(1);
            if count >= cycles_per_long_break {
                (Phase::LongBreak, count)
            } else {
                (Phase::ShortBreak, count)
            }
        }
        Phase::LongBreak => (Phase::Work, 0),
        Phase::ShortBreak => (Phase::Work, cycle_count),
    }
}
