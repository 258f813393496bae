//! Validated timer settings
//!
//! Durations are whole seconds. Zero values are rejected on construction so
//! the countdown can never run a phase that ends before it starts, and no
//! phase may run longer than [`MAX_PHASE_SECS`].

use pmon_core::config::{
    DEFAULT_CYCLES, DEFAULT_LONG_BREAK_MINUTES, DEFAULT_SHORT_BREAK_MINUTES, DEFAULT_WORK_MINUTES,
};

use crate::error::{Error, Result};
use crate::phase::Phase;

const SECONDS_PER_MINUTE: u64 = 60;

/// Longest allowed phase: one week
pub const MAX_PHASE_SECS: u64 = 7 * 24 * 60 * SECONDS_PER_MINUTE;

/// Immutable timer configuration for one process run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerConfig {
    cycles_per_long_break: u32,
    work_secs: u64,
    short_break_secs: u64,
    long_break_secs: u64,
}

impl TimerConfig {
    pub fn new(
        cycles_per_long_break: u32,
        work_secs: u64,
        short_break_secs: u64,
        long_break_secs: u64,
    ) -> Result<Self> {
        if cycles_per_long_break == 0 {
            return Err(Error::InvalidConfig { field: "cycles" });
        }
        for (field, value) in [
            ("work duration", work_secs),
            ("short break duration", short_break_secs),
            ("long break duration", long_break_secs),
        ] {
            if value == 0 {
                return Err(Error::InvalidConfig { field });
            }
            if value > MAX_PHASE_SECS {
                return Err(Error::DurationTooLong {
                    field,
                    max_secs: MAX_PHASE_SECS,
                });
            }
        }

        Ok(Self {
            cycles_per_long_break,
            work_secs,
            short_break_secs,
            long_break_secs,
        })
    }

    /// Build from durations given in minutes
    pub fn from_minutes(
        cycles_per_long_break: u32,
        work_minutes: u64,
        short_break_minutes: u64,
        long_break_minutes: u64,
    ) -> Result<Self> {
        Self::new(
            cycles_per_long_break,
            minutes_to_secs("work duration", work_minutes)?,
            minutes_to_secs("short break duration", short_break_minutes)?,
            minutes_to_secs("long break duration", long_break_minutes)?,
        )
    }

    pub fn cycles_per_long_break(&self) -> u32 {
        self.cycles_per_long_break
    }

    /// Configured length of `phase` in seconds
    pub fn duration_for(&self, phase: Phase) -> u64 {
        match phase {
            Phase::Work => self.work_secs,
            Phase::ShortBreak => self.short_break_secs,
            Phase::LongBreak => self.long_break_secs,
        }
    }
}

fn minutes_to_secs(field: &'static str, minutes: u64) -> Result<u64> {
    minutes
        .checked_mul(SECONDS_PER_MINUTE)
        .ok_or(Error::DurationTooLong {
            field,
            max_secs: MAX_PHASE_SECS,
        })
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            cycles_per_long_break: DEFAULT_CYCLES,
            work_secs: DEFAULT_WORK_MINUTES * SECONDS_PER_MINUTE,
            short_break_secs: DEFAULT_SHORT_BREAK_MINUTES * SECONDS_PER_MINUTE,
            long_break_secs: DEFAULT_LONG_BREAK_MINUTES * SECONDS_PER_MINUTE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TimerConfig::default();
        assert_eq!(config.cycles_per_long_break(), 4);
        assert_eq!(config.duration_for(Phase::Work), 1500);
        assert_eq!(config.duration_for(Phase::ShortBreak), 300);
        assert_eq!(config.duration_for(Phase::LongBreak), 1800);
    }

    #[test]
    fn test_from_minutes_matches_default() {
        assert_eq!(
            TimerConfig::from_minutes(4, 25, 5, 30).unwrap(),
            TimerConfig::default()
        );
    }

    #[test]
    fn test_rejects_zero_cycles() {
        let err = TimerConfig::new(0, 10, 10, 10).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { field: "cycles" }));
    }

    #[test]
    fn test_rejects_zero_durations() {
        assert!(matches!(
            TimerConfig::new(4, 0, 10, 10),
            Err(Error::InvalidConfig { field: "work duration" })
        ));
        assert!(matches!(
            TimerConfig::new(4, 10, 0, 10),
            Err(Error::InvalidConfig { field: "short break duration" })
        ));
        assert!(matches!(
            TimerConfig::from_minutes(4, 10, 10, 0),
            Err(Error::InvalidConfig { field: "long break duration" })
        ));
    }

    #[test]
    fn test_rejects_durations_past_a_week() {
        assert!(TimerConfig::new(4, MAX_PHASE_SECS, 10, 10).is_ok());
        assert!(matches!(
            TimerConfig::new(4, 10, MAX_PHASE_SECS + 1, 10),
            Err(Error::DurationTooLong {
                field: "short break duration",
                max_secs: MAX_PHASE_SECS,
            })
        ));
        assert!(matches!(
            TimerConfig::new(4, 10, 10, u64::MAX),
            Err(Error::DurationTooLong { field: "long break duration", .. })
        ));
    }

    #[test]
    fn test_minutes_overflow_is_rejected() {
        assert!(matches!(
            TimerConfig::from_minutes(4, 300_000_000_000_000_000, 5, 30),
            Err(Error::DurationTooLong { field: "work duration", .. })
        ));
        assert!(matches!(
            TimerConfig::from_minutes(4, u64::MAX, 5, 30),
            Err(Error::DurationTooLong { field: "work duration", .. })
        ));
        assert!(TimerConfig::from_minutes(4, 7 * 24 * 60, 5, 30).is_ok());
    }
}
