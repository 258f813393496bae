//! Formatting utilities

use std::fmt;

/// A number of seconds broken into hours, minutes and seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hms {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl fmt::Display for Hms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} hrs {} mins {} secs",
            self.hours, self.minutes, self.seconds
        )
    }
}

/// Split seconds into hours/minutes/seconds
pub fn hms(secs: u64) -> Hms {
    Hms {
        hours: secs / 3600,
        minutes: (secs % 3600) / 60,
        seconds: secs % 60,
    }
}

/// Format seconds as a countdown clock (MM:SS); minutes are not wrapped into hours
pub fn clock(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Format a duration in human-readable form
pub fn duration(secs: u64) -> String {
    if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
    }
}
