//! Configuration file for pmon
//!
//! Every field is optional; anything left out falls back to the classic
//! pomodoro rotation (4 cycles of 25/5 with a 30 minute long break).

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Work sessions before a long break
pub const DEFAULT_CYCLES: u32 = 4;
pub const DEFAULT_WORK_MINUTES: u64 = 25;
pub const DEFAULT_SHORT_BREAK_MINUTES: u64 = 5;
pub const DEFAULT_LONG_BREAK_MINUTES: u64 = 30;

/// pmon configuration as read from disk
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Number of work sessions before a long break
    #[serde(default = "default_cycles")]
    pub cycles: u32,

    /// Minutes per work session
    #[serde(default = "default_work_minutes")]
    pub work_minutes: u64,

    /// Minutes per short break
    #[serde(default = "default_short_break_minutes")]
    pub short_break_minutes: u64,

    /// Minutes per long break
    #[serde(default = "default_long_break_minutes")]
    pub long_break_minutes: u64,

    /// Write progress to this file instead of the terminal
    #[serde(default)]
    pub output: Option<PathBuf>,
}

fn default_cycles() -> u32 {
    DEFAULT_CYCLES
}

fn default_work_minutes() -> u64 {
    DEFAULT_WORK_MINUTES
}

fn default_short_break_minutes() -> u64 {
    DEFAULT_SHORT_BREAK_MINUTES
}

fn default_long_break_minutes() -> u64 {
    DEFAULT_LONG_BREAK_MINUTES
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cycles: DEFAULT_CYCLES,
            work_minutes: DEFAULT_WORK_MINUTES,
            short_break_minutes: DEFAULT_SHORT_BREAK_MINUTES,
            long_break_minutes: DEFAULT_LONG_BREAK_MINUTES,
            output: None,
        }
    }
}

impl Config {
    /// Load config from file, or the defaults if it does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config JSON: {}", path.display()))
    }
}
