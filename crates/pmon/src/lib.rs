//! pmon - Pomodoro interval timer
//!
//! Cycles through work sessions, short breaks and long breaks:
//! - `phase`: the fixed work → short/long break rotation
//! - `engine`: deadline-based countdown with pause support
//! - `summary`: lifetime work/break totals, valid mid-phase
//! - `render`: terminal line or self-overwriting log file
//! - `signals`: termination and pause toggle sources

pub mod engine;
pub mod error;
pub mod pause;
pub mod phase;
pub mod render;
pub mod settings;
pub mod signals;
pub mod state;
pub mod summary;

pub use engine::Engine;
pub use error::{Error, Result};
pub use pause::PauseFlag;
pub use phase::{next_phase, Phase};
pub use render::{LogFileRenderer, Progress, Render, TerminalRenderer};
pub use settings::TimerConfig;
pub use state::RunState;
pub use summary::Summary;
