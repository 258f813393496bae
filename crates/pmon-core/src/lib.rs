//! pmon core - shared functionality for the pmon timer
//!
//! Paths, the on-disk config file and time formatting. Nothing in here
//! knows about phases or countdowns.

pub mod config;
pub mod format;
pub mod paths;

pub use config::Config;
pub use paths::Paths;
