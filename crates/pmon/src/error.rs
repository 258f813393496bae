//! Error types for the timer library

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid configuration: {field} must be greater than zero")]
    InvalidConfig { field: &'static str },

    #[error("Invalid configuration: {field} must be at most {max_secs} seconds")]
    DurationTooLong { field: &'static str, max_secs: u64 },

    #[error("Failed to render progress: {0}")]
    Render(#[from] std::io::Error),
}
