//! Standard paths used by pmon

use std::path::PathBuf;

/// Standard pmon paths
pub struct Paths {
    /// Config directory (~/.config/pmon)
    pub config: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Self::new()
    }
}

impl Paths {
    pub fn new() -> Self {
        let config = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("pmon");

        Self { config }
    }

    /// Get the default config file path
    pub fn config_file(&self) -> PathBuf {
        self.config.join("config.json")
    }
}
