//! Blob store and trail locations.

use serde::{Deserialize, Serialize};

fn default_db_path() -> String {
    ".civic/portal.db".to_string()
}

fn default_trail_dir() -> String {
    ".civic/trail".to_string()
}

const fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// libSQL database file, relative to the project root. `:memory:` is allowed.
    #[serde(default = "default_db_path")]
    pub db_path: String,

    /// Directory for JSONL trail files, relative to the project root.
    #[serde(default = "default_trail_dir")]
    pub trail_dir: String,

    /// Whether mutations are appended to the JSONL trail.
    #[serde(default = "default_true")]
    pub trail_enabled: bool,
}

impl StorageConfig {
    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        self.db_path == ":memory:"
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            trail_dir: default_trail_dir(),
            trail_enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_into_dot_civic() {
        let config = StorageConfig::default();
        assert_eq!(config.db_path, ".civic/portal.db");
        assert_eq!(config.trail_dir, ".civic/trail");
        assert!(config.trail_enabled);
        assert!(!config.is_in_memory());
    }
}
