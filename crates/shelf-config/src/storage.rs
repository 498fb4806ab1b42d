//! Session storage location.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory holding the persisted session keys. Empty means
    /// `~/.shelf/session`.
    #[serde(default)]
    pub session_dir: String,
}

impl StorageConfig {
    /// Resolve the session directory, falling back to the home directory.
    ///
    /// Returns `None` only when no directory is configured and the home
    /// directory cannot be determined.
    #[must_use]
    pub fn resolved_session_dir(&self) -> Option<PathBuf> {
        if !self.session_dir.trim().is_empty() {
            return Some(PathBuf::from(&self.session_dir));
        }
        dirs::home_dir().map(|home| home.join(".shelf").join("session"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_dir_wins() {
        let config = StorageConfig {
            session_dir: "/tmp/shelf-session".into(),
        };
        assert_eq!(
            config.resolved_session_dir(),
            Some(PathBuf::from("/tmp/shelf-session"))
        );
    }

    #[test]
    fn default_dir_is_under_home() {
        let config = StorageConfig::default();
        if let Some(path) = config.resolved_session_dir() {
            assert!(path.ends_with(".shelf/session"));
        }
    }
}
