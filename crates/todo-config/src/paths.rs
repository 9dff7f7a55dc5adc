//! Where todo-lander keeps its files
//!
//! Every file has a local variant next to the working directory and a global
//! one under the XDG config directory (via `dirs`). Local always wins.
//!
//! | File    | Local                        | Global                                  |
//! |---------|------------------------------|-----------------------------------------|
//! | config  | `$CWD/.todo-lander.toml`     | `~/.config/todo-lander/config.toml`     |
//! | session | `$CWD/.todo-lander.session.toml` | `~/.config/todo-lander/session.toml` |
//!
//! The cache directory only holds release-build log files.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

const APP_NAME: &str = "todo-lander";
const LOCAL_CONFIG_FILE: &str = ".todo-lander.toml";
const LOCAL_SESSION_FILE: &str = ".todo-lander.session.toml";
const GLOBAL_CONFIG_FILE: &str = "config.toml";
const GLOBAL_SESSION_FILE: &str = "session.toml";

/// Resolved local and global file locations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locations {
    pub local_dir: PathBuf,
    /// None when the platform has no config directory
    pub global_dir: Option<PathBuf>,
}

impl Locations {
    /// Locations for the current working directory and the user's config dir
    pub fn discover() -> Self {
        let local_dir = std::env::current_dir().unwrap_or_else(|e| {
            log::warn!("Cannot read working directory, using '.': {}", e);
            PathBuf::from(".")
        });
        let global_dir = dirs::config_dir().map(|base| base.join(APP_NAME));
        if global_dir.is_none() {
            log::warn!("Could not determine config directory");
        }

        Self::new(local_dir, global_dir)
    }

    pub fn new(local_dir: impl Into<PathBuf>, global_dir: Option<PathBuf>) -> Self {
        Self {
            local_dir: local_dir.into(),
            global_dir,
        }
    }

    /// Config files to try, highest priority first
    pub fn config_candidates(&self) -> Vec<PathBuf> {
        self.candidates(LOCAL_CONFIG_FILE, GLOBAL_CONFIG_FILE)
    }

    /// Session files to try, highest priority first
    pub fn session_candidates(&self) -> Vec<PathBuf> {
        self.candidates(LOCAL_SESSION_FILE, GLOBAL_SESSION_FILE)
    }

    /// Where a session is written: the local file if it exists, else global
    pub fn session_save_path(&self) -> Result<PathBuf> {
        let local = self.local_dir.join(LOCAL_SESSION_FILE);
        if local.exists() {
            return Ok(local);
        }
        self.global_dir
            .as_deref()
            .map(|dir| dir.join(GLOBAL_SESSION_FILE))
            .context("No local session file and no config directory to save to")
    }

    fn candidates(&self, local: &str, global: &str) -> Vec<PathBuf> {
        std::iter::once(self.local_dir.join(local))
            .chain(self.global_dir.as_deref().map(|dir: &Path| dir.join(global)))
            .collect()
    }
}

/// Get the application cache directory, creating it if needed
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidates_local_first() {
        let locations = Locations::new("/work", Some(PathBuf::from("/home/me/.config/todo-lander")));

        assert_eq!(
            locations.config_candidates(),
            vec![
                PathBuf::from("/work/.todo-lander.toml"),
                PathBuf::from("/home/me/.config/todo-lander/config.toml"),
            ]
        );
        assert_eq!(
            locations.session_candidates(),
            vec![
                PathBuf::from("/work/.todo-lander.session.toml"),
                PathBuf::from("/home/me/.config/todo-lander/session.toml"),
            ]
        );
    }

    #[test]
    fn test_candidates_without_config_dir() {
        let locations = Locations::new("/work", None);
        assert_eq!(
            locations.config_candidates(),
            vec![PathBuf::from("/work/.todo-lander.toml")]
        );
    }

    #[test]
    fn test_session_save_path_prefers_existing_local() {
        let local = tempfile::tempdir().unwrap();
        let global = tempfile::tempdir().unwrap();
        let locations = Locations::new(local.path(), Some(global.path().to_path_buf()));

        assert_eq!(
            locations.session_save_path().unwrap(),
            global.path().join(GLOBAL_SESSION_FILE)
        );

        std::fs::write(local.path().join(LOCAL_SESSION_FILE), "").unwrap();
        assert_eq!(
            locations.session_save_path().unwrap(),
            local.path().join(LOCAL_SESSION_FILE)
        );
    }

    #[test]
    fn test_session_save_path_needs_somewhere_to_go() {
        let local = tempfile::tempdir().unwrap();
        let locations = Locations::new(local.path(), None);
        assert!(locations.session_save_path().is_err());
    }
}
