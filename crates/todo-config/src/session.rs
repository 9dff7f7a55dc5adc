//! Session state persistence
//!
//! Keeps the todo list between runs.
//!
//! # Precedence
//!
//! 1. `$CWD/.todo-lander.session.toml` - Local session (highest priority)
//! 2. `~/.config/todo-lander/session.toml` - Global session (fallback)
//!
//! On save: Use local file if it exists, otherwise use global.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::paths::Locations;

const SESSION_VERSION: u32 = 1;

/// Session metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionMeta {
    pub last_modified: DateTime<Utc>,
    pub version: u32,
}

/// Session data - the actual persisted state
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SessionData {
    #[serde(default)]
    pub todos: Vec<String>,
}

/// Complete session with metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub meta: SessionMeta,
    #[serde(default)]
    pub session: SessionData,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            meta: SessionMeta {
                last_modified: Utc::now(),
                version: SESSION_VERSION,
            },
            session: SessionData::default(),
        }
    }
}

impl Session {
    /// Load session with precedence: local > global > default
    pub fn load() -> Self {
        Self::load_from(&Locations::discover())
    }

    /// Load the first readable session file in `locations`
    ///
    /// An unreadable or corrupt file is logged and the next one is tried.
    pub fn load_from(locations: &Locations) -> Self {
        for path in locations.session_candidates() {
            if !path.exists() {
                continue;
            }
            match Self::load_from_path(&path) {
                Ok(session) => {
                    log::info!("Loaded session from {:?}", path);
                    return session;
                }
                Err(e) => log::warn!("Ignoring session: {:#}", e),
            }
        }

        log::info!("No existing session found, using defaults");
        Self::default()
    }

    /// Load session from specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read session file: {:?}", path))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse session file: {:?}", path))
    }

    /// Save session (to local if exists, otherwise global)
    pub fn save(&mut self) -> Result<()> {
        self.save_to(&Locations::discover())
    }

    pub fn save_to(&mut self, locations: &Locations) -> Result<()> {
        let path = locations.session_save_path()?;
        self.save_to_path(&path)
    }

    /// Save session to specific path
    pub fn save_to_path(&mut self, path: &Path) -> Result<()> {
        self.meta.last_modified = Utc::now();
        let content = toml::to_string_pretty(self).context("Failed to serialize session")?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, content)
            .with_context(|| format!("Failed to write session file: {:?}", path))?;

        log::info!("Saved session to {:?}", path);
        Ok(())
    }

    /// Replace the stored todo texts
    pub fn set_todos<I, T>(&mut self, todos: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.session.todos = todos.into_iter().map(Into::into).collect();
    }

    /// Stored todo texts, oldest first
    pub fn todos(&self) -> &[String] {
        &self.session.todos
    }
}
