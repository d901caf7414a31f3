//! Durable recall of the last successfully searched city.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    sync::Mutex,
};

use crate::config::project_dirs;

pub trait LastCityStore: Send + Sync {
    fn last_city(&self) -> Option<String>;

    fn set_last_city(&self, city: &str) -> Result<()>;
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StateFile {
    last_city: Option<String>,
}

/// TOML-backed store in the platform data directory. Last write wins.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default location, `<data dir>/state.toml`.
    pub fn open_default() -> Result<Self> {
        let dirs = project_dirs()?;
        Ok(Self::new(dirs.data_dir().join("state.toml")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<StateFile> {
        if !self.path.exists() {
            return Ok(StateFile::default());
        }

        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read state file: {}", self.path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse state file: {}", self.path.display()))
    }
}

impl LastCityStore for FileStore {
    fn last_city(&self) -> Option<String> {
        match self.read() {
            Ok(state) => state.last_city.filter(|c| !c.is_empty()),
            Err(err) => {
                tracing::warn!(error = %format!("{err:#}"), "Ignoring unreadable state file");
                None
            }
        }
    }

    fn set_last_city(&self, city: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create state directory: {}", parent.display())
            })?;
        }

        let state = StateFile {
            last_city: Some(city.to_string()),
        };
        let toml = toml::to_string(&state).context("Failed to serialize state to TOML")?;

        fs::write(&self.path, toml)
            .with_context(|| format!("Failed to write state file: {}", self.path.display()))
    }
}

/// Process-local store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    city: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_city(city: impl Into<String>) -> Self {
        Self {
            city: Mutex::new(Some(city.into())),
        }
    }
}

impl LastCityStore for MemoryStore {
    fn last_city(&self) -> Option<String> {
        self.city.lock().ok().and_then(|c| c.clone())
    }

    fn set_last_city(&self, city: &str) -> Result<()> {
        let mut guard =
            self.city.lock().map_err(|_| anyhow::anyhow!("last city store lock poisoned"))?;
        *guard = Some(city.to_string());
        Ok(())
    }
}
