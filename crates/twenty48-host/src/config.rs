use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::warn;
use twenty48_core::best_score::{BestScoreStore, MemoryStore};

use crate::store::SqliteStore;

#[derive(Clone, Debug, PartialEq, serde::Deserialize, Default)]
pub struct Config {
    /// Seed for tile spawns. OS entropy when absent.
    #[serde(default)]
    pub seed: Option<u64>,

    #[serde(default)]
    pub storage: Storage,
    #[serde(default)]
    pub input: Input,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, Default)]
pub struct Storage {
    /// SQLite file holding the best score. Kept in memory only if unset.
    #[serde(default)]
    pub best_score_db: Option<PathBuf>,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct Input {
    /// Minimum swipe length in pixels.
    #[serde(default = "defaults::swipe_threshold_px")]
    pub swipe_threshold_px: f64,
}

impl Default for Input {
    fn default() -> Self {
        Self {
            swipe_threshold_px: defaults::swipe_threshold_px(),
        }
    }
}

impl Config {
    pub fn from_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut file = std::fs::File::open(path)
            .with_context(|| format!("failed to open config {}", path.display()))?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        let cfg: Self = toml::from_str(&contents)
            .with_context(|| format!("invalid config {}", path.display()))?;
        Ok(cfg)
    }

    /// Load `path` if given, otherwise fall back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_toml(p),
            None => Ok(Self::default()),
        }
    }

    /// Open the configured best-score backend.
    ///
    /// A database that cannot be opened is not fatal: the best score is then
    /// kept in memory for this run only.
    pub fn open_store(&self) -> Box<dyn BestScoreStore + Send> {
        let Some(path) = &self.storage.best_score_db else {
            return Box::new(MemoryStore::new());
        };
        match SqliteStore::open(path) {
            Ok(store) => Box::new(store),
            Err(err) => {
                warn!("best score will not be persisted: {err:#}");
                Box::new(MemoryStore::new())
            }
        }
    }
}

mod defaults {
    pub fn swipe_threshold_px() -> f64 { twenty48_core::input::DEFAULT_SWIPE_THRESHOLD }
}
