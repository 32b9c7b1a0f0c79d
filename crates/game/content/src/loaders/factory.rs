//! Content factory for assembling battle content from a data directory.

use std::path::{Path, PathBuf};

use game_core::GameConfig;

use crate::archetypes::ArchetypeRegistry;
use crate::loaders::{ArchetypeLoader, ConfigLoader, LoadResult};

/// Content factory that loads battle content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── archetypes.ron
/// ```
///
/// Both files are optional: a missing `config.toml` yields the default
/// configuration, a missing `archetypes.ron` leaves the built-in archetypes
/// untouched.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load battle configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            return Ok(GameConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Built-in archetypes tuned by `config`, overridden by `archetypes.ron`.
    pub fn load_archetypes(&self, config: &GameConfig) -> LoadResult<ArchetypeRegistry> {
        let mut registry = ArchetypeRegistry::builtin(config);
        let path = self.data_dir.join("archetypes.ron");
        if path.exists() {
            registry.extend(ArchetypeLoader::load(&path)?);
        }
        Ok(registry)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
