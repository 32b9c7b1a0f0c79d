//! Battle configuration loader.

use std::path::Path;

use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for battle configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a [`GameConfig`] from a TOML file.
    ///
    /// Missing keys keep their defaults.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::RecoverGate;

    #[test]
    fn test_missing_keys_keep_defaults() {
        let config = ConfigLoader::parse("").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_recover_gate_override() {
        let config = ConfigLoader::parse(
            "min_affordable_abilities = 3\nrecover_gate = \"RecoverChance\"\n",
        )
        .unwrap();
        assert_eq!(config.min_affordable_abilities, 3);
        assert_eq!(config.recover_gate, Some(RecoverGate::RecoverChance));
    }
}
