//! Archetype catalog loader.

use std::path::Path;

use anyhow::Context;
use game_core::{Archetype, ArchetypeKind};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Archetype catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchetypeCatalog {
    pub archetypes: Vec<(ArchetypeKind, Archetype)>,
}

/// Loader for archetype definitions from RON files.
pub struct ArchetypeLoader;

impl ArchetypeLoader {
    /// Load and validate an archetype catalog from a RON file.
    ///
    /// Later entries for the same kind replace earlier ones once the result
    /// is collected into a registry.
    pub fn load(path: &Path) -> LoadResult<Vec<(ArchetypeKind, Archetype)>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<(ArchetypeKind, Archetype)>> {
        let catalog: ArchetypeCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse archetype catalog RON: {}", e))?;

        for (kind, archetype) in &catalog.archetypes {
            archetype
                .validate()
                .with_context(|| format!("Invalid archetype '{}'", kind))?;
        }

        Ok(catalog.archetypes)
    }
}
