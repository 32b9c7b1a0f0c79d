//! Data-driven battle content and loaders.
//!
//! This crate houses the static content the decision engine runs on:
//! - Built-in archetype policies (tier tables and item-use profiles)
//! - Ability catalogs (soldier, paladin) and consumable presets
//! - Status templates applied by abilities
//! - Default monster and hero rosters
//! - Loaders for battle configuration (TOML) and archetype overrides (RON)
//!
//! All content is expressed with game-core types; loaders deserialize them
//! directly with serde.

pub mod archetypes;
pub mod catalog;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use archetypes::{ArchetypeRegistry, archetype, profile, table};

#[cfg(feature = "loaders")]
pub use loaders::{ArchetypeCatalog, ArchetypeLoader, ConfigLoader, ContentFactory, LoadResult};
