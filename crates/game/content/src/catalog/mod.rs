//! Static battle content: abilities, consumables, status templates and
//! default rosters.
pub mod abilities;
pub mod items;
pub mod party;
pub mod statuses;

pub use party::{
    StatBlock, default_hero_party, default_monster_party, default_monster_side, monster,
};
