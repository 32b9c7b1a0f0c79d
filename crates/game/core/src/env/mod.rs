//! Collaborators the decision layer consumes but does not implement.
//!
//! Randomness comes from a [`DrawSource`]; per-turn status ticking comes from
//! a [`StatusResolver`]. Both are traits so tests can script them.
mod rng;

pub use rng::{DrawSource, PcgRng, ScriptedDraws, compute_seed, pick_one};

use crate::state::Combatant;

/// Resolves a combatant's statuses at the start of its turn.
pub trait StatusResolver {
    /// Ticks statuses exactly once and reports whether the turn is suppressed.
    fn resolve(&mut self, combatant: &mut Combatant) -> bool;
}

impl<R: StatusResolver + ?Sized> StatusResolver for &mut R {
    fn resolve(&mut self, combatant: &mut Combatant) -> bool {
        (**self).resolve(combatant)
    }
}
