//! Durations and per-turn magnitudes of the statuses abilities apply.

use game_core::{StatusEffect, StatusKind};

/// The effect an ability applying `kind` puts on its target.
pub fn effect(kind: StatusKind) -> StatusEffect {
    let (turns, per_turn) = match kind {
        StatusKind::Stunned => (2, 0),
        StatusKind::Frozen => (1, 0),
        StatusKind::Asleep => (2, 0),
        StatusKind::Poisoned => (2, -2),
        StatusKind::Burning => (2, -1),
        StatusKind::Weakened => (2, 0),
        StatusKind::Defending => (1, 0),
        StatusKind::Regenerating => (2, 1),
    };
    StatusEffect::new(kind, turns, per_turn)
}
