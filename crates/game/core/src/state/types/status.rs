//! Status effect system for combatants.
//!
//! Status effects are temporary conditions that suppress turns, deal or
//! restore health every turn, or raise defenses.
//!
//! # Turn-based Duration
//!
//! Effects store `remaining_turns`. Each [`StatusEffects::tick`] consumes one
//! turn from every effect and removes those that run out.

use arrayvec::ArrayVec;

use crate::config::GameConfig;

/// Active status effects on a combatant.
///
/// Status effects include:
/// - Crowd control (Stunned, Frozen, Asleep)
/// - Harmful (Poisoned, Burning, Weakened)
/// - Beneficial (Defending, Regenerating)
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffects {
    effects: ArrayVec<StatusEffect, { GameConfig::MAX_STATUS_EFFECTS }>,
}

/// A single status effect with its remaining duration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffect {
    pub kind: StatusKind,
    /// Turns left before the effect expires.
    pub remaining_turns: u32,
    /// Health change applied on every tick (negative for damage over time).
    pub per_turn: i32,
}

impl StatusEffect {
    pub fn new(kind: StatusKind, remaining_turns: u32, per_turn: i32) -> Self {
        Self {
            kind,
            remaining_turns,
            per_turn,
        }
    }
}

/// Types of status effects.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StatusKind {
    // ========================================================================
    // Crowd Control (suppresses the whole turn)
    // ========================================================================
    Stunned,
    Frozen,
    Asleep,

    // ========================================================================
    // Harmful
    // ========================================================================
    /// Health loss every turn.
    Poisoned,
    /// Fire damage every turn.
    Burning,
    /// Damage output reduced.
    Weakened,

    // ========================================================================
    // Beneficial
    // ========================================================================
    /// Defense bonus.
    Defending,
    /// Health recovery every turn.
    Regenerating,
}

impl StatusKind {
    /// Returns true if this status takes away its holder's turn.
    pub const fn is_crowd_control(self) -> bool {
        matches!(self, Self::Stunned | Self::Frozen | Self::Asleep)
    }
}

/// Summary of one status tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatusTick {
    /// A crowd-control effect was active when the tick started.
    pub crowd_controlled: bool,
    /// Sum of the per-turn health changes of all ticked effects.
    pub health_delta: i32,
    /// Number of effects that ran out and were removed.
    pub expired: usize,
}

impl StatusEffects {
    /// Creates an empty status effect set.
    pub fn empty() -> Self {
        Self {
            effects: ArrayVec::new(),
        }
    }

    /// Checks if a specific status effect is active.
    pub fn has(&self, kind: StatusKind) -> bool {
        self.effects.iter().any(|e| e.kind == kind)
    }

    /// Returns true if any active effect is crowd control.
    pub fn has_crowd_control(&self) -> bool {
        self.effects.iter().any(|e| e.kind.is_crowd_control())
    }

    /// Adds a status effect.
    ///
    /// If the effect already exists, the longer duration wins and the
    /// per-turn magnitude is replaced. Effects beyond capacity are dropped.
    pub fn add(&mut self, effect: StatusEffect) {
        if let Some(existing) = self.effects.iter_mut().find(|e| e.kind == effect.kind) {
            existing.remaining_turns = existing.remaining_turns.max(effect.remaining_turns);
            existing.per_turn = effect.per_turn;
            return;
        }

        if !self.effects.is_full() {
            self.effects.push(effect);
        }
    }

    /// Removes a status effect immediately. Returns false if it was not present.
    pub fn remove(&mut self, kind: StatusKind) -> bool {
        let before = self.effects.len();
        self.effects.retain(|e| e.kind != kind);
        self.effects.len() != before
    }

    /// Advances every effect by one turn.
    ///
    /// Crowd control is sampled before durations are consumed, so a stun with
    /// one turn left still suppresses the turn it expires on.
    pub fn tick(&mut self) -> StatusTick {
        let crowd_controlled = self.has_crowd_control();
        let mut health_delta = 0;

        for effect in self.effects.iter_mut() {
            health_delta += effect.per_turn;
            effect.remaining_turns = effect.remaining_turns.saturating_sub(1);
        }

        let before = self.effects.len();
        self.effects.retain(|e| e.remaining_turns > 0);

        StatusTick {
            crowd_controlled,
            health_delta,
            expired: before - self.effects.len(),
        }
    }

    /// Returns an iterator over all active effects in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &StatusEffect> {
        self.effects.iter()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_reports_crowd_control_before_expiry() {
        let mut statuses = StatusEffects::empty();
        statuses.add(StatusEffect::new(StatusKind::Stunned, 1, 0));

        let tick = statuses.tick();
        assert!(tick.crowd_controlled);
        assert_eq!(tick.expired, 1);
        assert!(statuses.is_empty());
    }

    #[test]
    fn tick_sums_per_turn_health() {
        let mut statuses = StatusEffects::empty();
        statuses.add(StatusEffect::new(StatusKind::Poisoned, 2, -2));
        statuses.add(StatusEffect::new(StatusKind::Regenerating, 3, 1));

        let tick = statuses.tick();
        assert!(!tick.crowd_controlled);
        assert_eq!(tick.health_delta, -1);
        assert_eq!(statuses.len(), 2);
    }

    #[test]
    fn re_adding_keeps_longer_duration() {
        let mut statuses = StatusEffects::empty();
        statuses.add(StatusEffect::new(StatusKind::Burning, 3, -1));
        statuses.add(StatusEffect::new(StatusKind::Burning, 1, -2));

        let burning = statuses.iter().next().unwrap();
        assert_eq!(burning.remaining_turns, 3);
        assert_eq!(burning.per_turn, -2);
        assert_eq!(statuses.len(), 1);
    }

    #[test]
    fn status_names_parse() {
        assert_eq!("poisoned".parse::<StatusKind>(), Ok(StatusKind::Poisoned));
        assert_eq!("Stunned".parse::<StatusKind>(), Ok(StatusKind::Stunned));
        assert!(StatusKind::Asleep.is_crowd_control());
        assert!(!StatusKind::Defending.is_crowd_control());
    }
}
