use crate::state::RecoverGate;

/// Battle configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Affordable-ability count below which capability archetypes skip the
    /// tier draw and use their base attack. Tables built from presets read
    /// this value; tables loaded from content carry their own.
    pub min_affordable_abilities: usize,

    /// Forces every monster's AP-recovery item check to use the given gate,
    /// regardless of what its heuristic profile says.
    pub recover_gate: Option<RecoverGate>,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    pub const MAX_ABILITIES: usize = 16;
    pub const MAX_STATUS_EFFECTS: usize = 8;
    pub const MAX_INVENTORY_SLOTS: usize = 16;
    /// Maximum number of combatants on one side of a battle.
    pub const MAX_PARTY_SIZE: usize = 8;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MIN_AFFORDABLE_ABILITIES: usize = 2;

    pub fn new() -> Self {
        Self {
            min_affordable_abilities: Self::DEFAULT_MIN_AFFORDABLE_ABILITIES,
            recover_gate: None,
        }
    }

    pub fn with_recover_gate(mut self, gate: RecoverGate) -> Self {
        self.recover_gate = Some(gate);
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
