//! Read-only view of the battle from one monster's perspective.

use game_core::{
    BattleState, Combatant, CombatantId, GameConfig, HeuristicProfile, Inventory, Party,
    RecoverGate,
};

use crate::api::{Result, RuntimeError};

/// Everything the item layer and the policy evaluator read for one turn.
///
/// Borrowed from [`BattleState`] after statuses have been resolved; nothing
/// here is mutable.
#[derive(Clone, Copy, Debug)]
pub struct AiContext<'a> {
    pub actor: &'a Combatant,
    /// The actor's own side inventory.
    pub inventory: &'a Inventory,
    /// The opposing party the policy scans for targets.
    pub opponents: &'a Party,
    pub config: &'a GameConfig,
    /// Item-use profile in effect: the actor's own, else its archetype's.
    pub profile: &'a HeuristicProfile,
}

impl<'a> AiContext<'a> {
    pub fn new(
        state: &'a BattleState,
        actor: CombatantId,
        config: &'a GameConfig,
        archetype_profile: &'a HeuristicProfile,
    ) -> Result<Self> {
        let (own, opposing) = state
            .sides_of(actor)
            .ok_or(RuntimeError::UnknownActor(actor))?;
        let combatant = own
            .party
            .get(actor)
            .ok_or(RuntimeError::UnknownActor(actor))?;
        Ok(Self {
            actor: combatant,
            inventory: &own.inventory,
            opponents: &opposing.party,
            config,
            profile: combatant.heuristics.as_ref().unwrap_or(archetype_profile),
        })
    }

    pub fn heuristics(&self) -> &HeuristicProfile {
        self.profile
    }

    /// Gate used by the AP-recovery check: the global override if set,
    /// otherwise the profile in effect.
    pub fn recover_gate(&self) -> RecoverGate {
        self.config
            .recover_gate
            .unwrap_or_else(|| self.profile.recover_gate())
    }
}
