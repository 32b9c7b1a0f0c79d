//! Built-in archetype policies.
//!
//! # Design
//!
//! - **Capability archetypes** (Controller, Defender, Punisher, Weakener)
//!   pick an ability category per tier and fall straight back to the base
//!   attack when the category has no affordable ability.
//! - **Skeleton archetypes** name one ability per tier, compare costs
//!   strictly (`cost < AP`) and keep walking lower tiers when the named
//!   ability is unavailable. They share the Defender item profile.
//!
//! Tables are built from a [`GameConfig`] so the short-circuit size can be
//! tuned without editing content files. The skeleton boss never
//! short-circuits.

use std::collections::BTreeMap;

use game_core::{
    AbilityChoice, Affordability, Archetype, ArchetypeKind, CapabilityQuery, GameConfig,
    HeuristicProfile, MissPolicy, StatKind, Tier, TierTable, TargetRule,
};

use crate::catalog::abilities;

pub const CONTROLLER_PROFILE: HeuristicProfile = HeuristicProfile::preset(0.4, 0.5, 0.6, 0.6, 0.5);
pub const DEFENDER_PROFILE: HeuristicProfile = HeuristicProfile::preset(0.5, 0.75, 0.3, 0.3, 0.5);
pub const PUNISHER_PROFILE: HeuristicProfile = HeuristicProfile::preset(0.3, 0.2, 0.5, 0.5, 0.75);
pub const WEAKENER_PROFILE: HeuristicProfile = HeuristicProfile::preset(0.4, 0.5, 0.5, 0.75, 0.15);

/// Item-use profile spawned monsters of `kind` start with.
pub fn profile(kind: ArchetypeKind) -> HeuristicProfile {
    match kind {
        ArchetypeKind::Controller => CONTROLLER_PROFILE,
        ArchetypeKind::Punisher => PUNISHER_PROFILE,
        ArchetypeKind::Weakener => WEAKENER_PROFILE,
        ArchetypeKind::Defender
        | ArchetypeKind::SkeletonBoss
        | ArchetypeKind::SkeletonArcher
        | ArchetypeKind::SkeletonSpearman
        | ArchetypeKind::SkeletonWarrior => DEFENDER_PROFILE,
    }
}

/// Offensive tier of the Controller and Defender: pure damage first, then
/// damage that applies a status.
fn offensive_then_status() -> AbilityChoice {
    AbilityChoice::Query(vec![
        CapabilityQuery::PURE_OFFENSIVE,
        CapabilityQuery::OFFENSIVE_STATUS,
    ])
}

fn crowd_controlled_or(stat: StatKind, prefer_lowest: bool) -> TargetRule {
    TargetRule::CrowdControlledOr {
        stat,
        prefer_lowest,
    }
}

fn skeleton(tiers: Vec<Tier>, min_affordable: usize) -> TierTable {
    TierTable::new(tiers, min_affordable)
        .with_affordability(Affordability::StrictlyBelow)
        .with_miss_policy(MissPolicy::NextTier)
}

/// Tier table driving monsters of `kind`.
pub fn table(kind: ArchetypeKind, config: &GameConfig) -> TierTable {
    use StatKind::{AbilityPoints, Defense, Health};

    let min = config.min_affordable_abilities;
    match kind {
        ArchetypeKind::Controller => TierTable::new(
            vec![
                Tier::new(0.85, offensive_then_status(), TargetRule::lowest(Health)),
                Tier::new(
                    0.60,
                    AbilityChoice::query(CapabilityQuery::DEFENSIVE),
                    TargetRule::None,
                ),
                Tier::new(
                    0.15,
                    AbilityChoice::query(CapabilityQuery::CROWD_CONTROL),
                    TargetRule::highest(AbilityPoints),
                ),
            ],
            min,
        ),
        ArchetypeKind::Defender => TierTable::new(
            vec![
                Tier::new(0.75, offensive_then_status(), TargetRule::lowest(Health)),
                Tier::new(
                    0.50,
                    AbilityChoice::query(CapabilityQuery::CROWD_CONTROL),
                    TargetRule::highest(AbilityPoints),
                ),
                Tier::new(
                    0.20,
                    AbilityChoice::query(CapabilityQuery::DEFENSIVE),
                    TargetRule::None,
                ),
            ],
            min,
        ),
        ArchetypeKind::Punisher => TierTable::new(
            vec![
                Tier::new(
                    0.90,
                    AbilityChoice::query(CapabilityQuery::DEFENSIVE),
                    TargetRule::None,
                ),
                Tier::new(
                    0.75,
                    AbilityChoice::query(CapabilityQuery::CROWD_CONTROL),
                    TargetRule::highest(Health),
                ),
                Tier::new(
                    0.55,
                    AbilityChoice::query(CapabilityQuery::OFFENSIVE_STATUS),
                    crowd_controlled_or(Defense, false),
                ),
                Tier::new(
                    0.15,
                    AbilityChoice::query(CapabilityQuery::PURE_OFFENSIVE),
                    crowd_controlled_or(Health, true),
                ),
            ],
            min,
        ),
        ArchetypeKind::Weakener => TierTable::new(
            vec![
                Tier::new(
                    0.90,
                    AbilityChoice::query(CapabilityQuery::DEFENSIVE),
                    TargetRule::None,
                ),
                Tier::new(
                    0.75,
                    AbilityChoice::query(CapabilityQuery::PURE_OFFENSIVE),
                    TargetRule::highest(Health),
                ),
                Tier::new(
                    0.55,
                    AbilityChoice::query(CapabilityQuery::CROWD_CONTROL),
                    TargetRule::highest(Health),
                ),
                Tier::new(
                    0.15,
                    AbilityChoice::query(CapabilityQuery::OFFENSIVE_STATUS),
                    TargetRule::highest(Defense),
                ),
            ],
            min,
        )
        .with_fallback_target(TargetRule::highest(Health)),
        ArchetypeKind::SkeletonBoss => skeleton(
            vec![
                Tier::new(
                    0.75,
                    AbilityChoice::named(abilities::SHIELD_BASH),
                    TargetRule::highest(AbilityPoints),
                ),
                Tier::new(
                    0.50,
                    AbilityChoice::named(abilities::DEFEND),
                    TargetRule::None,
                ),
                Tier::new(
                    0.25,
                    AbilityChoice::named(abilities::HAM_STRING),
                    TargetRule::highest(Health),
                ),
            ],
            0,
        ),
        ArchetypeKind::SkeletonArcher => skeleton(
            vec![
                Tier::new(
                    0.75,
                    AbilityChoice::named(abilities::SNIPE),
                    TargetRule::lowest(Health),
                ),
                Tier::new(
                    0.50,
                    AbilityChoice::named(abilities::POISON_SHOT),
                    TargetRule::highest(Defense),
                ),
                Tier::new(
                    0.25,
                    AbilityChoice::named(abilities::MULTI_SHOT),
                    TargetRule::highest(Health),
                ),
            ],
            min,
        ),
        ArchetypeKind::SkeletonSpearman => skeleton(
            vec![
                Tier::new(
                    0.75,
                    AbilityChoice::named(abilities::SHIELD_BASH),
                    TargetRule::highest(Defense),
                ),
                Tier::new(
                    0.30,
                    AbilityChoice::named(abilities::LUNGE),
                    TargetRule::lowest(Health),
                ),
            ],
            min,
        ),
        ArchetypeKind::SkeletonWarrior => skeleton(
            vec![
                Tier::new(
                    0.75,
                    AbilityChoice::named(abilities::SHIELD_BASH),
                    TargetRule::highest(Health),
                ),
                Tier::new(
                    0.40,
                    AbilityChoice::named(abilities::HAM_STRING),
                    TargetRule::lowest(AbilityPoints),
                ),
            ],
            min,
        ),
    }
}

pub fn archetype(kind: ArchetypeKind, config: &GameConfig) -> Archetype {
    Archetype::new(profile(kind), table(kind, config))
}

/// Archetype definitions keyed by kind.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArchetypeRegistry {
    archetypes: BTreeMap<ArchetypeKind, Archetype>,
}

impl ArchetypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every built-in archetype, tuned by `config`.
    pub fn builtin(config: &GameConfig) -> Self {
        use strum::IntoEnumIterator;

        let archetypes = ArchetypeKind::iter()
            .map(|kind| (kind, archetype(kind, config)))
            .collect();
        Self { archetypes }
    }

    /// Adds or replaces an archetype. Returns the previous definition.
    pub fn insert(&mut self, kind: ArchetypeKind, archetype: Archetype) -> Option<Archetype> {
        self.archetypes.insert(kind, archetype)
    }

    pub fn get(&self, kind: ArchetypeKind) -> Option<&Archetype> {
        self.archetypes.get(&kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ArchetypeKind, &Archetype)> {
        self.archetypes.iter().map(|(kind, archetype)| (*kind, archetype))
    }

    pub fn len(&self) -> usize {
        self.archetypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.archetypes.is_empty()
    }
}

impl Extend<(ArchetypeKind, Archetype)> for ArchetypeRegistry {
    fn extend<T: IntoIterator<Item = (ArchetypeKind, Archetype)>>(&mut self, iter: T) {
        self.archetypes.extend(iter);
    }
}

impl FromIterator<(ArchetypeKind, Archetype)> for ArchetypeRegistry {
    fn from_iter<T: IntoIterator<Item = (ArchetypeKind, Archetype)>>(iter: T) -> Self {
        Self {
            archetypes: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tables_are_valid() {
        let registry = ArchetypeRegistry::builtin(&GameConfig::default());
        assert_eq!(registry.len(), 8);
        for (kind, archetype) in registry.iter() {
            assert_eq!(archetype.validate(), Ok(()), "{kind} is malformed");
        }
    }

    #[test]
    fn short_circuit_follows_config() {
        let config = GameConfig {
            min_affordable_abilities: 3,
            ..GameConfig::default()
        };
        assert_eq!(table(ArchetypeKind::Defender, &config).min_affordable, 3);
        assert_eq!(table(ArchetypeKind::SkeletonArcher, &config).min_affordable, 3);
        assert_eq!(table(ArchetypeKind::SkeletonBoss, &config).min_affordable, 0);
    }

    #[test]
    fn skeletons_share_defender_profile() {
        assert_eq!(profile(ArchetypeKind::SkeletonWarrior), DEFENDER_PROFILE);
        assert_eq!(DEFENDER_PROFILE.heal_chance(), 0.75);
        assert_eq!(WEAKENER_PROFILE.recover_chance(), 0.75);
    }
}
