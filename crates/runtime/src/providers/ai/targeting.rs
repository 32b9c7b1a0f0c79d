//! Target selector.
//!
//! Stateless functions choosing one combatant from a candidate list. All
//! random picks go through [`pick_one`], the single "one of N" primitive.
//!
//! # Design
//!
//! - **by_extreme_stat**: stable linear scan; ties keep the first candidate.
//!   Defeated candidates are skipped even when the caller already filtered.
//! - **any_crowd_controlled / any_not_crowd_controlled**: random pick among
//!   candidates with (or without) an active crowd-control status.
//! - **resolve**: applies a tier's [`TargetRule`].

use game_core::{Combatant, CombatantId, DrawSource, StatKind, TargetRule, pick_one};

/// Living candidate with the lowest (or highest) `stat`.
pub fn by_extreme_stat<'a>(
    candidates: &[&'a Combatant],
    stat: StatKind,
    prefer_lowest: bool,
) -> Option<&'a Combatant> {
    let mut best: Option<(&'a Combatant, i64)> = None;
    for &candidate in candidates {
        if candidate.is_defeated() {
            continue;
        }
        let value = candidate.stat(stat);
        let better = match best {
            None => true,
            Some((_, current)) if prefer_lowest => value < current,
            Some((_, current)) => value > current,
        };
        if better {
            best = Some((candidate, value));
        }
    }
    best.map(|(combatant, _)| combatant)
}

/// Random candidate holding at least one crowd-control status.
pub fn any_crowd_controlled<'a>(
    candidates: &[&'a Combatant],
    draws: &mut dyn DrawSource,
) -> Option<&'a Combatant> {
    let controlled: Vec<&Combatant> = candidates
        .iter()
        .copied()
        .filter(|c| c.is_crowd_controlled())
        .collect();
    pick_one(draws, &controlled).copied()
}

/// Random candidate free of crowd control.
pub fn any_not_crowd_controlled<'a>(
    candidates: &[&'a Combatant],
    draws: &mut dyn DrawSource,
) -> Option<&'a Combatant> {
    let free: Vec<&Combatant> = candidates
        .iter()
        .copied()
        .filter(|c| !c.is_crowd_controlled())
        .collect();
    pick_one(draws, &free).copied()
}

pub fn uniform_random<'a>(
    candidates: &[&'a Combatant],
    draws: &mut dyn DrawSource,
) -> Option<&'a Combatant> {
    pick_one(draws, candidates).copied()
}

/// Applies `rule` to the living candidates. `None` means no target.
pub fn resolve(
    rule: TargetRule,
    candidates: &[&Combatant],
    draws: &mut dyn DrawSource,
) -> Option<CombatantId> {
    let target = match rule {
        TargetRule::None => None,
        TargetRule::Extreme {
            stat,
            prefer_lowest,
        } => by_extreme_stat(candidates, stat, prefer_lowest),
        TargetRule::CrowdControlledOr {
            stat,
            prefer_lowest,
        } => any_crowd_controlled(candidates, draws)
            .or_else(|| by_extreme_stat(candidates, stat, prefer_lowest)),
        TargetRule::NotCrowdControlledOr {
            stat,
            prefer_lowest,
        } => any_not_crowd_controlled(candidates, draws)
            .or_else(|| by_extreme_stat(candidates, stat, prefer_lowest)),
        TargetRule::Random => uniform_random(candidates, draws),
    };
    let target = target.map(|combatant| combatant.id);
    tracing::trace!(?rule, candidates = candidates.len(), ?target, "target scan");
    target
}
