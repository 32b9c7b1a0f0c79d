//! Generic tier-table evaluator.
//!
//! One function drives every archetype; the differences live in the
//! [`TierTable`] data.
//!
//! # Evaluation
//!
//! 1. Filter affordable abilities and living targets.
//! 2. Fewer affordable abilities than `min_affordable`: base attack on the
//!    fallback target, no draw consumed.
//! 3. Otherwise take the explicit draw or pull one, and walk the tiers whose
//!    threshold lies strictly below it.
//! 4. The first tier yielding an ability wins. A tier without a candidate
//!    either ends the walk ([`MissPolicy::BaseAttack`]) or defers to the next
//!    tier ([`MissPolicy::NextTier`]).
//! 5. No winner: base attack on the fallback target.

use game_core::{
    Ability, AbilityChoice, Combatant, CombatantId, Decision, DrawSource, MissPolicy, Party,
    TargetRule, TierTable, pick_one,
};

use super::filters::{affordable_abilities, living_targets};
use super::targeting;

/// Which branch of the table produced a decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PolicyBranch {
    /// Too few affordable abilities to consult the table.
    ShortCircuit,
    /// The tier at this index matched and supplied the ability.
    Tier(usize),
    /// The draw matched no tier, or the matched tiers had no candidate.
    Fallback,
}

/// A policy decision plus the branch that produced it.
#[derive(Clone, Debug, PartialEq)]
pub struct PolicyChoice {
    pub decision: Decision,
    pub branch: PolicyBranch,
    /// The tier draw, when one was taken.
    pub draw: Option<f64>,
}

/// Picks the ability for one tier, or `None` when nothing affordable fits.
///
/// Capability queries never return the base attack; it is the fallback, not
/// a category member.
fn pick_ability<'a>(
    choice: &AbilityChoice,
    affordable: &[&'a Ability],
    draws: &mut dyn DrawSource,
) -> Option<&'a Ability> {
    match choice {
        AbilityChoice::Named(name) => affordable
            .iter()
            .copied()
            .find(|ability| ability.name == *name),
        AbilityChoice::Query(queries) => queries.iter().find_map(|query| {
            let matches: Vec<&Ability> = affordable
                .iter()
                .copied()
                .filter(|ability| !ability.is_base_attack() && query.matches(ability))
                .collect();
            pick_one(draws, &matches).copied()
        }),
    }
}

fn fallback(
    actor: &Combatant,
    rule: TargetRule,
    targets: &[&Combatant],
    draws: &mut dyn DrawSource,
) -> Decision {
    let target = targeting::resolve(rule, targets, draws);
    Decision::ability(actor.base_attack().clone(), target)
}

/// Evaluates `table` for `actor` against `opponents`.
///
/// `explicit_draw` replaces the tier draw; every other random pick still
/// comes from `draws`.
pub fn evaluate(
    table: &TierTable,
    actor: &Combatant,
    opponents: &Party,
    draws: &mut dyn DrawSource,
    explicit_draw: Option<f64>,
) -> PolicyChoice {
    let affordable = affordable_abilities(actor, table.affordability);
    let targets = living_targets(opponents.iter());

    if affordable.len() < table.min_affordable {
        tracing::debug!(
            "Monster {} has {} affordable abilities (min {}), using base attack",
            actor.id,
            affordable.len(),
            table.min_affordable
        );
        return PolicyChoice {
            decision: fallback(actor, table.fallback_target, &targets, draws),
            branch: PolicyBranch::ShortCircuit,
            draw: None,
        };
    }

    let draw = explicit_draw.unwrap_or_else(|| draws.unit());
    tracing::trace!(actor = %actor.id, draw, "tier draw");

    for (index, tier) in table.matching(draw) {
        tracing::trace!(actor = %actor.id, index, threshold = tier.threshold, "tier matched");
        match pick_ability(&tier.choice, &affordable, draws) {
            Some(ability) => {
                let target: Option<CombatantId> =
                    targeting::resolve(tier.target, &targets, draws);
                tracing::debug!(
                    "Monster {} selected {} (tier {}, draw {:.3}) on {:?}",
                    actor.id,
                    ability.name,
                    index,
                    draw,
                    target
                );
                return PolicyChoice {
                    decision: Decision::ability(ability.clone(), target),
                    branch: PolicyBranch::Tier(index),
                    draw: Some(draw),
                };
            }
            None if table.on_miss == MissPolicy::BaseAttack => break,
            None => continue,
        }
    }

    tracing::debug!(
        "Monster {} fell back to base attack (draw {:.3})",
        actor.id,
        draw
    );
    PolicyChoice {
        decision: fallback(actor, table.fallback_target, &targets, draws),
        branch: PolicyBranch::Fallback,
        draw: Some(draw),
    }
}
