//! Item decision layer.
//!
//! Three gated checks run in order before the tier policy: heal, cure,
//! recover. Each check draws only once its precondition holds, and the first
//! one that finds an item ends the turn.

use game_core::{
    DrawSource, Inventory, Item, ItemKind, ResourceMeter, StatusEffects, pick_one,
};

use super::context::AiContext;

/// Which check produced an item decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum ItemCheck {
    Heal,
    Cure,
    Recover,
}

/// The item chosen by the item layer, to be consumed on the actor.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemUse {
    pub check: ItemCheck,
    pub item: Item,
}

/// Strongest item of `kind`. Strength 0 never qualifies; ties keep the
/// earlier slot.
pub fn strongest(inventory: &Inventory, kind: ItemKind) -> Option<&Item> {
    let mut best: Option<&Item> = None;
    let mut best_strength = 0;
    for item in inventory.of_kind(kind) {
        if item.strength > best_strength {
            best_strength = item.strength;
            best = Some(item);
        }
    }
    best
}

/// Every held cure for a status the actor currently has, in slot order.
pub fn matching_cures<'a>(inventory: &'a Inventory, statuses: &StatusEffects) -> Vec<&'a Item> {
    inventory
        .items()
        .filter(|item| item.cures().is_some_and(|status| statuses.has(status)))
        .collect()
}

/// Range precondition shared by the heal and recover checks.
fn in_range(meter: &ResourceMeter, range: f64) -> bool {
    if meter.is_full() {
        return false;
    }
    meter.fraction().is_some_and(|fraction| fraction <= range)
}

fn heal(ctx: &AiContext<'_>, draws: &mut dyn DrawSource) -> Option<Item> {
    let profile = ctx.heuristics();
    if !in_range(&ctx.actor.stats.health, profile.heal_range()) {
        return None;
    }
    if draws.unit() >= profile.heal_chance() {
        return None;
    }
    strongest(ctx.inventory, ItemKind::Health).cloned()
}

fn cure(ctx: &AiContext<'_>, draws: &mut dyn DrawSource) -> Option<Item> {
    if ctx.actor.statuses.is_empty() {
        return None;
    }
    if draws.unit() >= ctx.heuristics().cure_chance() {
        return None;
    }
    let cures = matching_cures(ctx.inventory, &ctx.actor.statuses);
    pick_one(draws, &cures).map(|item| (*item).clone())
}

fn recover(ctx: &AiContext<'_>, draws: &mut dyn DrawSource) -> Option<Item> {
    let profile = ctx.heuristics();
    if !in_range(&ctx.actor.stats.ability_points, profile.recover_range()) {
        return None;
    }
    let chance = profile.recover_gate_chance(ctx.recover_gate());
    if draws.unit() >= chance {
        return None;
    }
    strongest(ctx.inventory, ItemKind::AbilityPoint).cloned()
}

/// Runs the heal, cure and recover checks in order.
///
/// Returns `None` when no check fired, handing the turn to the tier policy.
pub fn choose_item(ctx: &AiContext<'_>, draws: &mut dyn DrawSource) -> Option<ItemUse> {
    let checks: [(ItemCheck, fn(&AiContext<'_>, &mut dyn DrawSource) -> Option<Item>); 3] = [
        (ItemCheck::Heal, heal),
        (ItemCheck::Cure, cure),
        (ItemCheck::Recover, recover),
    ];

    for (check, run) in checks {
        if let Some(item) = run(ctx, draws) {
            tracing::debug!(
                "Monster {} uses {} ({} check)",
                ctx.actor.id,
                item.name,
                check
            );
            return Some(ItemUse { check, item });
        }
    }
    None
}
