use game_content::catalog::{abilities, default_hero_party, default_monster_side, items};
use game_core::{
    BattleState, CombatantId, Decision, GameConfig, Inventory, RecoverGate, ScriptedDraws, Side,
    StatusKind,
};
use runtime::{
    ArchetypeAiProvider, DecisionSource, ItemCheck, PolicyBranch, TurnOrchestrator, TurnOutcome,
};

const BOSS: CombatantId = CombatantId(1);
const SPEARMAN: CombatantId = CombatantId(2);
const ARCHER: CombatantId = CombatantId(3);
const WARRIOR: CombatantId = CombatantId(4);
const PALADIN: CombatantId = CombatantId(101);
const SOLDIER: CombatantId = CombatantId(102);

/// Default skeleton side against a full-health paladin (10 HP, 6 AP, def 3)
/// and soldier (9 HP, 5 AP, def 2).
fn battle() -> BattleState {
    BattleState::new(
        default_monster_side().unwrap(),
        Side::new(default_hero_party().unwrap(), Inventory::empty()),
    ).unwrap()
    .with_seed(0xD0_5E)
}

fn decide_with(
    config: GameConfig,
    state: &BattleState,
    actor: CombatantId,
    draws: &[f64],
    explicit: Option<f64>,
) -> runtime::AiDecision {
    ArchetypeAiProvider::builtin(config)
        .decide(state, actor, &mut ScriptedDraws::new(draws.iter().copied()), explicit)
        .unwrap()
}

fn decide(state: &BattleState, actor: CombatantId, explicit: f64) -> runtime::AiDecision {
    decide_with(GameConfig::default(), state, actor, &[], Some(explicit))
}

#[test]
fn boss_top_draw_bashes_the_highest_ap_hero() {
    let decided = decide(&battle(), BOSS, 1.0);
    assert_eq!(decided.source, DecisionSource::Policy(PolicyBranch::Tier(0)));
    assert_eq!(
        decided.decision,
        Decision::ability(abilities::shield_bash(), Some(PALADIN))
    );
}

#[test]
fn boss_low_draw_hamstrings_the_healthiest_hero() {
    let decided = decide(&battle(), BOSS, 0.26);
    assert_eq!(
        decided.decision,
        Decision::ability(abilities::ham_string(), Some(PALADIN))
    );
    let decided = decide(&battle(), BOSS, 0.25);
    assert_eq!(decided.source, DecisionSource::Policy(PolicyBranch::Fallback));
}

#[test]
fn boss_without_ap_walks_every_tier_then_attacks() {
    let mut state = battle();
    state
        .combatant_mut(BOSS)
        .unwrap()
        .stats
        .ability_points
        .set(0);

    // 0.9 fails the AP-recovery gate (heal chance 0.75)
    let decided = decide_with(GameConfig::default(), &state, BOSS, &[0.9], Some(0.51));
    assert_eq!(decided.source, DecisionSource::Policy(PolicyBranch::Fallback));
    let boss = state.combatant(BOSS).unwrap();
    assert_eq!(
        decided.decision,
        Decision::ability(boss.base_attack().clone(), Some(SOLDIER))
    );
}

#[test]
fn boss_drinks_a_potion_when_low() {
    let mut state = battle();
    state.combatant_mut(BOSS).unwrap().stats.health.set(2);

    let mut orchestrator = TurnOrchestrator::builtin(GameConfig::default());
    let outcome = orchestrator
        .take_turn(&mut state, BOSS, &mut ScriptedDraws::new([0.1]), Some(1.0))
        .unwrap();

    match outcome {
        TurnOutcome::Acted {
            decision,
            source,
            result,
        } => {
            assert_eq!(source, DecisionSource::Item(ItemCheck::Heal));
            assert_eq!(decision, Decision::item(items::health_potion()));
            assert_eq!(result, Ok(()));
        }
        other => panic!("expected an item, got {other:?}"),
    }
    assert_eq!(state.combatant(BOSS).unwrap().health(), 4);
    assert_eq!(
        state
            .ai
            .inventory
            .get(items::HEALTH_POTION)
            .unwrap()
            .quantity,
        1
    );
}

#[test]
fn recover_gate_can_be_switched_to_recover_chance() {
    let mut state = battle();
    state
        .combatant_mut(BOSS)
        .unwrap()
        .stats
        .ability_points
        .set(1);

    // Defender profile: heal chance 0.75, recover chance 0.30
    let observed = decide_with(GameConfig::default(), &state, BOSS, &[0.5], Some(1.0));
    assert_eq!(observed.source, DecisionSource::Item(ItemCheck::Recover));
    assert_eq!(observed.decision, Decision::item(items::ability_tonic()));

    let intended = GameConfig::default().with_recover_gate(RecoverGate::RecoverChance);
    let decided = decide_with(intended, &state, BOSS, &[0.5], Some(1.0));
    // only Defend is strictly below 1 AP
    assert_eq!(decided.source, DecisionSource::Policy(PolicyBranch::Tier(1)));
    assert_eq!(
        decided.decision,
        Decision::ability(abilities::defend(abilities::DEFEND_STRENGTH), None)
    );
}

#[test]
fn soldiers_follow_their_named_tiers() {
    let state = battle();

    let spearman = decide(&state, SPEARMAN, 0.8);
    assert_eq!(
        spearman.decision,
        Decision::ability(abilities::shield_bash(), Some(PALADIN))
    );

    let archer = decide(&state, ARCHER, 0.6);
    assert_eq!(
        archer.decision,
        Decision::ability(abilities::poison_shot(), Some(PALADIN))
    );

    let warrior = decide(&state, WARRIOR, 0.5);
    assert_eq!(
        warrior.decision,
        Decision::ability(abilities::ham_string(), Some(SOLDIER))
    );
}

#[test]
fn archer_short_circuits_when_only_exact_costs_remain() {
    let mut state = battle();
    state
        .combatant_mut(ARCHER)
        .unwrap()
        .stats
        .ability_points
        .set(3);
    let decided = decide(&state, ARCHER, 0.99);
    assert_eq!(decided.source, DecisionSource::Policy(PolicyBranch::ShortCircuit));
}

#[test]
fn bash_lands_through_the_standard_executor() {
    let mut state = battle();
    let mut orchestrator = TurnOrchestrator::builtin(GameConfig::default());
    let outcome = orchestrator
        .take_turn(&mut state, BOSS, &mut ScriptedDraws::new([]), Some(1.0))
        .unwrap();
    assert!(matches!(outcome, TurnOutcome::Acted { result: Ok(()), .. }));

    let paladin = state.combatant(PALADIN).unwrap();
    assert_eq!(paladin.health(), 9);
    assert!(paladin.statuses.has(StatusKind::Stunned));
    assert_eq!(state.combatant(BOSS).unwrap().ability_points(), 2);
}

#[test]
fn rounds_replay_from_the_battle_seed() {
    let play = || {
        let mut state = battle();
        let mut orchestrator = TurnOrchestrator::builtin(GameConfig::default());
        let outcomes: Vec<_> = (0..3)
            .map(|_| orchestrator.take_round(&mut state).unwrap())
            .collect();
        (state, outcomes)
    };

    let (first_state, first) = play();
    let (second_state, second) = play();
    assert_eq!(first, second);
    assert_eq!(first_state, second_state);
    assert_eq!(first_state.round, 3);
}
