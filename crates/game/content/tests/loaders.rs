use std::fs;

use game_content::{ArchetypeLoader, ArchetypeRegistry, ContentFactory};
use game_core::{
    AbilityChoice, ArchetypeKind, CapabilityQuery, GameConfig, MissPolicy, RecoverGate, StatKind,
    TargetRule,
};
use tempfile::TempDir;

const DEFENDER_OVERRIDE: &str = r#"(
    archetypes: [
        (Defender, (
            profile: (
                heal_range: 0.6,
                heal_chance: 1.0,
                recover_range: 0.3,
                recover_chance: 0.4,
                cure_chance: 0.5,
                recover_gate: RecoverChance,
            ),
            table: (
                tiers: [
                    (
                        threshold: 0.5,
                        choice: Query([(require: "OFFENSIVE", exclude: "STATUS_EFFECT")]),
                        target: Extreme(stat: Health, prefer_lowest: true),
                    ),
                    (
                        threshold: 0.2,
                        choice: Named("Defend"),
                        target: None,
                    ),
                ],
                min_affordable: 2,
                on_miss: NextTier,
                fallback_target: Extreme(stat: Health, prefer_lowest: false),
            ),
        )),
    ],
)"#;

#[test]
fn archetype_catalog_parses_and_validates() {
    let archetypes = ArchetypeLoader::parse(DEFENDER_OVERRIDE).unwrap();
    assert_eq!(archetypes.len(), 1);

    let (kind, archetype) = &archetypes[0];
    assert_eq!(*kind, ArchetypeKind::Defender);
    assert_eq!(archetype.profile.heal_chance(), 1.0);
    assert_eq!(archetype.profile.recover_gate(), RecoverGate::RecoverChance);
    assert_eq!(archetype.table.on_miss, MissPolicy::NextTier);
    assert_eq!(
        archetype.table.tiers[0].choice,
        AbilityChoice::Query(vec![CapabilityQuery::PURE_OFFENSIVE])
    );
    assert_eq!(
        archetype.table.fallback_target,
        TargetRule::highest(StatKind::Health)
    );
}

#[test]
fn out_of_range_profile_is_rejected() {
    let broken = DEFENDER_OVERRIDE.replace("heal_chance: 1.0", "heal_chance: 1.5");
    let err = ArchetypeLoader::parse(&broken).unwrap_err();
    assert!(err.to_string().contains("Invalid archetype"));
}

#[test]
fn ascending_thresholds_are_rejected() {
    let broken = DEFENDER_OVERRIDE.replace("threshold: 0.2", "threshold: 0.7");
    assert!(ArchetypeLoader::parse(&broken).is_err());
}

#[test]
fn factory_overlays_file_on_builtins() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("archetypes.ron"), DEFENDER_OVERRIDE).unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "min_affordable_abilities = 3\n",
    )
    .unwrap();

    let factory = ContentFactory::new(dir.path());
    let config = factory.load_config().unwrap();
    assert_eq!(config.min_affordable_abilities, 3);

    let registry = factory.load_archetypes(&config).unwrap();
    let builtin = ArchetypeRegistry::builtin(&config);
    assert_eq!(registry.len(), builtin.len());

    let defender = registry.get(ArchetypeKind::Defender).unwrap();
    assert_eq!(defender.table.tiers.len(), 2);
    assert_eq!(defender.table.min_affordable, 2);

    let controller = registry.get(ArchetypeKind::Controller).unwrap();
    assert_eq!(controller.table.min_affordable, 3);
}

#[test]
fn empty_data_dir_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let factory = ContentFactory::new(dir.path());

    let config = factory.load_config().unwrap();
    assert_eq!(config, GameConfig::default());
    assert_eq!(
        factory.load_archetypes(&config).unwrap(),
        ArchetypeRegistry::builtin(&config)
    );
}
