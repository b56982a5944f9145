//! Integration test: event resolution through the public engine surface.
//!
//! Exercises choice eligibility and ordering, actor selection, effect
//! batches with mid-batch defeats, depth-scaled requirements, level-ups
//! inside a resolution, recent-event memory, and the wipe path.

use delve::content::registry::ContentRegistry;
use delve::core::config::{DeathPenalty, EngineConfig};
use delve::core::error::EngineError;
use delve::events::resolver::{best_choice, list_eligible_choices, resolve_choice};
use delve::events::types::{
    Choice, DungeonEvent, Effect, EffectKind, EventKind, Outcome, Requirement, TargetSelector,
};
use delve::items::rarity::{RarityTable, RarityTier};
use delve::party::class::HeroClass;
use delve::party::hero::Hero;
use delve::party::stats::StatKind;
use delve::party::types::Party;
use delve::progression::leveling::apply_xp;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// =============================================================================
// Helpers
// =============================================================================

fn registry() -> ContentRegistry {
    let table = RarityTable::new(vec![RarityTier {
        id: "common".to_string(),
        name: "Common".to_string(),
        weight: 1.0,
        min_floor: 0,
        stat_multiplier: 1.0,
    }])
    .unwrap();
    ContentRegistry::new(table, vec![], vec![], vec![]).unwrap()
}

fn effect(kind: EffectKind, target: TargetSelector, value: f64) -> Effect {
    Effect {
        kind,
        target,
        value,
        duration: None,
        stat: None,
        scaling: None,
        true_damage: false,
    }
}

fn choice(requirement: Option<Requirement>, effects: Vec<Effect>) -> Choice {
    Choice {
        text: "Proceed".to_string(),
        requirement,
        outcome: Outcome {
            text: "It is done.".to_string(),
            effects,
        },
    }
}

fn event(id: &str, choices: Vec<Choice>) -> DungeonEvent {
    DungeonEvent {
        id: id.to_string(),
        kind: EventKind::Rest,
        title: id.to_string(),
        description: String::new(),
        depth_gate: 0,
        icon: String::new(),
        choices,
    }
}

/// Three heroes with armor stripped and a flat 50 max HP, so damage
/// numbers land unmodified.
fn unarmored_party() -> Party {
    let mut party = Party::new(vec![
        Hero::new("Brand", HeroClass::Warrior),
        Hero::new("Lyra", HeroClass::Mage),
        Hero::new("Sera", HeroClass::Cleric),
    ]);
    for hero in &mut party.heroes {
        hero.stats.defense = 0;
        hero.max_hp = 50;
        hero.hp = 50;
    }
    party
}

// =============================================================================
// Eligibility and choice ordering
// =============================================================================

#[test]
fn test_eligible_choices_keep_declared_order() {
    let party = Party::new(vec![
        Hero::new("Brand", HeroClass::Warrior),
        Hero::new("Lyra", HeroClass::Mage),
    ]);
    let config = EngineConfig::default();
    let fork = event(
        "fork",
        vec![
            choice(Some(Requirement::Gold { amount: 100_000 }), vec![]),
            choice(None, vec![]),
            choice(
                Some(Requirement::Class {
                    class: "MAGE".to_string(),
                }),
                vec![],
            ),
        ],
    );

    assert_eq!(list_eligible_choices(&fork, &party, &config), vec![1, 2]);
    assert_eq!(best_choice(&fork, &party, &config), Some(1));
}

#[test]
fn test_ineligible_choice_is_refused_not_rerouted() {
    let mut party = Party::new(vec![Hero::new("Brand", HeroClass::Warrior)]);
    party.gold = 5;
    let config = EngineConfig::default();
    let registry = registry();
    let mut rng = ChaCha8Rng::seed_from_u64(2);

    let toll = event(
        "toll",
        vec![choice(
            Some(Requirement::Gold { amount: 50 }),
            vec![effect(EffectKind::Gold, TargetSelector::Actor, -50.0)],
        )],
    );

    let refused = resolve_choice(&toll, 0, &mut party, &registry, &config, &mut rng);
    assert!(matches!(refused, Err(EngineError::IneligibleChoice { .. })));
    assert_eq!(party.gold, 5);
    assert!(!party.remembers("toll"));

    let out_of_range = resolve_choice(&toll, 3, &mut party, &registry, &config, &mut rng);
    assert!(matches!(
        out_of_range,
        Err(EngineError::IneligibleChoice { .. })
    ));
}

#[test]
fn test_actor_is_lowest_slot_satisfier() {
    let mut party = Party::new(vec![
        Hero::new("Brand", HeroClass::Warrior),
        Hero::new("Sera", HeroClass::Cleric),
    ]);
    party.heroes[0].hp = 30;
    party.heroes[1].hp = 30;
    let config = EngineConfig::default();
    let registry = registry();
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    // the warrior fails the class gate, so the cleric acts despite the
    // warrior holding a lower slot
    let shrine = event(
        "shrine",
        vec![choice(
            Some(Requirement::Class {
                class: "cLeRiC".to_string(),
            }),
            vec![effect(EffectKind::Heal, TargetSelector::Actor, 10.0)],
        )],
    );

    resolve_choice(&shrine, 0, &mut party, &registry, &config, &mut rng).unwrap();
    assert_eq!(party.heroes[0].hp, 30);
    assert_eq!(party.heroes[1].hp, 40);
}

// =============================================================================
// Effect batches
// =============================================================================

#[test]
fn test_damage_batch_excludes_mid_batch_falls() {
    let mut party = unarmored_party();
    party.heroes[0].hp = 50;
    party.heroes[1].hp = 30;
    party.heroes[2].hp = 10;
    let config = EngineConfig::default();
    let registry = registry();
    let mut rng = ChaCha8Rng::seed_from_u64(4);

    let cave_in = event(
        "cave_in",
        vec![choice(
            None,
            vec![
                effect(EffectKind::Damage, TargetSelector::All, 15.0),
                effect(EffectKind::Damage, TargetSelector::Weakest, 5.0),
            ],
        )],
    );

    let resolution =
        resolve_choice(&cave_in, 0, &mut party, &registry, &config, &mut rng).unwrap();

    // the cleric falls to the sweep, so the follow-up hits the mage
    assert_eq!(party.heroes[0].hp, 35);
    assert_eq!(party.heroes[1].hp, 10);
    assert_eq!(party.heroes[2].hp, 0);
    assert!(!party.heroes[2].alive);
    assert!(!resolution.party_wiped);
}

#[test]
fn test_unknown_effect_skips_without_poisoning_the_batch() {
    let mut party = unarmored_party();
    party.heroes.truncate(1);
    party.heroes[0].hp = 20;
    let config = EngineConfig::default();
    let registry = registry();
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    let ritual = event(
        "ritual",
        vec![choice(
            None,
            vec![
                effect(EffectKind::Unknown, TargetSelector::All, 3.0),
                effect(EffectKind::Heal, TargetSelector::All, 10.0),
            ],
        )],
    );

    let resolution =
        resolve_choice(&ritual, 0, &mut party, &registry, &config, &mut rng).unwrap();

    assert_eq!(party.heroes[0].hp, 30);
    assert!(resolution.log.iter().any(|line| line.contains("fizzles")));
}

// =============================================================================
// Depth-scaled requirements
// =============================================================================

#[test]
fn test_gold_cost_scales_with_depth() {
    let config = EngineConfig::default();
    let registry = registry();
    let mut rng = ChaCha8Rng::seed_from_u64(6);

    // authored price 20, depth 4: round(20 * 1.6) = 32
    let peddler = event(
        "peddler",
        vec![choice(
            Some(Requirement::Gold { amount: 20 }),
            vec![effect(EffectKind::Gold, TargetSelector::Actor, -20.0)],
        )],
    );

    let mut party = Party::new(vec![Hero::new("Brand", HeroClass::Warrior)]);
    party.depth = 4;
    party.gold = 32;
    resolve_choice(&peddler, 0, &mut party, &registry, &config, &mut rng).unwrap();
    assert_eq!(party.gold, 0, "debit must charge the same scaled price");

    let mut poorer = Party::new(vec![Hero::new("Brand", HeroClass::Warrior)]);
    poorer.depth = 4;
    poorer.gold = 31;
    let refused = resolve_choice(&peddler, 0, &mut poorer, &registry, &config, &mut rng);
    assert!(matches!(refused, Err(EngineError::IneligibleChoice { .. })));
}

#[test]
fn test_stat_threshold_scales_with_depth() {
    let config = EngineConfig::default();
    let check = choice(
        Some(Requirement::Stat {
            stat: StatKind::Strength,
            min_value: 8,
        }),
        vec![],
    );
    let door = event("door", vec![check]);

    // warrior base strength 8 passes at the surface
    let mut party = Party::new(vec![Hero::new("Brand", HeroClass::Warrior)]);
    assert_eq!(best_choice(&door, &party, &config), Some(0));

    // at depth 10 the threshold becomes round(8 * 1.5) = 12
    party.depth = 10;
    assert_eq!(best_choice(&door, &party, &config), None);
}

// =============================================================================
// Rewards, level-ups, memory
// =============================================================================

#[test]
fn test_xp_reward_levels_the_party_mid_resolution() {
    let mut party = Party::new(vec![
        Hero::new("Brand", HeroClass::Warrior),
        Hero::new("Lyra", HeroClass::Mage),
    ]);
    let config = EngineConfig::default();
    let registry = registry();
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    // 350 xp crosses the 100 and 200 thresholds with 50 left over
    let victory = event(
        "victory",
        vec![choice(
            None,
            vec![effect(EffectKind::Xp, TargetSelector::All, 350.0)],
        )],
    );

    let resolution =
        resolve_choice(&victory, 0, &mut party, &registry, &config, &mut rng).unwrap();

    for hero in &party.heroes {
        assert_eq!(hero.level, 3);
        assert_eq!(hero.xp, 50);
    }
    // two warrior growth steps on top of base attack 8
    assert_eq!(party.heroes[0].stats.attack, 12);
    assert!(resolution
        .log
        .iter()
        .any(|line| line.contains("reaches level 3")));
}

#[test]
fn test_memory_window_advances_with_resolutions() {
    let mut party = Party::new(vec![Hero::new("Brand", HeroClass::Warrior)]);
    let config = EngineConfig {
        event_memory: 2,
        ..EngineConfig::default()
    };
    let registry = registry();
    let mut rng = ChaCha8Rng::seed_from_u64(8);

    for id in ["a", "b", "c"] {
        let ev = event(id, vec![choice(None, vec![])]);
        resolve_choice(&ev, 0, &mut party, &registry, &config, &mut rng).unwrap();
    }

    assert!(!party.remembers("a"));
    assert!(party.remembers("b"));
    assert!(party.remembers("c"));
}

// =============================================================================
// The wipe path
// =============================================================================

#[test]
fn test_wipe_halves_levels_and_revives() {
    let config = EngineConfig {
        death_penalty: DeathPenalty::HalveLevels,
        lose_gold_on_wipe: true,
        ..EngineConfig::default()
    };
    let registry = registry();
    let mut rng = ChaCha8Rng::seed_from_u64(9);

    let mut party = Party::new(vec![
        Hero::new("Brand", HeroClass::Warrior),
        Hero::new("Lyra", HeroClass::Mage),
    ]);
    for hero in &mut party.heroes {
        apply_xp(hero, 600, &config);
        assert_eq!(hero.level, 4);
    }
    party.gold = 140;

    let doom = event(
        "doom",
        vec![choice(
            None,
            vec![Effect {
                true_damage: true,
                ..effect(EffectKind::Damage, TargetSelector::All, 999.0)
            }],
        )],
    );

    let resolution = resolve_choice(&doom, 0, &mut party, &registry, &config, &mut rng).unwrap();

    assert!(resolution.party_wiped);
    assert_eq!(party.gold, 0);
    for hero in &party.heroes {
        assert!(hero.alive);
        assert_eq!(hero.level, 2);
        assert_eq!(hero.hp, hero.max_hp);
    }
}
