//! Builtin content set: rarity tiers, item templates, events, abilities.
//!
//! This is the data the crate ships with. External packs loaded through
//! `content::loader` use the same shapes and the same validation.

use crate::content::registry::ContentRegistry;
use crate::core::error::EngineError;
use crate::events::types::{
    Ability, Choice, DungeonEvent, Effect, EffectKind, EventKind, Outcome, Requirement,
    TargetSelector,
};
use crate::items::rarity::{RarityTable, RarityTier};
use crate::items::types::{ItemSlot, ItemTemplate};
use crate::party::stats::{StatBlock, StatKind};

/// The fully validated builtin registry.
pub fn builtin() -> Result<ContentRegistry, EngineError> {
    ContentRegistry::new(
        builtin_rarity_table()?,
        builtin_item_templates(),
        builtin_events(),
        builtin_abilities(),
    )
}

/// Five tiers; the deeper floors gate the top tiers out of early drops.
pub fn builtin_rarity_table() -> Result<RarityTable, EngineError> {
    RarityTable::new(vec![
        RarityTier {
            id: "common".to_string(),
            name: "Common".to_string(),
            weight: 60.0,
            min_floor: 0,
            stat_multiplier: 1.0,
        },
        RarityTier {
            id: "uncommon".to_string(),
            name: "Uncommon".to_string(),
            weight: 25.0,
            min_floor: 2,
            stat_multiplier: 1.35,
        },
        RarityTier {
            id: "rare".to_string(),
            name: "Rare".to_string(),
            weight: 10.0,
            min_floor: 5,
            stat_multiplier: 1.8,
        },
        RarityTier {
            id: "epic".to_string(),
            name: "Epic".to_string(),
            weight: 4.0,
            min_floor: 9,
            stat_multiplier: 2.5,
        },
        RarityTier {
            id: "legendary".to_string(),
            name: "Legendary".to_string(),
            weight: 1.0,
            min_floor: 14,
            stat_multiplier: 3.5,
        },
    ])
}

fn template(
    id: &str,
    name: &str,
    slot: ItemSlot,
    stats: StatBlock,
    band: (usize, usize),
    base_value: u64,
    depth_gate: u32,
    icon: &str,
) -> ItemTemplate {
    ItemTemplate {
        id: id.to_string(),
        name: name.to_string(),
        slot,
        stats,
        min_rarity: band.0,
        max_rarity: band.1,
        base_value,
        depth_gate,
        icon: icon.to_string(),
    }
}

pub fn builtin_item_templates() -> Vec<ItemTemplate> {
    vec![
        // Weapons
        template(
            "rusty_sword",
            "Rusty Sword",
            ItemSlot::Weapon,
            StatBlock {
                attack: 4,
                strength: 1,
                ..StatBlock::new()
            },
            (0, 2),
            8,
            0,
            "sword",
        ),
        template(
            "soldiers_blade",
            "Soldier's Blade",
            ItemSlot::Weapon,
            StatBlock {
                attack: 7,
                speed: 1,
                strength: 2,
                ..StatBlock::new()
            },
            (0, 3),
            20,
            3,
            "sword",
        ),
        template(
            "arcanist_rod",
            "Arcanist's Rod",
            ItemSlot::Weapon,
            StatBlock {
                magic_power: 6,
                wisdom: 3,
                ..StatBlock::new()
            },
            (0, 3),
            18,
            2,
            "staff",
        ),
        // Armor
        template(
            "leather_jerkin",
            "Leather Jerkin",
            ItemSlot::Armor,
            StatBlock {
                defense: 4,
                ..StatBlock::new()
            },
            (0, 2),
            10,
            0,
            "armor",
        ),
        template(
            "scale_mail",
            "Scale Mail",
            ItemSlot::Armor,
            StatBlock {
                defense: 7,
                strength: 1,
                ..StatBlock::new()
            },
            (1, 4),
            26,
            4,
            "armor",
        ),
        // Helmets
        template(
            "traveler_hood",
            "Traveler's Hood",
            ItemSlot::Helmet,
            StatBlock {
                defense: 2,
                wisdom: 2,
                ..StatBlock::new()
            },
            (0, 2),
            9,
            0,
            "hood",
        ),
        template(
            "crested_helm",
            "Crested Helm",
            ItemSlot::Helmet,
            StatBlock {
                defense: 5,
                charisma: 2,
                ..StatBlock::new()
            },
            (1, 4),
            24,
            6,
            "helm",
        ),
        // Boots
        template(
            "worn_boots",
            "Worn Boots",
            ItemSlot::Boots,
            StatBlock {
                speed: 3,
                ..StatBlock::new()
            },
            (0, 1),
            6,
            0,
            "boots",
        ),
        template(
            "stalker_treads",
            "Stalker's Treads",
            ItemSlot::Boots,
            StatBlock {
                speed: 5,
                luck: 2,
                ..StatBlock::new()
            },
            (1, 4),
            22,
            5,
            "boots",
        ),
        // Trinkets
        template(
            "lucky_charm",
            "Lucky Charm",
            ItemSlot::Trinket,
            StatBlock {
                luck: 4,
                charisma: 1,
                ..StatBlock::new()
            },
            (0, 4),
            15,
            1,
            "charm",
        ),
        // Worthless but valid; drops exist that are pure flavor.
        template(
            "clay_keepsake",
            "Clay Keepsake",
            ItemSlot::Trinket,
            StatBlock::new(),
            (0, 0),
            0,
            0,
            "charm",
        ),
    ]
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

fn piercing(target: TargetSelector, value: f64) -> Effect {
    Effect {
        true_damage: true,
        ..effect(EffectKind::Damage, target, value)
    }
}

fn modifier(
    kind: EffectKind,
    target: TargetSelector,
    stat: StatKind,
    value: f64,
    duration: u32,
) -> Effect {
    Effect {
        kind,
        target,
        value,
        duration: Some(duration),
        stat: Some(stat),
        scaling: None,
        true_damage: false,
    }
}

fn choice(
    text: &str,
    requirement: Option<Requirement>,
    outcome_text: &str,
    effects: Vec<Effect>,
) -> Choice {
    Choice {
        text: text.to_string(),
        requirement,
        outcome: Outcome {
            text: outcome_text.to_string(),
            effects,
        },
    }
}

fn stat_req(stat: StatKind, min_value: u32) -> Option<Requirement> {
    Some(Requirement::Stat { stat, min_value })
}

fn class_req(class: &str) -> Option<Requirement> {
    Some(Requirement::Class {
        class: class.to_string(),
    })
}

fn gold_req(amount: u64) -> Option<Requirement> {
    Some(Requirement::Gold { amount })
}

fn event(
    id: &str,
    kind: EventKind,
    title: &str,
    description: &str,
    depth_gate: u32,
    icon: &str,
    choices: Vec<Choice>,
) -> DungeonEvent {
    DungeonEvent {
        id: id.to_string(),
        kind,
        title: title.to_string(),
        description: description.to_string(),
        depth_gate,
        icon: icon.to_string(),
        choices,
    }
}

pub fn builtin_events() -> Vec<DungeonEvent> {
    use EffectKind::{Damage, Gold, Heal, Item, Revive, Xp};
    use TargetSelector::{All, AllAllies, Enemy, Random, Strongest, Weakest};

    vec![
        // Combat
        event(
            "skeleton_patrol",
            EventKind::Combat,
            "Skeleton Patrol",
            "Three skeletons clatter toward you, rusted spears leveled.",
            0,
            "skull",
            vec![
                choice(
                    "Fight them head on",
                    None,
                    "Bones crack under your blows, but a spear finds you first.",
                    vec![
                        effect(Damage, Enemy, 8.0),
                        effect(Xp, All, 30.0),
                        effect(Gold, All, 10.0),
                    ],
                ),
                choice(
                    "Slip past them",
                    stat_req(StatKind::Speed, 6),
                    "You weave between the patrol without a sound.",
                    vec![effect(Xp, All, 15.0)],
                ),
                choice(
                    "Overpower the leader",
                    stat_req(StatKind::Strength, 9),
                    "You shatter the lead skeleton and the rest collapse.",
                    vec![effect(Xp, All, 40.0), effect(Gold, All, 15.0)],
                ),
            ],
        ),
        event(
            "cave_stalker",
            EventKind::Combat,
            "Cave Stalker",
            "Something pale and long-limbed drops from the ceiling.",
            2,
            "claw",
            vec![
                choice(
                    "Stand and fight",
                    None,
                    "It rakes one of you before it dies screaming.",
                    vec![
                        effect(Damage, Random, 12.0),
                        effect(Xp, All, 45.0),
                        effect(Gold, All, 14.0),
                    ],
                ),
                choice(
                    "Bait it into a crevice",
                    stat_req(StatKind::Luck, 7),
                    "It lunges, wedges itself tight, and you finish it at leisure.",
                    vec![effect(Xp, All, 55.0), effect(Gold, All, 18.0)],
                ),
                choice(
                    "Retreat to the last chamber",
                    None,
                    "It harries you all the way out.",
                    vec![effect(Damage, All, 5.0)],
                ),
            ],
        ),
        event(
            "ambush_in_the_dark",
            EventKind::Combat,
            "Ambush in the Dark",
            "Torchlight dies; things move in the black.",
            4,
            "claw",
            vec![
                choice(
                    "Form a circle and hold",
                    None,
                    "They test your line, drag at the faltering, and break.",
                    vec![
                        effect(Damage, Weakest, 14.0),
                        effect(Xp, All, 60.0),
                        effect(Gold, All, 20.0),
                    ],
                ),
                choice(
                    "Scatter and regroup",
                    None,
                    "Everyone takes scrapes in the dark, but you lose them.",
                    vec![effect(Damage, All, 6.0), effect(Xp, All, 30.0)],
                ),
                choice(
                    "Bellow a challenge",
                    class_req("warrior"),
                    "Your roar rallies the line; you carry the melee bleeding.",
                    vec![
                        modifier(EffectKind::Buff, AllAllies, StatKind::Attack, 3.0, 2),
                        effect(Damage, Enemy, 10.0),
                        effect(Xp, All, 70.0),
                        effect(Gold, All, 25.0),
                    ],
                ),
            ],
        ),
        // Treasure
        event(
            "dusty_cache",
            EventKind::Treasure,
            "Dusty Cache",
            "A strongbox sits under a collapsed shelf, lock rusted shut.",
            0,
            "chest",
            vec![
                choice(
                    "Pry it open",
                    stat_req(StatKind::Strength, 8),
                    "The lid gives with a shriek of metal.",
                    vec![effect(Item, Enemy, 0.0), effect(Gold, All, 15.0)],
                ),
                choice(
                    "Pick the lock",
                    stat_req(StatKind::Luck, 6),
                    "The mechanism clicks open clean.",
                    vec![effect(Item, Enemy, 0.0), effect(Gold, All, 25.0)],
                ),
                choice(
                    "Smash it",
                    None,
                    "Most of what was inside is now powder.",
                    vec![effect(Gold, All, 8.0)],
                ),
            ],
        ),
        event(
            "gilded_reliquary",
            EventKind::Treasure,
            "Gilded Reliquary",
            "A reliquary glints behind a lattice of old ward-script.",
            3,
            "chest",
            vec![
                choice(
                    "Leave an offering",
                    gold_req(30),
                    "The wards fade; the reliquary opens itself to you.",
                    vec![
                        effect(Gold, All, -30.0),
                        effect(Item, Enemy, 0.0),
                        effect(Xp, All, 20.0),
                    ],
                ),
                choice(
                    "Force the lattice",
                    None,
                    "The ward-script sears whoever reaches in.",
                    vec![piercing(Enemy, 8.0), effect(Item, Enemy, 0.0)],
                ),
                choice(
                    "Note it and move on",
                    None,
                    "Some prizes cost more than they pay.",
                    vec![effect(Xp, All, 10.0)],
                ),
            ],
        ),
        event(
            "abandoned_camp",
            EventKind::Treasure,
            "Abandoned Camp",
            "Bedrolls, a cold firepit, and packs left mid-meal.",
            1,
            "tent",
            vec![
                choice(
                    "Search thoroughly",
                    None,
                    "Whoever left did so in a hurry, and left plenty.",
                    vec![effect(Item, Enemy, 0.0), effect(Xp, All, 15.0)],
                ),
                choice(
                    "Rest by the firepit",
                    None,
                    "You relight the fire and catch your breath.",
                    vec![effect(Heal, All, 10.0)],
                ),
                choice(
                    "Scavenge the supplies",
                    None,
                    "Rations, rope, and a handful of coins.",
                    vec![effect(Gold, All, 12.0)],
                ),
            ],
        ),
        // Rest
        event(
            "quiet_spring",
            EventKind::Rest,
            "Quiet Spring",
            "Clear water wells up through white sand, impossibly cold.",
            0,
            "spring",
            vec![
                choice(
                    "Drink deeply",
                    None,
                    "The cold scours the ache from your bones.",
                    vec![effect(Heal, All, 15.0)],
                ),
                choice(
                    "Fill flasks and move on",
                    None,
                    "A mouthful each, and the road again.",
                    vec![effect(Heal, All, 6.0), effect(Xp, All, 10.0)],
                ),
            ],
        ),
        event(
            "wardens_shrine",
            EventKind::Rest,
            "Warden's Shrine",
            "A low stone shrine, its basin still wet.",
            2,
            "shrine",
            vec![
                choice(
                    "Lead a prayer",
                    class_req("cleric"),
                    "The basin glows; warmth settles over the party.",
                    vec![
                        effect(Heal, All, 20.0),
                        modifier(EffectKind::Buff, AllAllies, StatKind::Wisdom, 2.0, 3),
                    ],
                ),
                choice(
                    "Light a candle",
                    gold_req(10),
                    "The flame steadies, and so do your hands.",
                    vec![effect(Gold, All, -10.0), effect(Heal, All, 12.0)],
                ),
                choice(
                    "Rest in its shadow",
                    None,
                    "Even unblessed, the stone is kind.",
                    vec![effect(Heal, All, 8.0)],
                ),
            ],
        ),
        event(
            "forgotten_sanctum",
            EventKind::Rest,
            "Forgotten Sanctum",
            "A sealed chapel untouched by whatever emptied this level.",
            8,
            "shrine",
            vec![
                choice(
                    "Perform the old rite",
                    class_req("cleric"),
                    "Light pours from the altar and the fallen stir.",
                    vec![effect(Revive, Enemy, 25.0), effect(Heal, All, 10.0)],
                ),
                choice(
                    "Share out the rations",
                    None,
                    "A real meal, behind a real door.",
                    vec![effect(Heal, All, 14.0)],
                ),
                choice(
                    "Keep watch in turns",
                    None,
                    "Everyone sleeps; nobody is taken.",
                    vec![modifier(
                        EffectKind::Buff,
                        AllAllies,
                        StatKind::Defense,
                        2.0,
                        3,
                    )],
                ),
            ],
        ),
        // Traps
        event(
            "pressure_plates",
            EventKind::Trap,
            "Pressure Plates",
            "The floor ahead is a checkerboard of worn plates.",
            1,
            "trap",
            vec![
                choice(
                    "Dash across",
                    stat_req(StatKind::Speed, 7),
                    "You cross before the mechanism can wake.",
                    vec![effect(Xp, All, 25.0)],
                ),
                choice(
                    "Trigger it from cover",
                    None,
                    "Darts hammer the shield you braced; one slips past.",
                    vec![effect(Damage, Weakest, 10.0), effect(Xp, All, 35.0)],
                ),
                choice(
                    "Inch across one by one",
                    None,
                    "Slow, nervous, and mostly unscathed.",
                    vec![effect(Damage, All, 4.0), effect(Xp, All, 15.0)],
                ),
            ],
        ),
        event(
            "poisoned_darts",
            EventKind::Trap,
            "Poisoned Darts",
            "Tiny holes line the walls at throat height.",
            3,
            "trap",
            vec![
                choice(
                    "Shield the others",
                    class_req("warrior"),
                    "You walk it first and take the volley on your pauldrons.",
                    vec![effect(Damage, Enemy, 12.0), effect(Xp, All, 50.0)],
                ),
                choice(
                    "Tumble through",
                    stat_req(StatKind::Speed, 9),
                    "The volley stitches the air where you were.",
                    vec![effect(Xp, All, 30.0)],
                ),
                choice(
                    "Press through it",
                    None,
                    "The venom burns in everyone's veins.",
                    vec![
                        piercing(All, 7.0),
                        modifier(EffectKind::Debuff, AllAllies, StatKind::Speed, 2.0, 2),
                        effect(Xp, All, 20.0),
                    ],
                ),
            ],
        ),
        // Merchants
        event(
            "wandering_peddler",
            EventKind::Merchant,
            "Wandering Peddler",
            "A stooped figure with a pack twice her size waves you over.",
            1,
            "coin",
            vec![
                choice(
                    "Buy from the pack",
                    gold_req(25),
                    "She digs to the bottom and produces something wrapped in oilcloth.",
                    vec![effect(Gold, All, -25.0), effect(Item, Enemy, 0.0)],
                ),
                choice(
                    "Talk her price down",
                    stat_req(StatKind::Charisma, 7),
                    "She laughs, spits, and shakes on it.",
                    vec![effect(Gold, All, -15.0), effect(Item, Enemy, 0.0)],
                ),
                choice(
                    "Trade news of the road",
                    None,
                    "Her gossip is worth more than her wares.",
                    vec![effect(Xp, All, 12.0)],
                ),
            ],
        ),
        event(
            "bone_collector",
            EventKind::Merchant,
            "Bone Collector",
            "It pays in coin and asks no questions about provenance.",
            6,
            "coin",
            vec![
                choice(
                    "Sell your trophies",
                    None,
                    "It counts out coins with too many fingers.",
                    vec![effect(Gold, All, 30.0)],
                ),
                choice(
                    "Buy the humming charm",
                    gold_req(40),
                    "The charm settles against your chest and hums louder.",
                    vec![
                        effect(Gold, All, -40.0),
                        effect(Item, Enemy, 0.0),
                        modifier(EffectKind::Buff, AllAllies, StatKind::Luck, 2.0, 4),
                    ],
                ),
                choice(
                    "Back away slowly",
                    None,
                    "It watches you go with all of its eyes.",
                    vec![],
                ),
            ],
        ),
        // Bosses
        event(
            "bone_tyrant",
            EventKind::Boss,
            "The Bone Tyrant",
            "A giant of fused skeletons fills the stairwell down.",
            5,
            "crown",
            vec![
                choice(
                    "Meet it head on",
                    None,
                    "It breaks your strongest against the wall before it falls.",
                    vec![
                        effect(Damage, Strongest, 18.0),
                        effect(Xp, All, 120.0),
                        effect(Gold, All, 60.0),
                        effect(Item, Enemy, 0.0),
                    ],
                ),
                choice(
                    "Strike the binding sigils",
                    stat_req(StatKind::Wisdom, 10),
                    "The sigils crack and the giant sheds itself into a bone-fall.",
                    vec![
                        effect(Damage, Random, 10.0),
                        effect(Xp, All, 140.0),
                        effect(Gold, All, 70.0),
                        effect(Item, Enemy, 0.0),
                    ],
                ),
                choice(
                    "Fighting retreat",
                    None,
                    "You give ground by the yard and pay for every step.",
                    vec![effect(Damage, All, 12.0), effect(Xp, All, 40.0)],
                ),
            ],
        ),
        event(
            "the_pale_king",
            EventKind::Boss,
            "The Pale King",
            "He rises from a throne of the delvers who came before you.",
            12,
            "crown",
            vec![
                choice(
                    "Challenge him alone",
                    class_req("warrior"),
                    "His blade ignores steel and flesh alike, but he kneels last.",
                    vec![
                        piercing(Enemy, 25.0),
                        effect(Xp, All, 250.0),
                        effect(Gold, All, 150.0),
                        effect(Item, Enemy, 0.0),
                    ],
                ),
                choice(
                    "Unravel the crown",
                    stat_req(StatKind::MagicPower, 14),
                    "The crown comes apart in threads of cold light.",
                    vec![
                        effect(Damage, All, 15.0),
                        effect(Xp, All, 260.0),
                        effect(Gold, All, 160.0),
                        effect(Item, Enemy, 0.0),
                    ],
                ),
                choice(
                    "Kneel",
                    None,
                    "He lets you live, and you carry the shame of it.",
                    vec![
                        modifier(EffectKind::Debuff, AllAllies, StatKind::Attack, 3.0, 3),
                        effect(Xp, All, 30.0),
                    ],
                ),
            ],
        ),
    ]
}

pub fn builtin_abilities() -> Vec<Ability> {
    use EffectKind::{Buff, Heal, Revive};
    use TargetSelector::{Actor, Ally, AllAllies, Enemy};

    vec![
        Ability {
            id: "war_cry".to_string(),
            name: "War Cry".to_string(),
            class: Some("warrior".to_string()),
            cooldown: 3,
            requirement: None,
            effects: vec![modifier(Buff, AllAllies, StatKind::Attack, 3.0, 2)],
            icon: "horn".to_string(),
            description: "A roar that puts iron back into every arm.".to_string(),
        },
        Ability {
            id: "arcane_focus".to_string(),
            name: "Arcane Focus".to_string(),
            class: Some("mage".to_string()),
            cooldown: 4,
            requirement: None,
            effects: vec![modifier(Buff, Actor, StatKind::MagicPower, 4.0, 3)],
            icon: "rune".to_string(),
            description: "The world narrows to the working at hand.".to_string(),
        },
        Ability {
            id: "healing_word".to_string(),
            name: "Healing Word".to_string(),
            class: Some("cleric".to_string()),
            cooldown: 3,
            requirement: None,
            effects: vec![effect(Heal, Ally, 12.0)],
            icon: "sun".to_string(),
            description: "A single syllable that closes wounds.".to_string(),
        },
        Ability {
            id: "last_rites".to_string(),
            name: "Last Rites".to_string(),
            class: Some("cleric".to_string()),
            cooldown: 8,
            requirement: stat_req(StatKind::Wisdom, 8),
            effects: vec![effect(Revive, Enemy, 20.0)],
            icon: "sun".to_string(),
            description: "Spoken over the fallen, and sometimes answered.".to_string(),
        },
        Ability {
            id: "shadow_step".to_string(),
            name: "Shadow Step".to_string(),
            class: Some("rogue".to_string()),
            cooldown: 4,
            requirement: None,
            effects: vec![
                modifier(Buff, Actor, StatKind::Speed, 3.0, 2),
                modifier(Buff, Actor, StatKind::Luck, 2.0, 2),
            ],
            icon: "mask".to_string(),
            description: "Half a pace sideways, out of the world's sight.".to_string(),
        },
        Ability {
            id: "second_wind".to_string(),
            name: "Second Wind".to_string(),
            class: None,
            cooldown: 5,
            requirement: None,
            effects: vec![effect(Heal, Actor, 8.0)],
            icon: "wind".to_string(),
            description: "Grit where strength has run out.".to_string(),
        },
    ]
}
