use crate::party::stats::StatKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Combat,
    Treasure,
    Rest,
    Trap,
    Merchant,
    Boss,
}

impl EventKind {
    pub fn all() -> [EventKind; 6] {
        [
            EventKind::Combat,
            EventKind::Treasure,
            EventKind::Rest,
            EventKind::Trap,
            EventKind::Merchant,
            EventKind::Boss,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            EventKind::Combat => "Combat",
            EventKind::Treasure => "Treasure",
            EventKind::Rest => "Rest",
            EventKind::Trap => "Trap",
            EventKind::Merchant => "Merchant",
            EventKind::Boss => "Boss",
        }
    }
}

/// Who an effect lands on. There is no separate enemy model inside an
/// encounter: the event itself is the opposing side, so `enemy` resolves
/// to the hero who engaged it, same as `self`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetSelector {
    #[serde(rename = "self")]
    Actor,
    Ally,
    Enemy,
    All,
    AllAllies,
    Random,
    Weakest,
    Strongest,
}

/// Closed set of effect kinds. Content with a kind this build does not
/// know deserializes to `Unknown`, which the applicator logs and skips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    Damage,
    Heal,
    Gold,
    Xp,
    Buff,
    Debuff,
    Revive,
    Item,
    #[serde(other)]
    Unknown,
}

/// Adds `ratio * actor's effective stat` to an effect's base value before
/// depth scaling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatScaling {
    pub stat: StatKind,
    pub ratio: f64,
}

/// An atomic, typed state mutation. Pure data; the applicator interprets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Effect {
    pub kind: EffectKind,
    pub target: TargetSelector,
    #[serde(default)]
    pub value: f64,
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub stat: Option<StatKind>,
    #[serde(default)]
    pub scaling: Option<StatScaling>,
    #[serde(default)]
    pub true_damage: bool,
}

/// Predicate gating a choice or ability. Gold amounts live here, not in
/// the outcome, so eligibility and the later debit can never disagree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Requirement {
    Class { class: String },
    Stat { stat: StatKind, min_value: u32 },
    Gold { amount: u64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub text: String,
    #[serde(default)]
    pub effects: Vec<Effect>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    pub text: String,
    #[serde(default)]
    pub requirement: Option<Requirement>,
    pub outcome: Outcome,
}

/// A narrative encounter. `depth_gate` is a minimum unlock depth, not an
/// exact match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DungeonEvent {
    pub id: String,
    pub kind: EventKind,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub depth_gate: u32,
    #[serde(default)]
    pub icon: String,
    pub choices: Vec<Choice>,
}

/// A hero-activated power resolved through the same effect pipeline as
/// event outcomes. Cooldowns count depth advances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ability {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default)]
    pub cooldown: u32,
    #[serde(default)]
    pub requirement: Option<Requirement>,
    pub effects: Vec<Effect>,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub description: String,
}
