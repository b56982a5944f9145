use crate::core::constants::NUM_STATS;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    Attack,
    Defense,
    Speed,
    Luck,
    Wisdom,
    MagicPower,
    Charisma,
    Strength,
}

impl StatKind {
    pub fn all() -> [StatKind; NUM_STATS] {
        [
            StatKind::Attack,
            StatKind::Defense,
            StatKind::Speed,
            StatKind::Luck,
            StatKind::Wisdom,
            StatKind::MagicPower,
            StatKind::Charisma,
            StatKind::Strength,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StatKind::Attack => "Attack",
            StatKind::Defense => "Defense",
            StatKind::Speed => "Speed",
            StatKind::Luck => "Luck",
            StatKind::Wisdom => "Wisdom",
            StatKind::MagicPower => "Magic Power",
            StatKind::Charisma => "Charisma",
            StatKind::Strength => "Strength",
        }
    }
}

/// A full block of core stat magnitudes. Fields default to zero so content
/// only spells out the stats it cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StatBlock {
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
    pub luck: u32,
    pub wisdom: u32,
    pub magic_power: u32,
    pub charisma: u32,
    pub strength: u32,
}

impl StatBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, stat: StatKind) -> u32 {
        match stat {
            StatKind::Attack => self.attack,
            StatKind::Defense => self.defense,
            StatKind::Speed => self.speed,
            StatKind::Luck => self.luck,
            StatKind::Wisdom => self.wisdom,
            StatKind::MagicPower => self.magic_power,
            StatKind::Charisma => self.charisma,
            StatKind::Strength => self.strength,
        }
    }

    pub fn set(&mut self, stat: StatKind, value: u32) {
        match stat {
            StatKind::Attack => self.attack = value,
            StatKind::Defense => self.defense = value,
            StatKind::Speed => self.speed = value,
            StatKind::Luck => self.luck = value,
            StatKind::Wisdom => self.wisdom = value,
            StatKind::MagicPower => self.magic_power = value,
            StatKind::Charisma => self.charisma = value,
            StatKind::Strength => self.strength = value,
        }
    }

    pub fn add(&mut self, stat: StatKind, amount: u32) {
        self.set(stat, self.get(stat).saturating_add(amount));
    }

    /// Adds every stat of `other` onto this block.
    pub fn add_block(&mut self, other: &StatBlock) {
        for stat in StatKind::all() {
            self.add(stat, other.get(stat));
        }
    }

    pub fn total(&self) -> u32 {
        StatKind::all().iter().map(|&s| self.get(s)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Every stat multiplied by `factor` and rounded to the nearest point.
    pub fn scaled(&self, factor: f64) -> StatBlock {
        let mut out = StatBlock::new();
        for stat in StatKind::all() {
            out.set(stat, (self.get(stat) as f64 * factor).round() as u32);
        }
        out
    }

    /// Every stat multiplied by an integer count, saturating.
    pub fn times(&self, count: u32) -> StatBlock {
        let mut out = StatBlock::new();
        for stat in StatKind::all() {
            out.set(stat, self.get(stat).saturating_mul(count));
        }
        out
    }
}

/// A timed stat modifier from a buff or debuff effect. Negative amounts
/// are debuffs. `remaining` counts depth advances; the modifier is removed
/// when it reaches zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatModifier {
    pub stat: StatKind,
    pub amount: i32,
    pub remaining: u32,
}
