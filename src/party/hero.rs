use crate::core::constants::REVIVE_MIN_HP;
use crate::items::equipment::Equipment;
use crate::party::class::HeroClass;
use crate::party::stats::{StatBlock, StatKind, StatModifier};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A known ability plus its cooldown state. Cooldowns count depth advances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityState {
    pub ability_id: String,
    pub cooldown_remaining: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub id: Uuid,
    pub name: String,
    pub class: HeroClass,
    pub level: u32,
    pub xp: u64,
    pub hp: u32,
    pub max_hp: u32,
    /// Base stats from class and level. Equipment and modifiers layer on
    /// top via `effective_stat`.
    pub stats: StatBlock,
    pub equipment: Equipment,
    #[serde(default)]
    pub modifiers: Vec<StatModifier>,
    #[serde(default)]
    pub abilities: Vec<AbilityState>,
    pub alive: bool,
}

impl Hero {
    pub fn new(name: impl Into<String>, class: HeroClass) -> Self {
        let max_hp = class.base_hp();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            class,
            level: 1,
            xp: 0,
            hp: max_hp,
            max_hp,
            stats: class.base_stats(),
            equipment: Equipment::default(),
            modifiers: Vec::new(),
            abilities: Vec::new(),
            alive: true,
        }
    }

    /// Current effective stat: base + equipped items + active modifiers,
    /// floored at zero when debuffs outweigh the rest.
    pub fn effective_stat(&self, stat: StatKind) -> u32 {
        let base = self.stats.get(stat) as i64 + self.equipment.stat_total(stat) as i64;
        let modified = self
            .modifiers
            .iter()
            .filter(|modifier| modifier.stat == stat)
            .fold(base, |total, modifier| total + modifier.amount as i64);
        modified.max(0) as u32
    }

    pub fn effective_stats(&self) -> StatBlock {
        let mut block = StatBlock::new();
        for stat in StatKind::all() {
            block.set(stat, self.effective_stat(stat));
        }
        block
    }

    pub fn hp_fraction(&self) -> f64 {
        if self.max_hp == 0 {
            return 0.0;
        }
        self.hp as f64 / self.max_hp as f64
    }

    /// Applies raw damage. Returns the HP actually removed. At zero HP the
    /// hero is defeated but stays in the party.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let dealt = amount.min(self.hp);
        self.hp -= dealt;
        if self.hp == 0 {
            self.alive = false;
        }
        dealt
    }

    /// Restores HP up to the maximum. Defeated heroes are not healed;
    /// revival is a distinct operation.
    pub fn heal(&mut self, amount: u32) -> u32 {
        if !self.alive {
            return 0;
        }
        let restored = amount.min(self.max_hp - self.hp);
        self.hp += restored;
        restored
    }

    /// Brings a defeated hero back with at least 1 HP.
    pub fn revive(&mut self, hp: u32) {
        self.alive = true;
        self.hp = hp.clamp(REVIVE_MIN_HP, self.max_hp);
    }

    pub fn add_modifier(&mut self, modifier: StatModifier) {
        if modifier.remaining > 0 {
            self.modifiers.push(modifier);
        }
    }

    /// Advances modifier durations by one depth step, dropping expired ones.
    pub fn tick_modifiers(&mut self) {
        for modifier in &mut self.modifiers {
            modifier.remaining = modifier.remaining.saturating_sub(1);
        }
        self.modifiers.retain(|modifier| modifier.remaining > 0);
    }

    /// Advances ability cooldowns by one depth step.
    pub fn tick_cooldowns(&mut self) {
        for ability in &mut self.abilities {
            ability.cooldown_remaining = ability.cooldown_remaining.saturating_sub(1);
        }
    }

    pub fn learn_ability(&mut self, ability_id: impl Into<String>) {
        let ability_id = ability_id.into();
        if !self.abilities.iter().any(|a| a.ability_id == ability_id) {
            self.abilities.push(AbilityState {
                ability_id,
                cooldown_remaining: 0,
            });
        }
    }
}
