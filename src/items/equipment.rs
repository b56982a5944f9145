use crate::items::types::{GeneratedItem, ItemSlot};
use crate::party::stats::StatKind;
use serde::{Deserialize, Serialize};

/// A hero's equipped items by slot.
///
/// New slots must use `#[serde(default)]` so older party snapshots keep
/// loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Equipment {
    pub weapon: Option<GeneratedItem>,
    pub armor: Option<GeneratedItem>,
    pub helmet: Option<GeneratedItem>,
    pub boots: Option<GeneratedItem>,
    pub trinket: Option<GeneratedItem>,
}

impl Equipment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: ItemSlot) -> Option<&GeneratedItem> {
        match slot {
            ItemSlot::Weapon => self.weapon.as_ref(),
            ItemSlot::Armor => self.armor.as_ref(),
            ItemSlot::Helmet => self.helmet.as_ref(),
            ItemSlot::Boots => self.boots.as_ref(),
            ItemSlot::Trinket => self.trinket.as_ref(),
        }
    }

    /// Equips an item into its slot, returning whatever it displaced.
    pub fn equip(&mut self, item: GeneratedItem) -> Option<GeneratedItem> {
        let slot = match item.slot {
            ItemSlot::Weapon => &mut self.weapon,
            ItemSlot::Armor => &mut self.armor,
            ItemSlot::Helmet => &mut self.helmet,
            ItemSlot::Boots => &mut self.boots,
            ItemSlot::Trinket => &mut self.trinket,
        };
        slot.replace(item)
    }

    pub fn take(&mut self, slot: ItemSlot) -> Option<GeneratedItem> {
        match slot {
            ItemSlot::Weapon => self.weapon.take(),
            ItemSlot::Armor => self.armor.take(),
            ItemSlot::Helmet => self.helmet.take(),
            ItemSlot::Boots => self.boots.take(),
            ItemSlot::Trinket => self.trinket.take(),
        }
    }

    pub fn iter_equipped(&self) -> impl Iterator<Item = &GeneratedItem> {
        [
            &self.weapon,
            &self.armor,
            &self.helmet,
            &self.boots,
            &self.trinket,
        ]
        .into_iter()
        .filter_map(|item| item.as_ref())
    }

    /// Summed contribution of all equipped items to one stat.
    pub fn stat_total(&self, stat: StatKind) -> u32 {
        self.iter_equipped()
            .map(|item| item.stats.get(stat))
            .fold(0u32, |total, value| total.saturating_add(value))
    }

    pub fn count(&self) -> usize {
        self.iter_equipped().count()
    }

    /// Empties every slot, dropping the items. Used by the lose-equipment
    /// death penalty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
