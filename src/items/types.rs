use crate::party::stats::StatBlock;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemSlot {
    Weapon,
    Armor,
    Helmet,
    Boots,
    Trinket,
}

impl ItemSlot {
    pub fn all() -> [ItemSlot; 5] {
        [
            ItemSlot::Weapon,
            ItemSlot::Armor,
            ItemSlot::Helmet,
            ItemSlot::Boots,
            ItemSlot::Trinket,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ItemSlot::Weapon => "Weapon",
            ItemSlot::Armor => "Armor",
            ItemSlot::Helmet => "Helmet",
            ItemSlot::Boots => "Boots",
            ItemSlot::Trinket => "Trinket",
        }
    }
}

/// Immutable base definition owned by content data. `min_rarity` and
/// `max_rarity` are inclusive indices into the rarity table's tier order;
/// `depth_gate` is the minimum depth at which this template can drop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemTemplate {
    pub id: String,
    pub name: String,
    pub slot: ItemSlot,
    #[serde(default)]
    pub stats: StatBlock,
    pub min_rarity: usize,
    pub max_rarity: usize,
    #[serde(default)]
    pub base_value: u64,
    #[serde(default)]
    pub depth_gate: u32,
    #[serde(default)]
    pub icon: String,
}

/// A concrete item rolled from a template at a given depth. Stats and
/// value are fixed at generation; only ownership changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedItem {
    pub id: Uuid,
    pub template_id: String,
    pub name: String,
    pub slot: ItemSlot,
    /// Index into the rarity table's tier order, after clamping to the
    /// template's allowed band.
    pub rarity: usize,
    pub rarity_name: String,
    pub stats: StatBlock,
    pub value: u64,
    pub depth: u32,
    pub icon: String,
}
