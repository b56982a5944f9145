use crate::items::types::GeneratedItem;
use crate::party::hero::Hero;
use crate::party::stats::{StatBlock, StatKind};

/// Per-stat weights derived from the hero's current build: stats the hero
/// already leans on are worth more, so drops reinforce specialization.
pub fn stat_weights(hero: &Hero) -> StatBlock {
    let total = hero.stats.total().max(1);
    let mut weights = StatBlock::new();
    for stat in StatKind::all() {
        weights.set(stat, 1 + hero.stats.get(stat) * 100 / total);
    }
    weights
}

pub fn score_item(item: &GeneratedItem, hero: &Hero) -> f64 {
    let weights = stat_weights(hero);
    StatKind::all()
        .iter()
        .map(|&stat| item.stats.get(stat) as f64 * weights.get(stat) as f64)
        .sum()
}

/// Equips the item if it outscores the current slot occupant for this hero.
/// Returns whether it was equipped, plus the leftover piece: the displaced
/// occupant on an upgrade, or the rejected candidate otherwise.
pub fn auto_equip_if_better(hero: &mut Hero, item: GeneratedItem) -> (bool, Option<GeneratedItem>) {
    let new_score = score_item(&item, hero);
    let current_score = hero
        .equipment
        .get(item.slot)
        .map(|current| score_item(current, hero))
        .unwrap_or(0.0);

    if new_score > current_score {
        let displaced = hero.equipment.equip(item);
        (true, displaced)
    } else {
        (false, Some(item))
    }
}
