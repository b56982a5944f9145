use crate::core::config::{DeathPenalty, EngineConfig};
use crate::party::hero::Hero;
use crate::party::types::Party;
use tracing::info;

/// Rebuilds a hero at `level` from class baselines. Banked xp is forfeit;
/// equipment is untouched here.
fn set_hero_level(hero: &mut Hero, level: u32, config: &EngineConfig) {
    hero.level = level;
    hero.xp = 0;
    hero.stats = hero.class.stats_at_level(level);
    hero.max_hp = hero.class.base_hp() + config.hp_per_level * (level - 1);
    hero.hp = hero.hp.min(hero.max_hp);
}

/// Applies the configured penalty after a full wipe, then revives the
/// party at full HP so the run continues. Returns the narrative lines for
/// the caller's log. The orchestrator invokes this exactly once per wipe.
pub fn apply_death_penalty(
    party: &mut Party,
    penalty: DeathPenalty,
    config: &EngineConfig,
) -> Vec<String> {
    let mut log = Vec::new();
    match penalty {
        DeathPenalty::None => {
            log.push("The party staggers back to their feet, shaken but whole.".to_string());
        }
        DeathPenalty::HalveLevels => {
            for hero in &mut party.heroes {
                let new_level = (hero.level / 2).max(1);
                set_hero_level(hero, new_level, config);
            }
            log.push("Defeat drains the party's hard-won experience.".to_string());
        }
        DeathPenalty::ResetLevels => {
            for hero in &mut party.heroes {
                set_hero_level(hero, 1, config);
            }
            log.push("The party awakens remembering nothing of their training.".to_string());
        }
        DeathPenalty::LoseEquipment => {
            for hero in &mut party.heroes {
                hero.equipment.clear();
            }
            log.push("The party's gear is lost where they fell.".to_string());
        }
    }
    if config.lose_gold_on_wipe && party.gold > 0 {
        party.gold = 0;
        log.push("Their gold is scattered in the dark.".to_string());
    }
    party.revive_all();
    log.push("The party rises to fight again.".to_string());
    info!(?penalty, depth = party.depth, "death penalty applied");
    log
}
