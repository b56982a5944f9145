use crate::core::config::EngineConfig;
use crate::party::hero::Hero;
use tracing::debug;

/// XP needed to go from `level` to `level + 1`. Thresholds grow with the
/// current level, so later levels cost progressively more.
pub fn xp_to_next_level(level: u32, config: &EngineConfig) -> u64 {
    u64::from(level) * config.xp_per_level
}

/// Consumes banked xp into level-ups until the pool drops below the next
/// threshold or the level cap is reached. Returns the number of levels
/// gained. Leftover xp stays banked, including at the cap.
///
/// Each level applies the class's per-level stat growth and the configured
/// HP growth. A defeated hero still levels but stays at 0 HP.
pub fn settle_levels(hero: &mut Hero, config: &EngineConfig) -> u32 {
    let mut gained = 0;
    while hero.level < config.max_level && hero.xp >= xp_to_next_level(hero.level, config) {
        hero.xp -= xp_to_next_level(hero.level, config);
        hero.level += 1;
        gained += 1;

        hero.stats.add_block(&hero.class.growth());
        hero.max_hp += config.hp_per_level;
        if hero.alive && config.heal_to_full_on_level_up {
            hero.hp = hero.max_hp;
        } else {
            hero.hp = hero.hp.min(hero.max_hp);
        }
    }
    if gained > 0 {
        debug!(hero = %hero.name, level = hero.level, gained, "level up");
    }
    gained
}

/// Adds xp to the hero's pool and settles any level-ups it affords.
pub fn apply_xp(hero: &mut Hero, amount: u64, config: &EngineConfig) -> u32 {
    hero.xp = hero.xp.saturating_add(amount);
    settle_levels(hero, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::party::class::HeroClass;
    use crate::party::stats::StatKind;

    #[test]
    fn test_progressive_thresholds() {
        let config = EngineConfig::default();
        assert_eq!(xp_to_next_level(1, &config), 100);
        assert_eq!(xp_to_next_level(2, &config), 200);
        assert_eq!(xp_to_next_level(7, &config), 700);
    }

    #[test]
    fn test_exact_threshold_levels_up() {
        let config = EngineConfig::default();
        let mut hero = Hero::new("Brand", HeroClass::Warrior);
        assert_eq!(apply_xp(&mut hero, 100, &config), 1);
        assert_eq!(hero.level, 2);
        assert_eq!(hero.xp, 0);
    }

    #[test]
    fn test_multi_level_settle_consumes_progressively() {
        let config = EngineConfig::default();
        let mut hero = Hero::new("Brand", HeroClass::Warrior);
        // 350 covers 100 (to level 2) and 200 (to level 3), leaving 50
        let gained = apply_xp(&mut hero, 350, &config);
        assert_eq!(gained, 2);
        assert_eq!(hero.level, 3);
        assert_eq!(hero.xp, 50);
    }

    #[test]
    fn test_below_threshold_banks_xp() {
        let config = EngineConfig::default();
        let mut hero = Hero::new("Brand", HeroClass::Warrior);
        assert_eq!(apply_xp(&mut hero, 99, &config), 0);
        assert_eq!(hero.level, 1);
        assert_eq!(hero.xp, 99);
    }

    #[test]
    fn test_level_cap_stops_consumption() {
        let config = EngineConfig {
            max_level: 3,
            ..EngineConfig::default()
        };
        let mut hero = Hero::new("Brand", HeroClass::Warrior);
        apply_xp(&mut hero, 10_000, &config);
        assert_eq!(hero.level, 3);
        // xp past the cap stays banked instead of vanishing
        assert_eq!(hero.xp, 10_000 - 100 - 200);
    }

    #[test]
    fn test_level_up_applies_class_growth() {
        let config = EngineConfig::default();
        let mut hero = Hero::new("Brand", HeroClass::Warrior);
        let attack_before = hero.stats.get(StatKind::Attack);
        apply_xp(&mut hero, 100, &config);
        let growth = HeroClass::Warrior.growth().get(StatKind::Attack);
        assert_eq!(hero.stats.get(StatKind::Attack), attack_before + growth);
    }

    #[test]
    fn test_level_up_grows_and_refills_hp() {
        let config = EngineConfig::default();
        let mut hero = Hero::new("Brand", HeroClass::Warrior);
        hero.hp = 10;
        let max_before = hero.max_hp;
        apply_xp(&mut hero, 100, &config);
        assert_eq!(hero.max_hp, max_before + config.hp_per_level);
        assert_eq!(hero.hp, hero.max_hp);
    }

    #[test]
    fn test_no_refill_when_disabled() {
        let config = EngineConfig {
            heal_to_full_on_level_up: false,
            ..EngineConfig::default()
        };
        let mut hero = Hero::new("Brand", HeroClass::Warrior);
        hero.hp = 10;
        apply_xp(&mut hero, 100, &config);
        assert_eq!(hero.hp, 10);
    }

    #[test]
    fn test_defeated_hero_levels_without_reviving() {
        let config = EngineConfig::default();
        let mut hero = Hero::new("Brand", HeroClass::Warrior);
        hero.take_damage(hero.max_hp);
        apply_xp(&mut hero, 100, &config);
        assert_eq!(hero.level, 2);
        assert_eq!(hero.hp, 0);
        assert!(!hero.alive);
    }
}
