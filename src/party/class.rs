use crate::party::stats::StatBlock;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeroClass {
    Warrior,
    Mage,
    Cleric,
    Rogue,
    Ranger,
}

impl HeroClass {
    pub fn all() -> [HeroClass; 5] {
        [
            HeroClass::Warrior,
            HeroClass::Mage,
            HeroClass::Cleric,
            HeroClass::Rogue,
            HeroClass::Ranger,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            HeroClass::Warrior => "Warrior",
            HeroClass::Mage => "Mage",
            HeroClass::Cleric => "Cleric",
            HeroClass::Rogue => "Rogue",
            HeroClass::Ranger => "Ranger",
        }
    }

    /// Case-insensitive lookup. Content data is inconsistently cased, so
    /// "cleric" and "Cleric" both resolve.
    pub fn parse(name: &str) -> Option<HeroClass> {
        HeroClass::all()
            .into_iter()
            .find(|class| class.name().eq_ignore_ascii_case(name))
    }

    pub fn base_hp(&self) -> u32 {
        match self {
            HeroClass::Warrior => 60,
            HeroClass::Mage => 40,
            HeroClass::Cleric => 50,
            HeroClass::Rogue => 45,
            HeroClass::Ranger => 50,
        }
    }

    pub fn base_stats(&self) -> StatBlock {
        match self {
            HeroClass::Warrior => StatBlock {
                attack: 8,
                defense: 6,
                speed: 4,
                luck: 3,
                wisdom: 2,
                magic_power: 1,
                charisma: 3,
                strength: 8,
            },
            HeroClass::Mage => StatBlock {
                attack: 2,
                defense: 2,
                speed: 4,
                luck: 4,
                wisdom: 7,
                magic_power: 9,
                charisma: 4,
                strength: 2,
            },
            HeroClass::Cleric => StatBlock {
                attack: 3,
                defense: 4,
                speed: 3,
                luck: 3,
                wisdom: 8,
                magic_power: 6,
                charisma: 5,
                strength: 3,
            },
            HeroClass::Rogue => StatBlock {
                attack: 6,
                defense: 3,
                speed: 8,
                luck: 7,
                wisdom: 3,
                magic_power: 2,
                charisma: 4,
                strength: 4,
            },
            HeroClass::Ranger => StatBlock {
                attack: 7,
                defense: 4,
                speed: 6,
                luck: 5,
                wisdom: 4,
                magic_power: 2,
                charisma: 3,
                strength: 5,
            },
        }
    }

    /// Stat gains applied once per level past the first.
    pub fn growth(&self) -> StatBlock {
        match self {
            HeroClass::Warrior => StatBlock {
                attack: 2,
                defense: 2,
                speed: 1,
                strength: 2,
                ..StatBlock::new()
            },
            HeroClass::Mage => StatBlock {
                speed: 1,
                wisdom: 2,
                magic_power: 3,
                ..StatBlock::new()
            },
            HeroClass::Cleric => StatBlock {
                defense: 1,
                wisdom: 2,
                magic_power: 2,
                charisma: 1,
                ..StatBlock::new()
            },
            HeroClass::Rogue => StatBlock {
                attack: 2,
                speed: 2,
                luck: 2,
                ..StatBlock::new()
            },
            HeroClass::Ranger => StatBlock {
                attack: 2,
                speed: 2,
                luck: 1,
                wisdom: 1,
                ..StatBlock::new()
            },
        }
    }

    /// Base stats plus growth for every level past the first. Used both at
    /// level-up and when a death penalty recomputes a hero from scratch.
    pub fn stats_at_level(&self, level: u32) -> StatBlock {
        let mut stats = self.base_stats();
        stats.add_block(&self.growth().times(level.saturating_sub(1)));
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::party::stats::StatKind;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(HeroClass::parse("Cleric"), Some(HeroClass::Cleric));
        assert_eq!(HeroClass::parse("cleric"), Some(HeroClass::Cleric));
        assert_eq!(HeroClass::parse("CLERIC"), Some(HeroClass::Cleric));
        assert_eq!(HeroClass::parse("rOgUe"), Some(HeroClass::Rogue));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(HeroClass::parse("Paladin"), None);
        assert_eq!(HeroClass::parse(""), None);
    }

    #[test]
    fn test_stats_at_level_one_equal_base() {
        for class in HeroClass::all() {
            assert_eq!(class.stats_at_level(1), class.base_stats());
        }
    }

    #[test]
    fn test_stats_at_level_accumulate_growth() {
        let stats = HeroClass::Warrior.stats_at_level(5);
        // base 8 attack + 2 per level for 4 levels
        assert_eq!(stats.get(StatKind::Attack), 16);
        assert_eq!(stats.get(StatKind::Defense), 14);
        // warrior growth leaves magic power untouched
        assert_eq!(stats.get(StatKind::MagicPower), 1);
    }

    #[test]
    fn test_every_class_has_growth() {
        for class in HeroClass::all() {
            assert!(!class.growth().is_empty());
        }
    }
}
