use crate::core::constants::{
    EVENT_MEMORY_SIZE, HEAL_TO_FULL_ON_LEVEL_UP, HP_PER_LEVEL, LOSE_GOLD_ON_WIPE, MAX_LEVEL,
    MAX_PARTY_SIZE, XP_PER_LEVEL,
};
use crate::core::error::EngineError;
use crate::core::scaling::ScalingRates;
use serde::{Deserialize, Serialize};

/// Policy applied when the whole party is defeated at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DeathPenalty {
    None,
    #[default]
    HalveLevels,
    ResetLevels,
    LoseEquipment,
}

/// Tunable balance knobs consumed across the engine.
///
/// Unknown or missing fields fall back to defaults so older config files
/// keep loading as knobs are added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub scaling: ScalingRates,
    pub xp_per_level: u64,
    pub max_level: u32,
    pub hp_per_level: u32,
    pub heal_to_full_on_level_up: bool,
    pub death_penalty: DeathPenalty,
    pub lose_gold_on_wipe: bool,
    pub party_size: usize,
    pub event_memory: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            scaling: ScalingRates::default(),
            xp_per_level: XP_PER_LEVEL,
            max_level: MAX_LEVEL,
            hp_per_level: HP_PER_LEVEL,
            heal_to_full_on_level_up: HEAL_TO_FULL_ON_LEVEL_UP,
            death_penalty: DeathPenalty::default(),
            lose_gold_on_wipe: LOSE_GOLD_ON_WIPE,
            party_size: MAX_PARTY_SIZE,
            event_memory: EVENT_MEMORY_SIZE,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), EngineError> {
        self.scaling.validate()?;
        if self.xp_per_level == 0 {
            return Err(EngineError::configuration("xp_per_level must be positive"));
        }
        if self.max_level == 0 {
            return Err(EngineError::configuration("max_level must be positive"));
        }
        if self.party_size == 0 {
            return Err(EngineError::configuration("party_size must be positive"));
        }
        Ok(())
    }
}
