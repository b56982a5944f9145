use crate::core::constants::{
    DAMAGE_SCALING_RATE, HEALING_SCALING_RATE, REWARD_SCALING_RATE,
    STAT_REQUIREMENT_SCALING_RATE,
};
use crate::core::error::EngineError;
use serde::{Deserialize, Serialize};

/// Balance category a scaled value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalingCategory {
    Damage,
    Healing,
    Rewards,
    StatRequirements,
}

/// Per-depth growth rates for each scaling category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScalingRates {
    pub damage: f64,
    pub healing: f64,
    pub rewards: f64,
    pub stat_requirements: f64,
}

impl Default for ScalingRates {
    fn default() -> Self {
        Self {
            damage: DAMAGE_SCALING_RATE,
            healing: HEALING_SCALING_RATE,
            rewards: REWARD_SCALING_RATE,
            stat_requirements: STAT_REQUIREMENT_SCALING_RATE,
        }
    }
}

impl ScalingRates {
    pub fn rate(&self, category: ScalingCategory) -> f64 {
        match category {
            ScalingCategory::Damage => self.damage,
            ScalingCategory::Healing => self.healing,
            ScalingCategory::Rewards => self.rewards,
            ScalingCategory::StatRequirements => self.stat_requirements,
        }
    }

    /// Rejects NaN and negative rates. Authored rates are data bugs, not
    /// runtime conditions, so validation happens once at load.
    pub fn validate(&self) -> Result<(), EngineError> {
        for (name, rate) in [
            ("damage", self.damage),
            ("healing", self.healing),
            ("rewards", self.rewards),
            ("stat_requirements", self.stat_requirements),
        ] {
            if !rate.is_finite() || rate < 0.0 {
                return Err(EngineError::configuration(format!(
                    "scaling rate '{}' must be a finite non-negative number, got {}",
                    name, rate
                )));
            }
        }
        Ok(())
    }
}

/// Linear depth scaling shared by combat and reward math.
///
/// Growth is unbounded with depth; the only floor is depth itself, which
/// as a `u32` can never be negative.
pub fn scale(base: f64, depth: u32, category: ScalingCategory, rates: &ScalingRates) -> f64 {
    base * (1.0 + rates.rate(category) * depth as f64)
}
