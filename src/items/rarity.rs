use crate::core::error::EngineError;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A named loot-quality bucket. Eligibility is gated by `min_floor`; the
/// draw among eligible tiers is purely weight-proportional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RarityTier {
    pub id: String,
    pub name: String,
    pub weight: f64,
    #[serde(default)]
    pub min_floor: u32,
    pub stat_multiplier: f64,
}

/// Validated, ordered tier table. Order is rarity order: multipliers must
/// strictly increase from front to back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<RarityTier>", into = "Vec<RarityTier>")]
pub struct RarityTable {
    tiers: Vec<RarityTier>,
}

impl TryFrom<Vec<RarityTier>> for RarityTable {
    type Error = EngineError;

    fn try_from(tiers: Vec<RarityTier>) -> Result<Self, Self::Error> {
        RarityTable::new(tiers)
    }
}

impl From<RarityTable> for Vec<RarityTier> {
    fn from(table: RarityTable) -> Self {
        table.tiers
    }
}

impl RarityTable {
    pub fn new(tiers: Vec<RarityTier>) -> Result<Self, EngineError> {
        if tiers.is_empty() {
            return Err(EngineError::configuration("rarity table is empty"));
        }
        let mut previous_multiplier = f64::NEG_INFINITY;
        for (index, tier) in tiers.iter().enumerate() {
            if tier.id.is_empty() {
                return Err(EngineError::configuration(format!(
                    "rarity tier {} has an empty id",
                    index
                )));
            }
            if tiers[..index].iter().any(|other| other.id == tier.id) {
                return Err(EngineError::configuration(format!(
                    "duplicate rarity tier id '{}'",
                    tier.id
                )));
            }
            if !tier.weight.is_finite() || tier.weight <= 0.0 {
                return Err(EngineError::configuration(format!(
                    "rarity tier '{}' needs a positive finite weight, got {}",
                    tier.id, tier.weight
                )));
            }
            if !tier.stat_multiplier.is_finite() || tier.stat_multiplier < 0.0 {
                return Err(EngineError::configuration(format!(
                    "rarity tier '{}' needs a non-negative finite stat multiplier, got {}",
                    tier.id, tier.stat_multiplier
                )));
            }
            if tier.stat_multiplier <= previous_multiplier {
                return Err(EngineError::configuration(format!(
                    "rarity tier '{}' breaks the strictly increasing multiplier order",
                    tier.id
                )));
            }
            previous_multiplier = tier.stat_multiplier;
        }
        Ok(Self { tiers })
    }

    pub fn tiers(&self) -> &[RarityTier] {
        &self.tiers
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    pub fn tier(&self, index: usize) -> Option<&RarityTier> {
        self.tiers.get(index)
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.tiers.iter().position(|tier| tier.id == id)
    }

    /// Samples a tier for the given depth: only tiers with
    /// `min_floor <= depth` are eligible, and the draw is uniform over
    /// their cumulative weight. An empty eligible set is a content bug.
    pub fn resolve(
        &self,
        depth: u32,
        rng: &mut impl Rng,
    ) -> Result<(usize, &RarityTier), EngineError> {
        let eligible: Vec<(usize, &RarityTier)> = self
            .tiers
            .iter()
            .enumerate()
            .filter(|(_, tier)| tier.min_floor <= depth)
            .collect();

        if eligible.is_empty() {
            return Err(EngineError::configuration(format!(
                "no rarity tier is obtainable at depth {}",
                depth
            )));
        }

        let total_weight: f64 = eligible.iter().map(|(_, tier)| tier.weight).sum();
        let roll = rng.gen::<f64>() * total_weight;

        let mut accumulated = 0.0;
        for &(index, tier) in &eligible {
            accumulated += tier.weight;
            if roll < accumulated {
                return Ok((index, tier));
            }
        }
        // Floating-point tail: the roll landed exactly on the total.
        let (index, tier) = eligible[eligible.len() - 1];
        Ok((index, tier))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn sample_table() -> RarityTable {
        RarityTable::new(vec![
            RarityTier {
                id: "common".to_string(),
                name: "Common".to_string(),
                weight: 60.0,
                min_floor: 0,
                stat_multiplier: 1.0,
            },
            RarityTier {
                id: "rare".to_string(),
                name: "Rare".to_string(),
                weight: 30.0,
                min_floor: 3,
                stat_multiplier: 1.8,
            },
            RarityTier {
                id: "legendary".to_string(),
                name: "Legendary".to_string(),
                weight: 10.0,
                min_floor: 8,
                stat_multiplier: 3.0,
            },
        ])
        .unwrap()
    }

    #[test]
    fn test_resolve_respects_min_floor() {
        let table = sample_table();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for depth in 0..20 {
            for _ in 0..200 {
                let (_, tier) = table.resolve(depth, &mut rng).unwrap();
                assert!(tier.min_floor <= depth);
            }
        }
    }

    #[test]
    fn test_shallow_depth_only_draws_common() {
        let table = sample_table();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..100 {
            let (index, tier) = table.resolve(2, &mut rng).unwrap();
            assert_eq!(index, 0);
            assert_eq!(tier.id, "common");
        }
    }

    #[test]
    fn test_eligibility_is_monotonic_in_depth() {
        let table = sample_table();
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        // once past min_floor 8, all three tiers appear over enough draws
        let mut seen = [false; 3];
        for _ in 0..2000 {
            let (index, _) = table.resolve(10, &mut rng).unwrap();
            seen[index] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_weight_proportional_distribution() {
        let table = sample_table();
        let mut rng = ChaCha8Rng::seed_from_u64(1234);
        let mut counts = [0u32; 3];
        let draws = 10_000;
        for _ in 0..draws {
            let (index, _) = table.resolve(10, &mut rng).unwrap();
            counts[index] += 1;
        }
        // weights 60/30/10 - allow generous tolerance for a seeded sample
        let common_fraction = counts[0] as f64 / draws as f64;
        let rare_fraction = counts[1] as f64 / draws as f64;
        let legendary_fraction = counts[2] as f64 / draws as f64;
        assert!((common_fraction - 0.60).abs() < 0.05);
        assert!((rare_fraction - 0.30).abs() < 0.05);
        assert!((legendary_fraction - 0.10).abs() < 0.05);
    }

    #[test]
    fn test_empty_table_rejected() {
        assert!(RarityTable::new(vec![]).is_err());
    }

    #[test]
    fn test_no_eligible_tier_is_configuration_error() {
        let table = RarityTable::new(vec![RarityTier {
            id: "deep".to_string(),
            name: "Deep".to_string(),
            weight: 1.0,
            min_floor: 5,
            stat_multiplier: 1.0,
        }])
        .unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(table.resolve(0, &mut rng).is_err());
    }

    #[test]
    fn test_rejects_nonpositive_weight() {
        let result = RarityTable::new(vec![RarityTier {
            id: "bad".to_string(),
            name: "Bad".to_string(),
            weight: 0.0,
            min_floor: 0,
            stat_multiplier: 1.0,
        }]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_nan_weight() {
        let result = RarityTable::new(vec![RarityTier {
            id: "bad".to_string(),
            name: "Bad".to_string(),
            weight: f64::NAN,
            min_floor: 0,
            stat_multiplier: 1.0,
        }]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_unordered_multipliers() {
        let result = RarityTable::new(vec![
            RarityTier {
                id: "a".to_string(),
                name: "A".to_string(),
                weight: 1.0,
                min_floor: 0,
                stat_multiplier: 2.0,
            },
            RarityTier {
                id: "b".to_string(),
                name: "B".to_string(),
                weight: 1.0,
                min_floor: 0,
                stat_multiplier: 1.5,
            },
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let result = RarityTable::new(vec![
            RarityTier {
                id: "dup".to_string(),
                name: "A".to_string(),
                weight: 1.0,
                min_floor: 0,
                stat_multiplier: 1.0,
            },
            RarityTier {
                id: "dup".to_string(),
                name: "B".to_string(),
                weight: 1.0,
                min_floor: 0,
                stat_multiplier: 2.0,
            },
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_index_of() {
        let table = sample_table();
        assert_eq!(table.index_of("rare"), Some(1));
        assert_eq!(table.index_of("mythic"), None);
    }
}
