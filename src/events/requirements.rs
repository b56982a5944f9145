use crate::core::config::EngineConfig;
use crate::core::scaling::{scale, ScalingCategory};
use crate::events::types::Requirement;
use crate::party::hero::Hero;
use crate::party::types::Party;

/// Pure predicate: does this hero (in this party, at this depth) satisfy
/// the requirement? No requirement means always eligible.
///
/// Stat thresholds and gold costs are depth-scaled so one authored check
/// stays meaningful thirty floors down; at depth zero both equal the
/// authored values.
pub fn is_satisfied(
    requirement: Option<&Requirement>,
    hero: &Hero,
    party: &Party,
    config: &EngineConfig,
) -> bool {
    let Some(requirement) = requirement else {
        return true;
    };
    match requirement {
        Requirement::Class { class } => hero.class.name().eq_ignore_ascii_case(class),
        Requirement::Stat { stat, min_value } => {
            let threshold = scale(
                *min_value as f64,
                party.depth,
                ScalingCategory::StatRequirements,
                &config.scaling,
            )
            .round() as u32;
            hero.effective_stat(*stat) >= threshold
        }
        Requirement::Gold { amount } => party.gold >= scaled_gold_amount(*amount, party, config),
    }
}

/// The depth-scaled gold amount a requirement checks and a gold-debit
/// effect charges. Shared so the two can never disagree.
pub fn scaled_gold_amount(amount: u64, party: &Party, config: &EngineConfig) -> u64 {
    scale(
        amount as f64,
        party.depth,
        ScalingCategory::Rewards,
        &config.scaling,
    )
    .round() as u64
}
