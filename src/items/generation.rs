use crate::core::error::EngineError;
use crate::core::scaling::{scale, ScalingCategory, ScalingRates};
use crate::items::rarity::RarityTable;
use crate::items::types::{GeneratedItem, ItemTemplate};
use rand::Rng;
use uuid::Uuid;

/// Rolls a rarity for the depth and materializes the template into a
/// concrete item.
///
/// The drawn tier is clamped into the template's `[min_rarity, max_rarity]`
/// band before any stat math, so a draw above the band always produces the
/// same stats as a draw exactly at `max_rarity`. Each stat is
/// `base * tier multiplier * depth factor`, rounded; value is
/// `base_value * tier multiplier`, rounded. A template with no stats and no
/// value still yields a valid zero-stat item.
pub fn generate_item(
    template: &ItemTemplate,
    depth: u32,
    table: &RarityTable,
    rates: &ScalingRates,
    rng: &mut impl Rng,
) -> Result<GeneratedItem, EngineError> {
    if template.min_rarity > template.max_rarity || template.max_rarity >= table.len() {
        return Err(EngineError::configuration(format!(
            "template '{}' has an invalid rarity band [{}, {}] for a {}-tier table",
            template.id,
            template.min_rarity,
            template.max_rarity,
            table.len()
        )));
    }

    let (drawn, _) = table.resolve(depth, rng)?;
    let clamped = drawn.clamp(template.min_rarity, template.max_rarity);
    let tier = &table.tiers()[clamped];

    let depth_factor = scale(1.0, depth, ScalingCategory::Rewards, rates);
    let stats = template.stats.scaled(tier.stat_multiplier * depth_factor);
    let value = (template.base_value as f64 * tier.stat_multiplier).round() as u64;

    let name = if clamped == 0 {
        template.name.clone()
    } else {
        format!("{} {}", tier.name, template.name)
    };

    Ok(GeneratedItem {
        id: Uuid::new_v4(),
        template_id: template.id.clone(),
        name,
        slot: template.slot,
        rarity: clamped,
        rarity_name: tier.name.clone(),
        stats,
        value,
        depth,
        icon: template.icon.clone(),
    })
}

/// Uniformly picks a template whose depth gate has been reached.
pub fn roll_template<'a>(
    templates: &'a [ItemTemplate],
    depth: u32,
    rng: &mut impl Rng,
) -> Option<&'a ItemTemplate> {
    let eligible: Vec<&ItemTemplate> = templates
        .iter()
        .filter(|template| template.depth_gate <= depth)
        .collect();
    if eligible.is_empty() {
        return None;
    }
    Some(eligible[rng.gen_range(0..eligible.len())])
}
