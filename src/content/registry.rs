use crate::core::error::EngineError;
use crate::events::types::{Ability, DungeonEvent, Effect, EffectKind, EventKind, Requirement};
use crate::items::rarity::RarityTable;
use crate::items::types::ItemTemplate;
use crate::party::class::HeroClass;
use std::collections::HashSet;
use tracing::info;

/// All static content the engine consumes, validated once at construction
/// and passed around by reference afterwards. No global state.
#[derive(Debug, Clone)]
pub struct ContentRegistry {
    rarity_table: RarityTable,
    templates: Vec<ItemTemplate>,
    events: Vec<DungeonEvent>,
    abilities: Vec<Ability>,
}

impl ContentRegistry {
    /// Validates and bundles a content set. Any malformed entry is fatal
    /// here rather than a surprise mid-run.
    pub fn new(
        rarity_table: RarityTable,
        templates: Vec<ItemTemplate>,
        events: Vec<DungeonEvent>,
        abilities: Vec<Ability>,
    ) -> Result<Self, EngineError> {
        check_unique_ids("item template", templates.iter().map(|t| t.id.as_str()))?;
        check_unique_ids("event", events.iter().map(|e| e.id.as_str()))?;
        check_unique_ids("ability", abilities.iter().map(|a| a.id.as_str()))?;

        for template in &templates {
            validate_template(template, rarity_table.len())?;
        }
        for event in &events {
            validate_event(event)?;
        }
        for ability in &abilities {
            validate_ability(ability)?;
        }

        info!(
            tiers = rarity_table.len(),
            templates = templates.len(),
            events = events.len(),
            abilities = abilities.len(),
            "content registry validated"
        );
        Ok(Self {
            rarity_table,
            templates,
            events,
            abilities,
        })
    }

    /// The content set shipped with the crate.
    pub fn builtin() -> Result<Self, EngineError> {
        crate::content::data::builtin()
    }

    pub fn rarity_table(&self) -> &RarityTable {
        &self.rarity_table
    }

    pub fn templates(&self) -> &[ItemTemplate] {
        &self.templates
    }

    pub fn events(&self) -> &[DungeonEvent] {
        &self.events
    }

    pub fn abilities(&self) -> &[Ability] {
        &self.abilities
    }

    pub fn event(&self, id: &str) -> Option<&DungeonEvent> {
        self.events.iter().find(|event| event.id == id)
    }

    pub fn template(&self, id: &str) -> Option<&ItemTemplate> {
        self.templates.iter().find(|template| template.id == id)
    }

    pub fn ability(&self, id: &str) -> Option<&Ability> {
        self.abilities.iter().find(|ability| ability.id == id)
    }

    pub fn events_of_kind(&self, kind: EventKind) -> Vec<&DungeonEvent> {
        self.events.iter().filter(|event| event.kind == kind).collect()
    }

    /// Abilities a hero of this class may learn: unrestricted ones plus
    /// those matching the class by name.
    pub fn abilities_for_class(&self, class: HeroClass) -> Vec<&Ability> {
        self.abilities
            .iter()
            .filter(|ability| match &ability.class {
                Some(name) => name.eq_ignore_ascii_case(class.name()),
                None => true,
            })
            .collect()
    }
}

fn check_unique_ids<'a>(
    what: &str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), EngineError> {
    let mut seen = HashSet::new();
    for id in ids {
        if id.is_empty() {
            return Err(EngineError::configuration(format!("{} with an empty id", what)));
        }
        if !seen.insert(id) {
            return Err(EngineError::configuration(format!(
                "duplicate {} id '{}'",
                what, id
            )));
        }
    }
    Ok(())
}

fn validate_template(template: &ItemTemplate, tier_count: usize) -> Result<(), EngineError> {
    if template.min_rarity > template.max_rarity {
        return Err(EngineError::configuration(format!(
            "item template '{}' has min_rarity {} above max_rarity {}",
            template.id, template.min_rarity, template.max_rarity
        )));
    }
    if template.max_rarity >= tier_count {
        return Err(EngineError::configuration(format!(
            "item template '{}' names rarity {} but the table has {} tiers",
            template.id, template.max_rarity, tier_count
        )));
    }
    Ok(())
}

fn validate_event(event: &DungeonEvent) -> Result<(), EngineError> {
    if event.choices.len() < 2 {
        return Err(EngineError::configuration(format!(
            "event '{}' needs at least 2 choices, found {}",
            event.id,
            event.choices.len()
        )));
    }
    for (index, choice) in event.choices.iter().enumerate() {
        let context = format!("event '{}' choice {}", event.id, index);
        if let Some(requirement) = &choice.requirement {
            validate_requirement(&context, requirement)?;
        }
        for effect in &choice.outcome.effects {
            validate_effect(&context, effect)?;
        }
    }
    Ok(())
}

fn validate_ability(ability: &Ability) -> Result<(), EngineError> {
    let context = format!("ability '{}'", ability.id);
    if ability.effects.is_empty() {
        return Err(EngineError::configuration(format!("{} has no effects", context)));
    }
    if let Some(class) = &ability.class {
        if HeroClass::parse(class).is_none() {
            return Err(EngineError::configuration(format!(
                "{} restricts to unknown class '{}'",
                context, class
            )));
        }
    }
    if let Some(requirement) = &ability.requirement {
        validate_requirement(&context, requirement)?;
    }
    for effect in &ability.effects {
        validate_effect(&context, effect)?;
    }
    Ok(())
}

fn validate_requirement(context: &str, requirement: &Requirement) -> Result<(), EngineError> {
    if let Requirement::Class { class } = requirement {
        if HeroClass::parse(class).is_none() {
            return Err(EngineError::configuration(format!(
                "{} requires unknown class '{}'",
                context, class
            )));
        }
    }
    Ok(())
}

/// Unknown kinds pass validation; the applicator logs and skips them at
/// runtime so one unrecognized entry cannot sink a whole content file.
fn validate_effect(context: &str, effect: &Effect) -> Result<(), EngineError> {
    if effect.kind == EffectKind::Unknown {
        return Ok(());
    }
    if !effect.value.is_finite() {
        return Err(EngineError::configuration(format!(
            "{} has a non-finite effect value",
            context
        )));
    }
    if let Some(scaling) = effect.scaling {
        if !scaling.ratio.is_finite() {
            return Err(EngineError::configuration(format!(
                "{} has a non-finite scaling ratio",
                context
            )));
        }
    }
    if matches!(effect.kind, EffectKind::Buff | EffectKind::Debuff) {
        if effect.stat.is_none() {
            return Err(EngineError::configuration(format!(
                "{} has a {:?} effect with no stat",
                context, effect.kind
            )));
        }
        if effect.duration == Some(0) {
            return Err(EngineError::configuration(format!(
                "{} has a modifier with zero duration",
                context
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::types::{Choice, Outcome, TargetSelector};
    use crate::items::rarity::RarityTier;
    use crate::items::types::ItemSlot;
    use crate::party::stats::StatBlock;

    fn one_tier_table() -> RarityTable {
        RarityTable::new(vec![RarityTier {
            id: "common".to_string(),
            name: "Common".to_string(),
            weight: 1.0,
            min_floor: 0,
            stat_multiplier: 1.0,
        }])
        .unwrap()
    }

    fn plain_effect(kind: EffectKind) -> Effect {
        Effect {
            kind,
            target: TargetSelector::All,
            value: 5.0,
            duration: None,
            stat: None,
            scaling: None,
            true_damage: false,
        }
    }

    fn two_choice_event(id: &str) -> DungeonEvent {
        DungeonEvent {
            id: id.to_string(),
            kind: EventKind::Rest,
            title: "Quiet Alcove".to_string(),
            description: String::new(),
            depth_gate: 0,
            icon: String::new(),
            choices: vec![
                Choice {
                    text: "Rest".to_string(),
                    requirement: None,
                    outcome: Outcome {
                        text: "You rest.".to_string(),
                        effects: vec![plain_effect(EffectKind::Heal)],
                    },
                },
                Choice {
                    text: "Move on".to_string(),
                    requirement: None,
                    outcome: Outcome {
                        text: "You move on.".to_string(),
                        effects: vec![],
                    },
                },
            ],
        }
    }

    #[test]
    fn test_valid_registry_builds() {
        let registry = ContentRegistry::new(
            one_tier_table(),
            vec![],
            vec![two_choice_event("alcove")],
            vec![],
        )
        .unwrap();
        assert!(registry.event("alcove").is_some());
        assert!(registry.event("missing").is_none());
    }

    #[test]
    fn test_duplicate_event_ids_rejected() {
        let result = ContentRegistry::new(
            one_tier_table(),
            vec![],
            vec![two_choice_event("dup"), two_choice_event("dup")],
            vec![],
        );
        assert!(matches!(result, Err(EngineError::Configuration(_))));
    }

    #[test]
    fn test_single_choice_event_rejected() {
        let mut event = two_choice_event("thin");
        event.choices.truncate(1);
        let result = ContentRegistry::new(one_tier_table(), vec![], vec![event], vec![]);
        assert!(result.is_err());
    }

    #[test]
    fn test_buff_without_stat_rejected() {
        let mut event = two_choice_event("bad_buff");
        event.choices[0].outcome.effects = vec![plain_effect(EffectKind::Buff)];
        let result = ContentRegistry::new(one_tier_table(), vec![], vec![event], vec![]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_effect_kind_tolerated() {
        let mut event = two_choice_event("future");
        event.choices[0].outcome.effects = vec![plain_effect(EffectKind::Unknown)];
        let result = ContentRegistry::new(one_tier_table(), vec![], vec![event], vec![]);
        assert!(result.is_ok());
    }

    #[test]
    fn test_unknown_requirement_class_rejected() {
        let mut event = two_choice_event("classy");
        event.choices[0].requirement = Some(Requirement::Class {
            class: "Necromancer".to_string(),
        });
        let result = ContentRegistry::new(one_tier_table(), vec![], vec![event], vec![]);
        assert!(result.is_err());
    }

    #[test]
    fn test_template_band_outside_table_rejected() {
        let template = ItemTemplate {
            id: "blade".to_string(),
            name: "Blade".to_string(),
            slot: ItemSlot::Weapon,
            stats: StatBlock::new(),
            min_rarity: 0,
            max_rarity: 3,
            base_value: 0,
            depth_gate: 0,
            icon: String::new(),
        };
        let result = ContentRegistry::new(one_tier_table(), vec![template], vec![], vec![]);
        assert!(result.is_err());
    }

    #[test]
    fn test_ability_without_effects_rejected() {
        let ability = Ability {
            id: "hollow".to_string(),
            name: "Hollow".to_string(),
            class: None,
            cooldown: 1,
            requirement: None,
            effects: vec![],
            icon: String::new(),
            description: String::new(),
        };
        let result = ContentRegistry::new(one_tier_table(), vec![], vec![], vec![ability]);
        assert!(result.is_err());
    }

    #[test]
    fn test_abilities_filtered_by_class() {
        let heal = Ability {
            id: "mend".to_string(),
            name: "Mend".to_string(),
            class: Some("cleric".to_string()),
            cooldown: 2,
            requirement: None,
            effects: vec![plain_effect(EffectKind::Heal)],
            icon: String::new(),
            description: String::new(),
        };
        let shout = Ability {
            id: "shout".to_string(),
            name: "Shout".to_string(),
            class: None,
            cooldown: 1,
            requirement: None,
            effects: vec![plain_effect(EffectKind::Xp)],
            icon: String::new(),
            description: String::new(),
        };
        let registry =
            ContentRegistry::new(one_tier_table(), vec![], vec![], vec![heal, shout]).unwrap();
        let cleric = registry.abilities_for_class(HeroClass::Cleric);
        assert_eq!(cleric.len(), 2);
        let rogue = registry.abilities_for_class(HeroClass::Rogue);
        assert_eq!(rogue.len(), 1);
        assert_eq!(rogue[0].id, "shout");
    }
}
