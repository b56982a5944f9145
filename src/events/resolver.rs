use crate::content::registry::ContentRegistry;
use crate::core::config::EngineConfig;
use crate::core::error::EngineError;
use crate::events::effects::apply_effects;
use crate::events::requirements::is_satisfied;
use crate::events::types::{Choice, DungeonEvent};
use crate::party::types::Party;
use crate::progression::death::apply_death_penalty;
use crate::progression::leveling::settle_levels;
use rand::Rng;
use tracing::debug;

/// The outcome of resolving one choice or ability: narrative text, the
/// per-effect log, and whether the wipe path ran.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub event_id: String,
    pub choice_index: usize,
    pub outcome_text: String,
    pub log: Vec<String>,
    pub party_wiped: bool,
}

/// The hero who acts on a choice: the lowest-slot living member that
/// satisfies its requirement.
pub fn eligible_actor(choice: &Choice, party: &Party, config: &EngineConfig) -> Option<usize> {
    party.living().into_iter().find(|&slot| {
        is_satisfied(
            choice.requirement.as_ref(),
            &party.heroes[slot],
            party,
            config,
        )
    })
}

/// Indices of the choices the party can currently take, in declared order.
pub fn list_eligible_choices(
    event: &DungeonEvent,
    party: &Party,
    config: &EngineConfig,
) -> Vec<usize> {
    event
        .choices
        .iter()
        .enumerate()
        .filter(|(_, choice)| eligible_actor(choice, party, config).is_some())
        .map(|(index, _)| index)
        .collect()
}

/// First eligible choice, if any. Declared order is the author's
/// preference order, so this is the autoplay pick.
pub fn best_choice(event: &DungeonEvent, party: &Party, config: &EngineConfig) -> Option<usize> {
    event
        .choices
        .iter()
        .position(|choice| eligible_actor(choice, party, config).is_some())
}

fn run_level_ups(party: &mut Party, config: &EngineConfig, log: &mut Vec<String>) {
    for slot in 0..party.heroes.len() {
        if settle_levels(&mut party.heroes[slot], config) > 0 {
            let hero = &party.heroes[slot];
            log.push(format!("{} reaches level {}!", hero.name, hero.level));
        }
    }
}

/// Settles the aftermath shared by choices and abilities: level-ups for
/// freshly gained xp, then the wipe path (penalty + revival) if the whole
/// party went down.
fn settle_aftermath(
    party: &mut Party,
    xp_awarded: bool,
    config: &EngineConfig,
    log: &mut Vec<String>,
) -> bool {
    if xp_awarded {
        run_level_ups(party, config, log);
    }
    let party_wiped = party.is_wiped();
    if party_wiped {
        log.extend(apply_death_penalty(party, config.death_penalty, config));
    }
    party_wiped
}

/// Resolves a choice the caller picked. The index must be eligible;
/// anything else is an error, never a silent re-route.
pub fn resolve_choice(
    event: &DungeonEvent,
    choice_index: usize,
    party: &mut Party,
    registry: &ContentRegistry,
    config: &EngineConfig,
    rng: &mut impl Rng,
) -> Result<Resolution, EngineError> {
    let choice = event
        .choices
        .get(choice_index)
        .ok_or_else(|| EngineError::IneligibleChoice {
            event: event.id.clone(),
            choice: choice_index,
            reason: format!("the event has {} choices", event.choices.len()),
        })?;
    let actor =
        eligible_actor(choice, party, config).ok_or_else(|| EngineError::IneligibleChoice {
            event: event.id.clone(),
            choice: choice_index,
            reason: "no living hero satisfies its requirement".to_string(),
        })?;
    debug!(event = %event.id, choice = choice_index, actor, "resolving choice");

    let report = apply_effects(&choice.outcome.effects, party, actor, registry, config, rng);
    let mut log = report.log;
    let party_wiped = settle_aftermath(party, report.xp_awarded, config, &mut log);

    party.remember_event(&event.id, config.event_memory);

    Ok(Resolution {
        event_id: event.id.clone(),
        choice_index,
        outcome_text: choice.outcome.text.clone(),
        log,
        party_wiped,
    })
}

/// Fires one of a hero's learned abilities through the same effect
/// pipeline as event outcomes. Cooldown, class restriction, and the
/// ability's own requirement are all enforced here.
pub fn resolve_ability(
    party: &mut Party,
    hero_slot: usize,
    ability_index: usize,
    registry: &ContentRegistry,
    config: &EngineConfig,
    rng: &mut impl Rng,
) -> Result<Resolution, EngineError> {
    let hero = party
        .heroes
        .get(hero_slot)
        .ok_or_else(|| EngineError::IneligibleChoice {
            event: "ability".to_string(),
            choice: ability_index,
            reason: format!("no hero in slot {}", hero_slot),
        })?;
    let state = hero
        .abilities
        .get(ability_index)
        .ok_or_else(|| EngineError::IneligibleChoice {
            event: "ability".to_string(),
            choice: ability_index,
            reason: format!("{} has no such ability", hero.name),
        })?;
    let ability_id = state.ability_id.clone();
    if !hero.alive {
        return Err(EngineError::IneligibleChoice {
            event: ability_id,
            choice: ability_index,
            reason: format!("{} is defeated", hero.name),
        });
    }
    if state.cooldown_remaining > 0 {
        return Err(EngineError::IneligibleChoice {
            event: ability_id,
            choice: ability_index,
            reason: format!("on cooldown for {} more events", state.cooldown_remaining),
        });
    }
    let ability = registry.ability(&ability_id).ok_or_else(|| {
        EngineError::configuration(format!(
            "{} knows '{}' but no such ability is defined",
            hero.name, ability_id
        ))
    })?;
    if let Some(class) = &ability.class {
        if !class.eq_ignore_ascii_case(hero.class.name()) {
            return Err(EngineError::IneligibleChoice {
                event: ability_id,
                choice: ability_index,
                reason: format!("restricted to class {}", class),
            });
        }
    }
    if !is_satisfied(ability.requirement.as_ref(), hero, party, config) {
        return Err(EngineError::IneligibleChoice {
            event: ability_id,
            choice: ability_index,
            reason: "its requirement is not met".to_string(),
        });
    }
    let actor_name = hero.name.clone();
    debug!(ability = %ability_id, hero = %actor_name, "resolving ability");

    let report = apply_effects(&ability.effects, party, hero_slot, registry, config, rng);
    party.heroes[hero_slot].abilities[ability_index].cooldown_remaining = ability.cooldown;

    let mut log = report.log;
    let party_wiped = settle_aftermath(party, report.xp_awarded, config, &mut log);

    Ok(Resolution {
        event_id: ability_id,
        choice_index: ability_index,
        outcome_text: format!("{} uses {}.", actor_name, ability.name),
        log,
        party_wiped,
    })
}
