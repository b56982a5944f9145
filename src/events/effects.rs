use crate::content::registry::ContentRegistry;
use crate::core::config::EngineConfig;
use crate::core::error::EngineError;
use crate::core::scaling::{scale, ScalingCategory};
use crate::events::requirements::scaled_gold_amount;
use crate::events::types::{Effect, EffectKind, TargetSelector};
use crate::items::generation::{generate_item, roll_template};
use crate::items::scoring::auto_equip_if_better;
use crate::party::stats::{StatKind, StatModifier};
use crate::party::types::Party;
use rand::Rng;
use tracing::warn;

/// What a batch of effects did to the party, as human-readable lines plus
/// the flags the orchestrator needs for follow-up passes.
#[derive(Debug, Clone, Default)]
pub struct EffectReport {
    pub log: Vec<String>,
    pub xp_awarded: bool,
}

/// Applies a batch of effects in declared order. Each effect is
/// independent: an unknown or malformed one is logged and skipped, and
/// the rest of the batch still runs. Heroes defeated mid-batch stop being
/// valid targets for the effects after the one that felled them.
pub fn apply_effects(
    effects: &[Effect],
    party: &mut Party,
    actor: usize,
    registry: &ContentRegistry,
    config: &EngineConfig,
    rng: &mut impl Rng,
) -> EffectReport {
    let mut report = EffectReport::default();
    for effect in effects {
        if let Err(error) = apply_effect(effect, party, actor, registry, config, rng, &mut report)
        {
            warn!(%error, "skipping effect");
            report
                .log
                .push("A strange energy fizzles without effect.".to_string());
        }
    }
    report
}

/// Living slots an effect with this selector lands on, resolved fresh per
/// effect so mid-batch defeats are respected.
fn resolve_targets(
    selector: TargetSelector,
    party: &Party,
    actor: usize,
    rng: &mut impl Rng,
) -> Vec<usize> {
    match selector {
        // The event is the enemy; both of these land on whoever engaged it.
        TargetSelector::Actor | TargetSelector::Enemy => party
            .heroes
            .get(actor)
            .filter(|hero| hero.alive)
            .map(|_| vec![actor])
            .unwrap_or_default(),
        TargetSelector::Ally => party
            .most_wounded_living()
            .map(|slot| vec![slot])
            .unwrap_or_default(),
        TargetSelector::All | TargetSelector::AllAllies => party.living(),
        TargetSelector::Random => {
            let living = party.living();
            if living.is_empty() {
                Vec::new()
            } else {
                vec![living[rng.gen_range(0..living.len())]]
            }
        }
        TargetSelector::Weakest => party
            .weakest_living()
            .map(|slot| vec![slot])
            .unwrap_or_default(),
        TargetSelector::Strongest => party
            .strongest_living()
            .map(|slot| vec![slot])
            .unwrap_or_default(),
    }
}

/// Effect value plus the actor-stat contribution, before depth scaling.
fn base_value(effect: &Effect, party: &Party, actor: usize) -> f64 {
    let mut base = effect.value;
    if let Some(scaling) = effect.scaling {
        if let Some(hero) = party.heroes.get(actor) {
            base += hero.effective_stat(scaling.stat) as f64 * scaling.ratio;
        }
    }
    base
}

#[allow(clippy::too_many_arguments)]
fn apply_effect(
    effect: &Effect,
    party: &mut Party,
    actor: usize,
    registry: &ContentRegistry,
    config: &EngineConfig,
    rng: &mut impl Rng,
    report: &mut EffectReport,
) -> Result<(), EngineError> {
    match effect.kind {
        EffectKind::Damage => {
            let targets = resolve_targets(effect.target, party, actor, rng);
            if targets.is_empty() {
                report
                    .log
                    .push("The blow finds no one left standing.".to_string());
                return Ok(());
            }
            let scaled = scale(
                base_value(effect, party, actor),
                party.depth,
                ScalingCategory::Damage,
                &config.scaling,
            )
            .round()
            .max(0.0) as u32;
            for slot in targets {
                let mitigation = if effect.true_damage {
                    0
                } else {
                    party.heroes[slot].effective_stat(StatKind::Defense)
                };
                let damage = scaled.saturating_sub(mitigation);
                party.heroes[slot].take_damage(damage);
                let hero = &party.heroes[slot];
                if hero.alive {
                    report
                        .log
                        .push(format!("{} takes {} damage.", hero.name, damage));
                } else {
                    report
                        .log
                        .push(format!("{} takes {} damage and falls!", hero.name, damage));
                }
            }
        }
        EffectKind::Heal => {
            let targets = resolve_targets(effect.target, party, actor, rng);
            if targets.is_empty() {
                report
                    .log
                    .push("The warmth washes over no one.".to_string());
                return Ok(());
            }
            let amount = scale(
                base_value(effect, party, actor),
                party.depth,
                ScalingCategory::Healing,
                &config.scaling,
            )
            .round()
            .max(0.0) as u32;
            for slot in targets {
                let restored = party.heroes[slot].heal(amount);
                let hero = &party.heroes[slot];
                report
                    .log
                    .push(format!("{} recovers {} HP.", hero.name, restored));
            }
        }
        EffectKind::Revive => match party.first_defeated() {
            Some(slot) => {
                let amount = scale(
                    base_value(effect, party, actor),
                    party.depth,
                    ScalingCategory::Healing,
                    &config.scaling,
                )
                .round()
                .max(0.0) as u32;
                party.heroes[slot].revive(amount);
                let hero = &party.heroes[slot];
                report
                    .log
                    .push(format!("{} rises again with {} HP!", hero.name, hero.hp));
            }
            None => {
                report
                    .log
                    .push("The ritual finds no one to restore.".to_string());
            }
        },
        EffectKind::Buff | EffectKind::Debuff => {
            let stat = effect.stat.ok_or_else(|| {
                EngineError::configuration(format!(
                    "{:?} effect is missing its stat",
                    effect.kind
                ))
            })?;
            let targets = resolve_targets(effect.target, party, actor, rng);
            if targets.is_empty() {
                report.log.push("The charm drifts away unspent.".to_string());
                return Ok(());
            }
            // Buff magnitudes are authored flat, not depth-scaled.
            let magnitude = effect.value.round().abs() as i32;
            let amount = if effect.kind == EffectKind::Debuff {
                -magnitude
            } else {
                magnitude
            };
            let duration = effect.duration.unwrap_or(1);
            for slot in targets {
                party.heroes[slot].add_modifier(StatModifier {
                    stat,
                    amount,
                    remaining: duration,
                });
                let hero = &party.heroes[slot];
                report.log.push(format!(
                    "{} {} {}{} {} for {} encounters.",
                    hero.name,
                    if amount >= 0 { "gains" } else { "suffers" },
                    if amount >= 0 { "+" } else { "" },
                    amount,
                    stat.display_name(),
                    duration
                ));
            }
        }
        EffectKind::Gold => {
            if effect.value >= 0.0 {
                let gain = scale(
                    effect.value,
                    party.depth,
                    ScalingCategory::Rewards,
                    &config.scaling,
                )
                .round() as u64;
                party.gold = party.gold.saturating_add(gain);
                report.log.push(format!("The party gains {} gold.", gain));
            } else {
                // Debits are gated by a gold requirement on the choice; if
                // the caller skipped that, saturate at zero rather than
                // going negative.
                let cost = scaled_gold_amount((-effect.value) as u64, party, config);
                let paid = cost.min(party.gold);
                party.gold -= paid;
                report.log.push(format!("The party pays {} gold.", paid));
            }
        }
        EffectKind::Xp => {
            let amount = scale(
                effect.value,
                party.depth,
                ScalingCategory::Rewards,
                &config.scaling,
            )
            .round()
            .max(0.0) as u64;
            let living = party.living();
            if living.is_empty() {
                report
                    .log
                    .push("There is no one left to learn from this.".to_string());
                return Ok(());
            }
            for slot in living {
                party.heroes[slot].xp += amount;
            }
            report.xp_awarded = true;
            report
                .log
                .push(format!("The party gains {} experience.", amount));
        }
        EffectKind::Item => {
            let Some(template) = roll_template(registry.templates(), party.depth, rng) else {
                report
                    .log
                    .push("The cache holds nothing of value.".to_string());
                return Ok(());
            };
            let item = generate_item(
                template,
                party.depth,
                registry.rarity_table(),
                &config.scaling,
                rng,
            )?;
            let item_name = item.name.clone();
            let finder = party
                .heroes
                .get(actor)
                .filter(|hero| hero.alive)
                .map(|_| actor)
                .or_else(|| party.living().first().copied());
            match finder {
                Some(slot) => {
                    report
                        .log
                        .push(format!("{} finds {}.", party.heroes[slot].name, item_name));
                    let (equipped, leftover) =
                        auto_equip_if_better(&mut party.heroes[slot], item);
                    if equipped {
                        report
                            .log
                            .push(format!("{} equips {}.", party.heroes[slot].name, item_name));
                    }
                    if let Some(leftover) = leftover {
                        party.add_to_inventory(leftover);
                    }
                }
                None => {
                    report.log.push(format!("{} lies unclaimed.", item_name));
                    party.add_to_inventory(item);
                }
            }
        }
        EffectKind::Unknown => {
            return Err(EngineError::UnknownEffect(
                "effect kind not recognized by this build".to_string(),
            ));
        }
    }
    Ok(())
}
