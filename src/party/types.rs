use crate::core::constants::STARTING_GOLD;
use crate::core::error::EngineError;
use crate::items::types::GeneratedItem;
use crate::party::hero::Hero;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use uuid::Uuid;

/// The full run state: hero slots in marching order, shared resources, and
/// the recent-event memory that biases encounter selection against repeats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Party {
    pub heroes: Vec<Hero>,
    pub gold: u64,
    pub depth: u32,
    #[serde(default)]
    pub inventory: Vec<GeneratedItem>,
    #[serde(default)]
    pub recent_events: VecDeque<String>,
}

impl Party {
    pub fn new(heroes: Vec<Hero>) -> Self {
        Self {
            heroes,
            gold: STARTING_GOLD,
            depth: 0,
            inventory: Vec::new(),
            recent_events: VecDeque::new(),
        }
    }

    pub fn add_hero(&mut self, hero: Hero, max_size: usize) -> Result<(), EngineError> {
        if self.heroes.len() >= max_size {
            return Err(EngineError::configuration(format!(
                "party is full ({} slots)",
                max_size
            )));
        }
        self.heroes.push(hero);
        Ok(())
    }

    /// Indices of living members, in slot order.
    pub fn living(&self) -> Vec<usize> {
        self.heroes
            .iter()
            .enumerate()
            .filter(|(_, hero)| hero.alive)
            .map(|(slot, _)| slot)
            .collect()
    }

    pub fn living_count(&self) -> usize {
        self.heroes.iter().filter(|hero| hero.alive).count()
    }

    pub fn is_wiped(&self) -> bool {
        !self.heroes.is_empty() && self.living_count() == 0
    }

    /// Lowest current HP among the living; ties go to the lowest slot.
    pub fn weakest_living(&self) -> Option<usize> {
        let mut best: Option<(usize, u32)> = None;
        for (slot, hero) in self.heroes.iter().enumerate() {
            if !hero.alive {
                continue;
            }
            if best.map_or(true, |(_, hp)| hero.hp < hp) {
                best = Some((slot, hero.hp));
            }
        }
        best.map(|(slot, _)| slot)
    }

    /// Highest current HP among the living; ties go to the lowest slot.
    pub fn strongest_living(&self) -> Option<usize> {
        let mut best: Option<(usize, u32)> = None;
        for (slot, hero) in self.heroes.iter().enumerate() {
            if !hero.alive {
                continue;
            }
            if best.map_or(true, |(_, hp)| hero.hp > hp) {
                best = Some((slot, hero.hp));
            }
        }
        best.map(|(slot, _)| slot)
    }

    /// Lowest HP fraction among the living, for single-target support
    /// effects. Ties go to the lowest slot.
    pub fn most_wounded_living(&self) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (slot, hero) in self.heroes.iter().enumerate() {
            if !hero.alive {
                continue;
            }
            let fraction = hero.hp_fraction();
            if best.map_or(true, |(_, current)| fraction < current) {
                best = Some((slot, fraction));
            }
        }
        best.map(|(slot, _)| slot)
    }

    pub fn first_defeated(&self) -> Option<usize> {
        self.heroes.iter().position(|hero| !hero.alive)
    }

    /// Advances one depth: increments the counter and ticks every hero's
    /// modifier durations and ability cooldowns.
    pub fn descend(&mut self) {
        self.depth += 1;
        for hero in &mut self.heroes {
            hero.tick_modifiers();
            hero.tick_cooldowns();
        }
    }

    pub fn remember_event(&mut self, event_id: &str, memory_size: usize) {
        if memory_size == 0 {
            return;
        }
        self.recent_events.push_back(event_id.to_string());
        while self.recent_events.len() > memory_size {
            self.recent_events.pop_front();
        }
    }

    pub fn remembers(&self, event_id: &str) -> bool {
        self.recent_events.iter().any(|id| id == event_id)
    }

    /// Full revival after a wipe: everyone back to max HP with a clean
    /// modifier list and cooldowns reset.
    pub fn revive_all(&mut self) {
        for hero in &mut self.heroes {
            hero.alive = true;
            hero.hp = hero.max_hp;
            hero.modifiers.clear();
            for ability in &mut hero.abilities {
                ability.cooldown_remaining = 0;
            }
        }
    }

    pub fn add_to_inventory(&mut self, item: GeneratedItem) {
        self.inventory.push(item);
    }

    /// Removes an item from the shared inventory. The caller decides
    /// whether it is equipped elsewhere or destroyed.
    pub fn discard_item(&mut self, item_id: Uuid) -> Option<GeneratedItem> {
        let index = self.inventory.iter().position(|item| item.id == item_id)?;
        Some(self.inventory.remove(index))
    }
}
