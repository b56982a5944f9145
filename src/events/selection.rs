use crate::content::registry::ContentRegistry;
use crate::core::error::EngineError;
use crate::events::types::{DungeonEvent, EventKind};
use crate::party::types::Party;
use rand::Rng;
use tracing::warn;

fn filter_eligible<'a>(pool: &[&'a DungeonEvent], party: &Party) -> Vec<&'a DungeonEvent> {
    let unlocked: Vec<&DungeonEvent> = pool
        .iter()
        .copied()
        .filter(|event| event.depth_gate <= party.depth)
        .collect();
    let fresh: Vec<&DungeonEvent> = unlocked
        .iter()
        .copied()
        .filter(|event| !party.remembers(&event.id))
        .collect();
    if fresh.is_empty() {
        // A small pool can be entirely inside the recent-memory window;
        // repeating an event beats having nothing to offer.
        if !unlocked.is_empty() {
            warn!(depth = party.depth, "all unlocked events seen recently, relaxing exclusion");
        }
        unlocked
    } else {
        fresh
    }
}

fn pick<'a>(
    pool: Vec<&'a DungeonEvent>,
    depth: u32,
    rng: &mut impl Rng,
) -> Result<&'a DungeonEvent, EngineError> {
    if pool.is_empty() {
        return Err(EngineError::configuration(format!(
            "no events available at depth {}",
            depth
        )));
    }
    Ok(pool[rng.gen_range(0..pool.len())])
}

/// Events the party can encounter right now: unlocked by depth, with the
/// recently-seen filtered out unless that would empty the pool.
pub fn eligible_events<'a>(events: &'a [DungeonEvent], party: &Party) -> Vec<&'a DungeonEvent> {
    let pool: Vec<&DungeonEvent> = events.iter().collect();
    filter_eligible(&pool, party)
}

/// Uniform pick over the eligible pool.
pub fn select_event<'a>(
    registry: &'a ContentRegistry,
    party: &Party,
    rng: &mut impl Rng,
) -> Result<&'a DungeonEvent, EngineError> {
    let pool = eligible_events(registry.events(), party);
    pick(pool, party.depth, rng)
}

/// Uniform pick restricted to one event kind, for callers that script
/// their encounter mix (a boss every N floors, say).
pub fn select_event_of_kind<'a>(
    registry: &'a ContentRegistry,
    kind: EventKind,
    party: &Party,
    rng: &mut impl Rng,
) -> Result<&'a DungeonEvent, EngineError> {
    let of_kind: Vec<&DungeonEvent> = registry
        .events()
        .iter()
        .filter(|event| event.kind == kind)
        .collect();
    let pool = filter_eligible(&of_kind, party);
    pick(pool, party.depth, rng)
}
