//! Delve - Depth-Crawl Progression & Encounter Engine
//!
//! A deterministic, synchronous reducer over party state: weighted-rarity
//! loot generation, depth-scaled event resolution, leveling, and wipe
//! recovery. All randomness is injected, so full runs replay from a seed.

// Allow dead code in library - some functions are only used by the binary
#![allow(dead_code)]

pub mod build_info;
pub mod content;
pub mod core;
pub mod events;
pub mod items;
pub mod party;
pub mod progression;
pub mod save;
