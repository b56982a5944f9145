//! Rarity tiers, item templates, generation, and equipment handling.

pub mod equipment;
pub mod generation;
pub mod rarity;
pub mod scoring;
pub mod types;

pub use equipment::*;
pub use generation::*;
pub use rarity::*;
pub use scoring::*;
pub use types::*;
