//! Leveling, xp thresholds, and the wipe penalty policy.

pub mod death;
pub mod leveling;

pub use death::*;
pub use leveling::*;
