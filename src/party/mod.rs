//! Heroes, classes, stats, and the party aggregate.

pub mod class;
pub mod hero;
pub mod stats;
pub mod types;

pub use class::*;
pub use hero::*;
pub use stats::*;
pub use types::*;
