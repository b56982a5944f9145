//! Encounter content types, eligibility, and resolution.
//!
//! `types` holds the data model, `requirements` the eligibility
//! predicates, `effects` the state mutations, `resolver` the
//! orchestration, and `selection` the encounter pool filtering.

pub mod effects;
pub mod requirements;
pub mod resolver;
pub mod selection;
pub mod types;

pub use effects::*;
pub use requirements::*;
pub use resolver::*;
pub use selection::*;
pub use types::*;
