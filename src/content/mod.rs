//! Static content: builtin data set, JSON loading, and the validated
//! registry the engine consumes.

pub mod data;
pub mod loader;
pub mod registry;

pub use loader::*;
pub use registry::*;
