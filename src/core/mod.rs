//! Engine-wide configuration, error taxonomy, and depth-scaling math.

pub mod config;
pub mod constants;
pub mod error;
pub mod scaling;

pub use config::*;
pub use constants::*;
pub use error::*;
pub use scaling::*;
