//! # Ball Physics
//!
//! Bodies, the body registry and the per-tick physics engine for a bounded
//! 2D arena of bouncing balls: gravity, quadratic air drag, wall reflection
//! and pairwise elastic collisions.

pub mod body;
pub mod constants;
pub mod engine;
pub mod error;
pub mod forces;
pub mod registry;

pub use body::*;
pub use constants::*;
pub use engine::*;
pub use error::*;
pub use forces::*;
pub use registry::*;
