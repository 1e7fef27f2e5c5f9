//! # Ball Simulation
//!
//! Runtime wrapper around `ball-physics`: startup parameters, random
//! population spawning, render snapshots and the per-frame driver.

pub mod palette;
pub mod params;
pub mod presenter;
pub mod simulation;
pub mod spawn;

pub use palette::*;
pub use params::*;
pub use presenter::*;
pub use simulation::*;
pub use spawn::*;
