//! Arena and force constants for the bouncing ball simulation
//!
//! Units are pixels and ticks: velocities are pixels per tick and one tick
//! is one call to `PhysicsEngine::step`.

/// Arena width in pixels
pub const WIDTH: f64 = 500.0;

/// Arena height in pixels
pub const HEIGHT: f64 = 500.0;

/// Distance from each arena edge at which a body is reflected
pub const WALL_MARGIN: f64 = 10.0;

/// Lower bound of the contact window.
/// A pair collides when `-COLLISION_SLACK < gap <= 0`; deeper pairs are
/// left alone.
pub const COLLISION_SLACK: f64 = 12.0;

/// Velocity updates are divided by this (implicit `dt = 0.2`)
pub const TICKS_PER_TIME_UNIT: f64 = 5.0;

/// Drag coefficient (a cube)
pub const DRAG_COEFFICIENT: f64 = 1.05;

/// Radius is divided by this when computing drag area and drag mass
pub const DRAG_SCALE: f64 = 1000.0;

/// Earth surface gravity
pub const DEFAULT_GRAVITY: f64 = 9.8;

/// Air density at STP
pub const DEFAULT_AIR_DENSITY: f64 = 1.225;
