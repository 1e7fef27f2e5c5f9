//! Startup parameters for a simulation run

use ball_physics::{PhysicsEngine, PhysicsError, DEFAULT_AIR_DENSITY, DEFAULT_GRAVITY};

/// Number of balls in a default run
pub const DEFAULT_BODY_COUNT: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationParams {
    // Forces
    // Zero for either gives a vacuum / weightless run
    pub gravity: f64,
    pub air_density: f64,

    // Population
    pub body_count: usize,
    // Fixed seed for a reproducible population, `None` draws from the OS
    pub seed: Option<u64>,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            air_density: DEFAULT_AIR_DENSITY,
            body_count: DEFAULT_BODY_COUNT,
            seed: None,
        }
    }
}

impl SimulationParams {
    /// Fill in defaults for any force value the user did not supply
    pub fn with_overrides(gravity: Option<f64>, air_density: Option<f64>) -> Self {
        let defaults = Self::default();
        Self {
            gravity: gravity.unwrap_or(defaults.gravity),
            air_density: air_density.unwrap_or(defaults.air_density),
            ..defaults
        }
    }

    pub fn validate(&self) -> Result<(), PhysicsError> {
        self.engine()?;
        if self.body_count == 0 {
            return Err(PhysicsError::InvalidConfiguration {
                field: "body_count",
                value: 0.0,
            });
        }
        Ok(())
    }

    /// Engine configured with these forces
    pub fn engine(&self) -> Result<PhysicsEngine, PhysicsError> {
        PhysicsEngine::new(self.gravity, self.air_density)
    }
}
