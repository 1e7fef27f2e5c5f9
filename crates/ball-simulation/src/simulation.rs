//! Simulation state owned by the frame driver
//!
//! `BallSimulation` owns the registry and the engine. Presenters never see
//! the registry directly; they get a [`DiscInstance`] slice per frame, so the
//! physics state can only change inside `step`.

use ball_physics::{BodyRegistry, PhysicsEngine, PhysicsError};
use bytemuck::{Pod, Zeroable};
use glam::DVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::params::SimulationParams;
use crate::spawn::spawn_population;

/// One disc to draw.
/// Laid out for direct upload as a GPU instance buffer (16-byte aligned `color`).
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct DiscInstance {
    pub center: [f32; 2],
    pub radius: f32,
    pub _padding: f32,
    /// sRGB, alpha 1
    pub color: [f32; 4],
}

/// Whole-system quantities, using the collision mass `r²`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Diagnostics {
    pub momentum: DVec2,
    pub kinetic_energy: f64,
    pub max_speed: f64,
    pub overlapping: bool,
}

pub struct BallSimulation {
    registry: BodyRegistry,
    engine: PhysicsEngine,
    tick: u64,
}

impl BallSimulation {
    /// Validate `params` and spawn a random population
    pub fn new(params: &SimulationParams) -> Result<Self, PhysicsError> {
        params.validate()?;
        let engine = params.engine()?;

        let mut rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let mut registry = BodyRegistry::default();
        spawn_population(&mut registry, params.body_count, &mut rng)?;

        log::info!(
            "Simulation ready: {} balls, gravity={}, air_density={}",
            registry.len(),
            engine.gravity(),
            engine.air_density()
        );
        Ok(Self::from_parts(registry, engine))
    }

    /// Wrap an already populated registry
    pub fn from_parts(registry: BodyRegistry, engine: PhysicsEngine) -> Self {
        Self {
            registry,
            engine,
            tick: 0,
        }
    }

    /// Advance one tick
    pub fn step(&mut self) {
        self.engine.step(&mut self.registry);
        self.tick += 1;
        log::trace!("tick {}", self.tick);
    }

    /// Number of completed ticks
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn registry(&self) -> &BodyRegistry {
        &self.registry
    }

    pub fn engine(&self) -> &PhysicsEngine {
        &self.engine
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    pub fn snapshot(&self) -> Vec<DiscInstance> {
        let mut out = Vec::with_capacity(self.registry.len());
        self.write_snapshot(&mut out);
        out
    }

    /// Replace the contents of `out` with the current frame, in registry order
    pub fn write_snapshot(&self, out: &mut Vec<DiscInstance>) {
        out.clear();
        out.extend(self.registry.all().map(|(_, body)| DiscInstance {
            center: body.position.as_vec2().to_array(),
            radius: body.radius() as f32,
            _padding: 0.0,
            color: body.color().to_rgba_f32(),
        }));
    }

    pub fn diagnostics(&self) -> Diagnostics {
        let mut momentum = DVec2::ZERO;
        let mut kinetic_energy = 0.0;
        let mut max_speed: f64 = 0.0;
        for (_, body) in self.registry.all() {
            let mass = body.collision_mass();
            momentum += body.velocity * mass;
            kinetic_energy += 0.5 * mass * body.velocity.length_squared();
            max_speed = max_speed.max(body.velocity.length());
        }
        Diagnostics {
            momentum,
            kinetic_energy,
            max_speed,
            overlapping: self.engine.any_overlap(&self.registry),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ball_physics::Rgb;

    fn seeded(seed: u64) -> BallSimulation {
        BallSimulation::new(&SimulationParams {
            seed: Some(seed),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_new_spawns_default_population() {
        let sim = seeded(3);
        assert_eq!(sim.len(), 6);
        assert_eq!(sim.tick(), 0);
    }

    #[test]
    fn test_new_rejects_invalid_params() {
        let params = SimulationParams {
            air_density: f64::INFINITY,
            ..Default::default()
        };
        assert!(BallSimulation::new(&params).is_err());
    }

    #[test]
    fn test_step_counts_ticks() {
        let mut sim = seeded(3);
        for _ in 0..10 {
            sim.step();
        }
        assert_eq!(sim.tick(), 10);
    }

    #[test]
    fn test_snapshot_matches_registry() {
        let mut sim = seeded(11);
        sim.step();
        let frame = sim.snapshot();
        assert_eq!(frame.len(), sim.len());
        for (disc, (_, body)) in frame.iter().zip(sim.registry().all()) {
            assert_eq!(disc.center, body.position.as_vec2().to_array());
            assert_eq!(disc.radius, body.radius() as f32);
            assert_eq!(disc.color, body.color().to_rgba_f32());
        }
    }

    #[test]
    fn test_disc_instance_layout() {
        assert_eq!(std::mem::size_of::<DiscInstance>(), 32);
        let frame = seeded(5).snapshot();
        let bytes: &[u8] = bytemuck::cast_slice(&frame);
        assert_eq!(bytes.len(), 32 * frame.len());
    }

    #[test]
    fn test_diagnostics_two_bodies() {
        let mut registry = BodyRegistry::default();
        let color = Rgb::new(0, 0, 0);
        registry
            .create(20.0, DVec2::new(100.0, 100.0), DVec2::new(3.0, 4.0), color)
            .unwrap();
        registry
            .create(10.0, DVec2::new(300.0, 100.0), DVec2::new(-2.0, 0.0), color)
            .unwrap();
        let sim = BallSimulation::from_parts(registry, PhysicsEngine::default());

        let d = sim.diagnostics();
        assert_eq!(d.momentum, DVec2::new(400.0 * 3.0 - 100.0 * 2.0, 400.0 * 4.0));
        assert_eq!(d.kinetic_energy, 0.5 * 400.0 * 25.0 + 0.5 * 100.0 * 4.0);
        assert_eq!(d.max_speed, 5.0);
        assert!(!d.overlapping);
    }
}
