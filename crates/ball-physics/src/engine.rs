//! Per-tick driver for the body registry
//!
//! `PhysicsEngine` carries only its force configuration; all state lives in
//! the [`BodyRegistry`] passed to each call.

use glam::DVec2;

use crate::body::Body;
use crate::constants::{COLLISION_SLACK, DEFAULT_AIR_DENSITY, DEFAULT_GRAVITY};
use crate::error::PhysicsError;
use crate::forces::{apply_air_drag, apply_gravity, elastic_response};
use crate::registry::BodyRegistry;

/// Center of a body
pub fn center(body: &Body) -> DVec2 {
    body.position
}

/// Distance between two body centers
pub fn distance(a: &Body, b: &Body) -> f64 {
    center(a).distance(center(b))
}

/// Separation between two disc surfaces; negative when they overlap
pub fn gap(a: &Body, b: &Body) -> f64 {
    distance(a, b) - (a.radius() + b.radius())
}

/// Whether a pair is inside the contact window `(-COLLISION_SLACK, 0]`
pub fn in_contact(a: &Body, b: &Body) -> bool {
    let gap = gap(a, b);
    -COLLISION_SLACK < gap && gap <= 0.0
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsEngine {
    gravity: f64,
    air_density: f64,
}

impl Default for PhysicsEngine {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            air_density: DEFAULT_AIR_DENSITY,
        }
    }
}

impl PhysicsEngine {
    /// Zero is valid for both (vacuum, no gravity). Air density may not be negative.
    pub fn new(gravity: f64, air_density: f64) -> Result<Self, PhysicsError> {
        if !gravity.is_finite() {
            return Err(PhysicsError::InvalidConfiguration {
                field: "gravity",
                value: gravity,
            });
        }
        if !air_density.is_finite() || air_density < 0.0 {
            return Err(PhysicsError::InvalidConfiguration {
                field: "air_density",
                value: air_density,
            });
        }
        Ok(Self {
            gravity,
            air_density,
        })
    }

    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    pub fn air_density(&self) -> f64 {
        self.air_density
    }

    /// Advance the registry by one tick
    pub fn step(&self, registry: &mut BodyRegistry) {
        self.move_all(registry);
        self.reflect_walls(registry);
        self.detect_and_resolve_collisions(registry);
        self.apply_gravity(registry);
        self.apply_air_resistance(registry);
    }

    /// Displace every body by its velocity
    pub fn move_all(&self, registry: &mut BodyRegistry) {
        for body in registry.bodies_mut() {
            body.position += body.velocity;
        }
    }

    /// Bounce bodies off the arena margins.
    ///
    /// The bounding box is sampled once per body. Hitting a vertical wall
    /// negates `vx`, hitting a horizontal wall negates `vy`, and each flip is
    /// followed by a full displacement with the updated velocity, so a corner
    /// hit moves the body twice.
    pub fn reflect_walls(&self, registry: &mut BodyRegistry) {
        let arena = registry.arena();
        let (lo, hi) = (arena.min_bound(), arena.max_bound());
        for body in registry.bodies_mut() {
            let min = body.min_corner();
            let max = body.max_corner();

            if min.x <= lo.x || max.x >= hi.x {
                body.velocity.x = -body.velocity.x;
                body.position += body.velocity;
            }
            if min.y <= lo.y || max.y >= hi.y {
                body.velocity.y = -body.velocity.y;
                body.position += body.velocity;
            }
        }
    }

    /// Resolve every pair currently in contact.
    ///
    /// Pairs are visited in registry order against live state, so a body
    /// touching two neighbours in the same tick ends with the velocity from
    /// the later pair. Each resolution displaces both bodies by their new
    /// velocity and re-runs the wall pass.
    pub fn detect_and_resolve_collisions(&self, registry: &mut BodyRegistry) {
        let pairs: Vec<_> = registry.pair_ids().collect();
        for (id_a, id_b) in pairs {
            let (a, b) = {
                let bodies = registry.bodies_mut();
                (bodies[id_a.index()], bodies[id_b.index()])
            };
            if !in_contact(&a, &b) {
                continue;
            }

            let (va, vb) = elastic_response(
                a.velocity,
                a.collision_mass(),
                b.velocity,
                b.collision_mass(),
            );
            log::debug!(
                "collision {id_a}/{id_b}: gap={:.3} {} -> {va}, {} -> {vb}",
                gap(&a, &b),
                a.velocity,
                b.velocity
            );

            let bodies = registry.bodies_mut();
            for (index, velocity) in [(id_a.index(), va), (id_b.index(), vb)] {
                let body = &mut bodies[index];
                body.velocity = velocity;
                body.position += velocity;
            }
            self.reflect_walls(registry);
        }
    }

    /// Add one tick of gravity to every body's vertical velocity
    pub fn apply_gravity(&self, registry: &mut BodyRegistry) {
        for index in 0..registry.len() {
            let body = &mut registry.bodies_mut()[index];
            body.velocity.y = apply_gravity(body.velocity.y, self.gravity);
            self.reflect_walls(registry);
        }
    }

    /// Add one tick of air drag to every body's velocity
    pub fn apply_air_resistance(&self, registry: &mut BodyRegistry) {
        for index in 0..registry.len() {
            let body = &mut registry.bodies_mut()[index];
            body.velocity = apply_air_drag(body.velocity, body.radius(), self.air_density);
            self.reflect_walls(registry);
        }
    }

    /// True if any two distinct bodies touch or overlap
    pub fn any_overlap(&self, registry: &BodyRegistry) -> bool {
        registry.pairs().any(|(_, a, _, b)| gap(a, b) <= 0.0)
    }
}
