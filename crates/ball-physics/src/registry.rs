//! Fixed population of bodies addressed by [`BodyId`]

use glam::DVec2;

use crate::body::{Body, BodyId, Rgb};
use crate::constants::{HEIGHT, WALL_MARGIN, WIDTH};
use crate::error::PhysicsError;

/// Rectangular play area. Bodies bounce off lines `margin` inside each edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            margin: WALL_MARGIN,
        }
    }
}

impl Arena {
    /// Top-left corner of the margin-adjusted area
    pub fn min_bound(&self) -> DVec2 {
        DVec2::splat(self.margin)
    }

    /// Bottom-right corner of the margin-adjusted area
    pub fn max_bound(&self) -> DVec2 {
        DVec2::new(self.width - self.margin, self.height - self.margin)
    }

    /// Whether a disc of `radius` at `center` lies fully inside the margins
    pub fn contains_disc(&self, center: DVec2, radius: f64) -> bool {
        let min = center - DVec2::splat(radius);
        let max = center + DVec2::splat(radius);
        min.cmpge(self.min_bound()).all() && max.cmple(self.max_bound()).all()
    }
}

/// Owns every body for the lifetime of a simulation.
///
/// Bodies are stored densely in creation order and a [`BodyId`] is the
/// index into that storage. There is no removal, so a handle is never reused.
#[derive(Debug, Clone, Default)]
pub struct BodyRegistry {
    arena: Arena,
    bodies: Vec<Body>,
}

impl BodyRegistry {
    pub fn new(arena: Arena) -> Self {
        Self {
            arena,
            bodies: Vec::new(),
        }
    }

    pub fn arena(&self) -> Arena {
        self.arena
    }

    /// Add a body and return its handle
    pub fn create(
        &mut self,
        radius: f64,
        position: DVec2,
        velocity: DVec2,
        color: Rgb,
    ) -> Result<BodyId, PhysicsError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(PhysicsError::InvalidConfiguration {
                field: "radius",
                value: radius,
            });
        }
        if !position.is_finite() {
            return Err(PhysicsError::InvalidConfiguration {
                field: "position",
                value: first_non_finite(position),
            });
        }
        if !velocity.is_finite() {
            return Err(PhysicsError::InvalidConfiguration {
                field: "velocity",
                value: first_non_finite(velocity),
            });
        }
        if !self.arena.contains_disc(position, radius) {
            let (min, max) = (self.arena.min_bound(), self.arena.max_bound());
            let x_fits = position.x - radius >= min.x && position.x + radius <= max.x;
            return Err(PhysicsError::InvalidConfiguration {
                field: "position",
                value: if x_fits { position.y } else { position.x },
            });
        }

        let id = BodyId(self.bodies.len() as u32);
        self.bodies.push(Body::new(radius, position, velocity, color));
        log::trace!("created body {id} r={radius} at {position}");
        Ok(id)
    }

    pub fn get(&self, id: BodyId) -> Result<&Body, PhysicsError> {
        self.bodies.get(id.index()).ok_or(PhysicsError::NotFound(id))
    }

    pub fn get_mut(&mut self, id: BodyId) -> Result<&mut Body, PhysicsError> {
        self.bodies
            .get_mut(id.index())
            .ok_or(PhysicsError::NotFound(id))
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Every body in creation order
    pub fn all(&self) -> impl Iterator<Item = (BodyId, &Body)> + '_ {
        self.bodies
            .iter()
            .enumerate()
            .map(|(i, body)| (BodyId(i as u32), body))
    }

    /// Every unordered pair of distinct bodies, each visited once
    pub fn pairs(&self) -> impl Iterator<Item = (BodyId, &Body, BodyId, &Body)> + '_ {
        self.pair_ids().map(move |(a, b)| {
            (
                a,
                &self.bodies[a.index()],
                b,
                &self.bodies[b.index()],
            )
        })
    }

    /// Handles of every unordered pair `(a, b)` with `a < b`.
    ///
    /// Holds no borrow on the bodies, so callers may mutate between visits.
    pub fn pair_ids(&self) -> impl Iterator<Item = (BodyId, BodyId)> {
        let n = self.bodies.len() as u32;
        (0..n).flat_map(move |i| ((i + 1)..n).map(move |j| (BodyId(i), BodyId(j))))
    }

    pub(crate) fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }
}

fn first_non_finite(v: DVec2) -> f64 {
    if v.x.is_finite() {
        v.y
    } else {
        v.x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Rgb = Rgb::new(0, 0, 0);

    fn registry_with(n: usize) -> BodyRegistry {
        let mut registry = BodyRegistry::default();
        for i in 0..n {
            registry
                .create(
                    20.0,
                    DVec2::new(40.0 + 60.0 * i as f64, 250.0),
                    DVec2::ZERO,
                    BLACK,
                )
                .unwrap();
        }
        registry
    }

    #[test]
    fn test_ids_are_sequential_and_resolvable() {
        let registry = registry_with(3);
        let ids: Vec<_> = registry.all().map(|(id, _)| id).collect();
        assert_eq!(ids.len(), 3);
        for (expected, id) in ids.iter().enumerate() {
            assert_eq!(id.index(), expected);
            assert!(registry.get(*id).is_ok());
        }
    }

    #[test]
    fn test_get_unknown_id() {
        let registry = registry_with(2);
        let missing = BodyId(7);
        assert_eq!(registry.get(missing), Err(PhysicsError::NotFound(missing)));
    }

    #[test]
    fn test_create_rejects_bad_radius() {
        let mut registry = BodyRegistry::default();
        for radius in [0.0, -5.0, f64::NAN] {
            let err = registry
                .create(radius, DVec2::splat(250.0), DVec2::ZERO, BLACK)
                .unwrap_err();
            assert!(matches!(
                err,
                PhysicsError::InvalidConfiguration { field: "radius", .. }
            ));
        }
        assert!(registry.is_empty());
    }

    #[test]
    fn test_create_rejects_out_of_bounds() {
        let mut registry = BodyRegistry::default();
        // Left edge at 5, inside the 10px margin
        let err = registry
            .create(20.0, DVec2::new(25.0, 250.0), DVec2::ZERO, BLACK)
            .unwrap_err();
        assert_eq!(
            err,
            PhysicsError::InvalidConfiguration {
                field: "position",
                value: 25.0
            }
        );
    }

    #[test]
    fn test_create_accepts_disc_touching_margin() {
        let mut registry = BodyRegistry::default();
        assert!(registry
            .create(20.0, DVec2::new(30.0, 470.0), DVec2::ZERO, BLACK)
            .is_ok());
    }

    #[test]
    fn test_pairs_cover_each_unordered_pair_once() {
        let registry = registry_with(4);
        let pairs: Vec<_> = registry.pair_ids().collect();
        assert_eq!(pairs.len(), 6);
        for (a, b) in &pairs {
            assert_ne!(a, b);
            assert!(!pairs.contains(&(*b, *a)));
        }
        assert_eq!(registry.pairs().count(), 6);
    }

    #[test]
    fn test_pairs_empty_for_single_body() {
        let registry = registry_with(1);
        assert_eq!(registry.pair_ids().count(), 0);
    }
}
