//! Random initial population

use ball_physics::{BodyId, BodyRegistry, PhysicsError};
use glam::DVec2;
use rand::Rng;
use std::ops::RangeInclusive;

use crate::palette::PALETTE;

/// Radius of a spawned ball, in whole pixels
pub const RADIUS_RANGE: RangeInclusive<i32> = 20..=30;

/// Each initial velocity component, in whole pixels per tick
pub const VELOCITY_RANGE: RangeInclusive<i32> = -10..=10;

/// Fill `registry` with `count` random balls.
///
/// Every ball fits fully inside the arena margins when spawned. Balls may
/// overlap each other; nothing prevents that at spawn time.
pub fn spawn_population<R: Rng + ?Sized>(
    registry: &mut BodyRegistry,
    count: usize,
    rng: &mut R,
) -> Result<Vec<BodyId>, PhysicsError> {
    let arena = registry.arena();
    let lo = arena.min_bound();
    let hi = arena.max_bound();

    let mut ids = Vec::with_capacity(count);
    for _ in 0..count {
        let radius = rng.random_range(RADIUS_RANGE);

        let x_range = (lo.x as i32 + radius)..=(hi.x as i32 - radius);
        let y_range = (lo.y as i32 + radius)..=(hi.y as i32 - radius);
        if x_range.is_empty() || y_range.is_empty() {
            return Err(PhysicsError::InvalidConfiguration {
                field: "arena",
                value: arena.width.min(arena.height),
            });
        }
        let center = DVec2::new(
            rng.random_range(x_range) as f64,
            rng.random_range(y_range) as f64,
        );
        let velocity = DVec2::new(
            rng.random_range(VELOCITY_RANGE) as f64,
            rng.random_range(VELOCITY_RANGE) as f64,
        );
        let color = PALETTE[rng.random_range(0..PALETTE.len())];

        ids.push(registry.create(radius as f64, center, velocity, color)?);
    }

    log::info!("Spawned {} balls", ids.len());
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ball_physics::Arena;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_spawn_respects_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut registry = BodyRegistry::default();
        let ids = spawn_population(&mut registry, 50, &mut rng).unwrap();
        assert_eq!(ids.len(), 50);
        assert_eq!(registry.len(), 50);

        let arena = registry.arena();
        for (_, body) in registry.all() {
            let r = body.radius();
            assert!((20.0..=30.0).contains(&r));
            assert_eq!(r.fract(), 0.0);
            assert!(arena.contains_disc(body.position, r));
            assert!(body.velocity.x.abs() <= 10.0 && body.velocity.y.abs() <= 10.0);
            assert_eq!(body.velocity.fract(), DVec2::ZERO);
            assert!(PALETTE.contains(&body.color()));
        }
    }

    #[test]
    fn test_same_seed_same_population() {
        let spawn = |seed| {
            let mut registry = BodyRegistry::default();
            spawn_population(&mut registry, 6, &mut StdRng::seed_from_u64(seed)).unwrap();
            registry.all().map(|(_, b)| *b).collect::<Vec<_>>()
        };
        assert_eq!(spawn(42), spawn(42));
        assert_ne!(spawn(42), spawn(43));
    }

    #[test]
    fn test_arena_too_small() {
        let mut registry = BodyRegistry::new(Arena {
            width: 50.0,
            height: 50.0,
            margin: 10.0,
        });
        let mut rng = StdRng::seed_from_u64(1);
        let err = spawn_population(&mut registry, 1, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            PhysicsError::InvalidConfiguration { field: "arena", .. }
        ));
        assert!(registry.is_empty());
    }
}
