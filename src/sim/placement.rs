//! Initial placement
//!
//! Rejection sampling: draw random bodies and keep each one only if it does
//! not touch any body accepted so far.

use rand::Rng;

use super::arena::Arena;
use super::body::Body;
use super::state::IdCounter;
use crate::error::{Result, SimError};

/// Place `count` non-overlapping random bodies
///
/// Every candidate, accepted or not, takes an id from `ids`. Gives up with
/// [`SimError::InfeasibleDensity`] once `max_attempts` candidates in a row
/// have been rejected. An arena too small for any body is rejected up front.
pub fn place_bodies<R: Rng + ?Sized>(
    count: usize,
    arena: &Arena,
    v_max: f64,
    max_attempts: u32,
    ids: &mut IdCounter,
    rng: &mut R,
) -> Result<Vec<Body>> {
    arena.validate()?;

    let mut placed: Vec<Body> = Vec::with_capacity(count);
    let mut total_rejected: u64 = 0;

    while placed.len() < count {
        let mut attempts = 0;
        loop {
            if attempts == max_attempts {
                log::warn!(
                    "Placement gave up after {} rejections ({}/{} placed)",
                    attempts,
                    placed.len(),
                    count
                );
                return Err(SimError::InfeasibleDensity {
                    requested: count,
                    placed: placed.len(),
                    attempts,
                });
            }
            attempts += 1;

            let candidate = Body::random(ids.next_id()?, arena, v_max, rng);
            if placed.iter().all(|b| !candidate.is_collide(b)) {
                placed.push(candidate);
                break;
            }
            total_rejected += 1;
        }
    }

    log::debug!(
        "Placed {} bodies ({} candidates rejected)",
        placed.len(),
        total_rejected
    );
    Ok(placed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_place_zero() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut ids = IdCounter::new();
        let bodies = place_bodies(0, &Arena::new(100, 100), 2.0, 10, &mut ids, &mut rng).unwrap();
        assert!(bodies.is_empty());
        assert_eq!(ids.peek(), 0);
    }

    #[test]
    fn test_arena_too_small_is_rejected() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut ids = IdCounter::new();
        let result = place_bodies(1, &Arena::new(7, 7), 2.0, 10, &mut ids, &mut rng);
        assert!(matches!(result, Err(SimError::InvalidConfig(_))));
        assert_eq!(ids.peek(), 0);
    }

    #[test]
    fn test_ids_exhausted_is_reported() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut ids = IdCounter::starting_at(u32::MAX - 2);
        let result = place_bodies(5, &Arena::new(1000, 1000), 2.0, 100, &mut ids, &mut rng);
        assert!(matches!(result, Err(SimError::IdsExhausted)));
    }

    #[test]
    fn test_place_ten_default_arena() {
        let mut rng = Pcg32::seed_from_u64(2024);
        let mut ids = IdCounter::new();
        let arena = Arena::new(1000, 1000);
        let bodies = place_bodies(10, &arena, 2.0, 100_000, &mut ids, &mut rng).unwrap();
        assert_eq!(bodies.len(), 10);
        // Ids increase in creation order
        assert!(bodies.windows(2).all(|w| w[0].id() < w[1].id()));
    }

    #[test]
    fn test_infeasible_density() {
        // Radius is forced to 2 and centers to a 5x5 integer grid
        let mut rng = Pcg32::seed_from_u64(3);
        let mut ids = IdCounter::new();
        let result = place_bodies(50, &Arena::new(8, 8), 2.0, 1000, &mut ids, &mut rng);
        match result {
            Err(SimError::InfeasibleDensity {
                requested,
                placed,
                attempts,
            }) => {
                assert_eq!(requested, 50);
                assert!(placed < 50);
                assert_eq!(attempts, 1000);
            }
            other => panic!("expected InfeasibleDensity, got {:?}", other),
        }
    }

    #[test]
    fn test_same_seed_same_layout() {
        let arena = Arena::new(600, 400);
        let run = |seed| {
            let mut rng = Pcg32::seed_from_u64(seed);
            place_bodies(8, &arena, 2.0, 100_000, &mut IdCounter::new(), &mut rng).unwrap()
        };
        assert_eq!(run(5), run(5));
        assert_ne!(run(5), run(6));
    }

    proptest! {
        #[test]
        fn placed_bodies_do_not_overlap(seed in any::<u64>(), count in 0usize..12) {
            let arena = Arena::new(1000, 1000);
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut ids = IdCounter::new();
            let bodies = place_bodies(count, &arena, 2.0, 100_000, &mut ids, &mut rng).unwrap();
            prop_assert_eq!(bodies.len(), count);
            for (i, a) in bodies.iter().enumerate() {
                let r = a.radius() as f64;
                prop_assert!(a.pos.x >= r && a.pos.x <= arena.width as f64 - r);
                prop_assert!(a.pos.y >= r && a.pos.y <= arena.height as f64 - r);
                for b in &bodies[i + 1..] {
                    let sum = (a.radius() + b.radius()) as f64;
                    prop_assert!(distance(a.pos, b.pos) >= sum);
                }
            }
        }
    }
}
