//! Access point distribution across the map.
//!
//! Two strategies are supported:
//!
//! - **Grid**: one AP at the centre of each grid cell (deterministic)
//! - **Random**: APs drawn uniformly over the map, re-drawn until every AP is
//!   at least `d_min_AP_AP` away from the ones already placed

use log::{debug, info};
use rand::Rng;

use crate::config::{ApPlacement, GeneratorSettings, InputConfig};
use crate::error::GenerationError;
use crate::topology::grid::grid_centers;
use crate::topology::types::Point3;

/// Attempts per AP before random placement gives up
pub const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

/// Places `settings.num_wlans` access points according to `settings.placement`.
///
/// Grid placement consumes no randomness.
pub fn place_access_points<R: Rng + ?Sized>(
    rng: &mut R,
    config: &InputConfig,
    settings: &GeneratorSettings,
) -> Result<Vec<Point3>, GenerationError> {
    match settings.placement {
        ApPlacement::Grid => {
            info!(
                "Placing {} APs on a {}x{} grid",
                settings.num_wlans, settings.grid_rows, settings.grid_cols
            );
            Ok(grid_centers(
                config.map_width,
                config.map_height,
                settings.grid_rows,
                settings.grid_cols,
                settings.num_wlans,
            ))
        }
        ApPlacement::Random => {
            debug!(
                "Placing {} APs at random, d_min_AP_AP = {}",
                settings.num_wlans, config.d_min_ap_ap
            );
            place_random(
                rng,
                config.map_width,
                config.map_height,
                config.d_min_ap_ap,
                settings.num_wlans,
            )
        }
    }
}

/// Rejection sampling of AP positions with a minimum pairwise distance
fn place_random<R: Rng + ?Sized>(
    rng: &mut R,
    map_width: f64,
    map_height: f64,
    d_min_ap_ap: f64,
    num_wlans: usize,
) -> Result<Vec<Point3>, GenerationError> {
    let mut positions: Vec<Point3> = Vec::with_capacity(num_wlans);

    for index in 0..num_wlans {
        let mut placed = false;

        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let candidate = Point3::planar(
                map_width * rng.gen::<f64>(),
                map_height * rng.gen::<f64>(),
            );
            if positions.iter().all(|p| p.distance(&candidate) >= d_min_ap_ap) {
                positions.push(candidate);
                placed = true;
                break;
            }
        }

        if !placed {
            return Err(GenerationError::ApPlacementExhausted {
                index,
                d_min_ap_ap,
                attempts: MAX_PLACEMENT_ATTEMPTS,
            });
        }
    }

    Ok(positions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_random_placement_respects_min_distance() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let positions = place_random(&mut rng, 300.0, 300.0, 40.0, 9).unwrap();

        assert_eq!(positions.len(), 9);
        for (i, a) in positions.iter().enumerate() {
            assert!(a.x >= 0.0 && a.x < 300.0);
            assert!(a.y >= 0.0 && a.y < 300.0);
            assert_eq!(a.z, 0.0);
            for b in positions.iter().skip(i + 1) {
                assert!(a.distance(b) >= 40.0);
            }
        }
    }

    #[test]
    fn test_random_placement_gives_up() {
        // Two APs cannot be 100 m apart on a 10x10 map
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let err = place_random(&mut rng, 10.0, 10.0, 100.0, 2).unwrap_err();
        assert!(matches!(err, GenerationError::ApPlacementExhausted { index: 1, .. }));
    }

    #[test]
    fn test_grid_placement_uses_no_randomness() {
        use rand::rngs::mock::StepRng;

        let config = crate::sampler::tests::test_config();
        let settings = GeneratorSettings::default();
        let mut rng = StepRng::new(0, 1);
        let positions = place_access_points(&mut rng, &config, &settings).unwrap();

        assert_eq!(positions.len(), 9);
        // StepRng still at its initial state
        assert_eq!(rng.gen::<u64>(), 0);
    }
}
