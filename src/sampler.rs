//! Station placement around access points.
//!
//! Stations are drawn inside the annulus `[d_min_AP_STA, d_max_AP_STA]`
//! around their AP. The radius uses `d_min + sqrt(u) * (d_max - d_min)`, which
//! is area-uniform for a full disc (`d_min = 0`) and otherwise spreads
//! stations toward the outer edge.

use log::debug;
use rand::Rng;

use crate::config::InputConfig;
use crate::error::GenerationError;
use crate::topology::Point3;

/// AP and STA positions of one scenario
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub index: usize,
    pub ap_positions: Vec<Point3>,
    /// One list per AP, same order as `ap_positions`
    pub station_positions: Vec<Vec<Point3>>,
}

impl Scenario {
    /// Number of stations of every WLAN
    pub fn station_counts(&self) -> Vec<usize> {
        self.station_positions.iter().map(Vec::len).collect()
    }

    /// Total number of nodes, APs included
    pub fn node_count(&self) -> usize {
        self.ap_positions.len() + self.station_positions.iter().map(Vec::len).sum::<usize>()
    }
}

/// Draws a station count uniformly from `[min, max]`
pub fn sample_station_count<R: Rng + ?Sized>(
    rng: &mut R,
    min: u32,
    max: u32,
) -> Result<u32, GenerationError> {
    if min > max {
        return Err(GenerationError::InvalidStationRange { min, max });
    }
    Ok(rng.gen_range(min..=max))
}

/// Draws one station position around `ap`.
///
/// The angle is drawn first, then the radius variate.
pub fn sample_station_position<R: Rng + ?Sized>(
    rng: &mut R,
    ap: &Point3,
    d_min: f64,
    d_max: f64,
) -> Point3 {
    let angle = 360.0 * rng.gen::<f64>();
    let u: f64 = rng.gen();
    let d_ap_sta = d_min + u.sqrt() * (d_max - d_min);

    let radians = angle.to_radians();
    Point3::planar(ap.x + radians.cos() * d_ap_sta, ap.y + radians.sin() * d_ap_sta)
}

/// Samples the stations of every AP of scenario `index`.
///
/// For each AP in order: the station count, then every station position.
pub fn sample_scenario<R: Rng + ?Sized>(
    rng: &mut R,
    index: usize,
    config: &InputConfig,
    ap_positions: Vec<Point3>,
) -> Result<Scenario, GenerationError> {
    let mut station_positions = Vec::with_capacity(ap_positions.len());

    for (w, ap) in ap_positions.iter().enumerate() {
        let num_stas = sample_station_count(rng, config.num_sta_min, config.num_sta_max)?;

        let stations: Vec<Point3> = (0..num_stas)
            .map(|_| sample_station_position(rng, ap, config.d_min_ap_sta, config.d_max_ap_sta))
            .collect();

        for (n, sta) in stations.iter().enumerate() {
            debug!("Scenario {} WLAN {} STA {}: distance {:.4}", index, w, n + 1, ap.distance(sta));
        }

        station_positions.push(stations);
    }

    Ok(Scenario {
        index,
        ap_positions,
        station_positions,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    /// Input row used across unit tests
    pub(crate) fn test_config() -> InputConfig {
        InputConfig {
            map_width: 300.0,
            map_height: 300.0,
            num_wlans: 9,
            num_sta_min: 1,
            num_sta_max: 5,
            d_min_ap_ap: 10.0,
            d_min_ap_sta: 1.0,
            d_max_ap_sta: 10.0,
            legacy_ratio: 0.0,
            c_sys_width: 1,
            tpc_default: 20,
            cca_default: -82,
            channel_bonding_model: 0,
            central_freq: 5.0,
            traffic_model: 99,
            traffic_load: 1000,
            packet_length: 12000,
            num_packets_aggregated: 64,
            capture_effect_model: 1,
            capture_effect_thr: 10.0,
            constant_per: 0.0,
            pifs_activated: 1,
            bss_color: 0,
            spatial_reuse_group: 0,
            non_srg_obss_pd: -82,
            srg_obss_pd: -82,
        }
    }

    #[test]
    fn test_station_count_within_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut seen = [false; 4];
        for _ in 0..1000 {
            let count = sample_station_count(&mut rng, 2, 5).unwrap();
            assert!((2..=5).contains(&count));
            seen[(count - 2) as usize] = true;
        }
        assert!(seen.iter().all(|s| *s), "every count in range should appear");
    }

    #[test]
    fn test_station_count_single_value() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(sample_station_count(&mut rng, 4, 4).unwrap(), 4);
    }

    #[test]
    fn test_inverted_station_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let err = sample_station_count(&mut rng, 6, 3).unwrap_err();
        assert!(matches!(err, GenerationError::InvalidStationRange { min: 6, max: 3 }));
    }

    #[test]
    fn test_station_distance_within_annulus() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let ap = Point3::planar(150.0, 150.0);
        for _ in 0..10_000 {
            let sta = sample_station_position(&mut rng, &ap, 5.0, 20.0);
            let d = ap.distance(&sta);
            assert!(d >= 5.0 - 1e-9 && d <= 20.0 + 1e-9, "distance {} out of range", d);
            assert_eq!(sta.z, 0.0);
        }
    }

    #[test]
    fn test_radius_is_area_uniform() {
        // For a disc of radius R, P(r < R/2) is 1/4 when uniform over the area
        // and 1/2 when uniform over the radius.
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let ap = Point3::planar(0.0, 0.0);
        let samples = 100_000;

        let inner = (0..samples)
            .map(|_| sample_station_position(&mut rng, &ap, 0.0, 10.0))
            .filter(|sta| ap.distance(sta) < 5.0)
            .count();
        let fraction = inner as f64 / samples as f64;

        assert!((fraction - 0.25).abs() < 0.01, "fraction inside half radius: {}", fraction);
    }

    #[test]
    fn test_annulus_offset_follows_sqrt_law() {
        // The offset d - d_min is sqrt(u) scaled, so a quarter of the samples
        // fall in the inner half of [10, 20] (plain u scaling would give half).
        let mut rng = ChaCha8Rng::seed_from_u64(13);
        let ap = Point3::planar(0.0, 0.0);
        let samples = 100_000;

        let inner = (0..samples)
            .map(|_| sample_station_position(&mut rng, &ap, 10.0, 20.0))
            .filter(|sta| ap.distance(sta) - 10.0 < 5.0)
            .count();
        let fraction = inner as f64 / samples as f64;

        assert!((fraction - 0.25).abs() < 0.01, "fraction in inner half: {}", fraction);
    }

    #[test]
    fn test_fixed_sequence_generator() {
        // StepRng yielding zeros: angle 0 and u = 0 put the STA at d_min on the x axis
        let mut rng = StepRng::new(0, 0);
        let ap = Point3::planar(50.0, 50.0);
        let sta = sample_station_position(&mut rng, &ap, 3.0, 10.0);
        assert_eq!(sta, Point3::planar(53.0, 50.0));
    }

    #[test]
    fn test_sample_scenario_shape() {
        let config = test_config();
        let aps = crate::topology::grid_centers(300.0, 300.0, 3, 3, 9);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let scenario = sample_scenario(&mut rng, 0, &config, aps.clone()).unwrap();

        assert_eq!(scenario.ap_positions, aps);
        assert_eq!(scenario.station_positions.len(), 9);
        for (ap, stations) in aps.iter().zip(&scenario.station_positions) {
            assert!((1..=5).contains(&stations.len()));
            for sta in stations {
                let d = ap.distance(sta);
                assert!(d >= 1.0 - 1e-9 && d <= 10.0 + 1e-9);
            }
        }
        assert_eq!(
            scenario.node_count(),
            9 + scenario.station_counts().iter().sum::<usize>()
        );
    }

    #[test]
    fn test_same_seed_same_scenario() {
        let config = test_config();
        let aps = crate::topology::grid_centers(300.0, 300.0, 3, 3, 9);

        let mut rng_a = ChaCha8Rng::seed_from_u64(5);
        let mut rng_b = ChaCha8Rng::seed_from_u64(5);
        let a = sample_scenario(&mut rng_a, 0, &config, aps.clone()).unwrap();
        let b = sample_scenario(&mut rng_b, 0, &config, aps).unwrap();

        assert_eq!(a, b);
    }
}
