//! Scenario generation orchestrator.
//!
//! This module runs the generation loop: APs are placed, then for every
//! scenario the stations are sampled and one node file is written per
//! backoff approach. Everything runs sequentially on a single random stream,
//! so a given seed and input always produce the same files.

use log::info;
use rand::Rng;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{ApPlacement, GeneratorSettings, InputConfig};
use crate::error::GenerationError;
use crate::output::{write_scenario_file, ManifestEntry, RunManifest};
use crate::plot::plot_scenario;
use crate::sampler::sample_scenario;
use crate::topology::place_access_points;
use crate::wlan::{generate_wlans, BackoffParameters};

/// Result of a generation run
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub scenario_dir: PathBuf,
    pub manifest_path: PathBuf,
    pub files: Vec<ManifestEntry>,
}

/// Generates every scenario file described by `settings`.
///
/// Grid placement happens once for the whole run; random placement draws new
/// AP positions at the start of every scenario.
pub fn generate_all<R: Rng + ?Sized>(
    rng: &mut R,
    input_path: &Path,
    config: &InputConfig,
    settings: &GeneratorSettings,
) -> Result<RunSummary, GenerationError> {
    let scenario_dir = settings.scenario_dir();
    fs::create_dir_all(&scenario_dir).map_err(|e| GenerationError::io(&scenario_dir, e))?;

    let grid = match settings.placement {
        ApPlacement::Grid => Some(place_access_points(rng, config, settings)?),
        ApPlacement::Random => None,
    };

    let mut manifest = RunManifest::new(input_path, settings);

    for n in 0..settings.num_scenarios {
        info!("Scenario {}/{}", n + 1, settings.num_scenarios);

        let ap_positions = match &grid {
            Some(centers) => centers.clone(),
            None => place_access_points(rng, config, settings)?,
        };
        let scenario = sample_scenario(rng, n, config, ap_positions)?;

        if settings.plot_enabled {
            plot_scenario(&scenario_dir, &scenario)?;
        }

        for &approach in &settings.backoff_approaches {
            let backoff = BackoffParameters::new(approach, &settings.cw);
            let wlans = generate_wlans(rng, config, settings.frequency_reuse, backoff, &scenario)?;

            let path = scenario_dir.join(settings.scenario_file_name(n, approach));
            let rows = write_scenario_file(&path, &wlans, settings.columns)?;

            manifest.record(ManifestEntry {
                scenario: n,
                backoff_type: approach,
                path,
                station_counts: scenario.station_counts(),
                rows,
            });
        }
    }

    let manifest_path = manifest.write_to(&scenario_dir)?;

    Ok(RunSummary {
        scenario_dir,
        manifest_path,
        files: manifest.files,
    })
}
