//! # WlanGen - Random topology input generator for Komondor WLAN simulations
//!
//! This library produces the node files consumed by the Komondor IEEE 802.11
//! simulator. Each file describes one scenario: a set of WLANs, each made of
//! an access point (AP) and a random number of stations (STAs) placed around
//! it, together with the channel, traffic and backoff attributes of every
//! node.
//!
//! ## Overview
//!
//! - APs sit at the centres of a fixed grid (or at random positions at least
//!   `d_min_AP_AP` apart)
//! - STAs are drawn uniformly over the annulus between `d_min_AP_STA` and
//!   `d_max_AP_STA` around their AP
//! - Every WLAN gets a random channel in `[0, frequency_reuse - 1]`
//! - One file is written per scenario and backoff approach
//! - A single seeded generator drives the whole run, so runs are reproducible
//!
//! ## Architecture
//!
//! - `config`: input row and generator settings types
//! - `config_loader`: input constructor CSV and settings YAML loading
//! - `topology`: AP placement (grid and random)
//! - `sampler`: station sampling
//! - `wlan`: WLAN construction and node codes
//! - `output`: node rows, CSV writer and run manifest
//! - `plot`: optional HTML scenario plots
//! - `orchestrator`: the generation loop
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use std::path::Path;
//! use wlangen::{config::GeneratorSettings, config_loader, orchestrator};
//!
//! let input = Path::new("input_constructor/input_template_icmlcn.csv");
//! let config = config_loader::load_input_config(input)?;
//! let settings = GeneratorSettings::default();
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(settings.seed);
//! let summary = orchestrator::generate_all(&mut rng, input, &config, &settings)?;
//! println!("{} files in {:?}", summary.files.len(), summary.scenario_dir);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Input Format
//!
//! The input constructor is a two-line, semicolon-separated file: a comment
//! line followed by 26 numeric values (map size, STA count and distance
//! bounds, channel, traffic and spatial-reuse defaults).
//!
//! ## Error Handling
//!
//! Library functions return typed errors (`ConfigError`, `GenerationError`).
//! The binary reports them through `color_eyre`. Every error ends the run.

pub mod config;
pub mod config_loader;
pub mod error;
pub mod topology;
pub mod sampler;
pub mod wlan;
pub mod output;
pub mod plot;
pub mod orchestrator;
