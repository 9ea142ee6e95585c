use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use env_logger::Env;
use log::{info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;

use wlangen::config::GeneratorSettings;
use wlangen::config_loader::{load_input_config, load_settings};
use wlangen::orchestrator::generate_all;

/// Random topology input generator for Komondor WLAN simulations
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the input constructor CSV (comment line + one data row)
    #[arg(short, long, default_value = "./input_constructor/input_template_icmlcn.csv")]
    input: PathBuf,

    /// Optional YAML file overriding the generator settings
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Output root directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Number of scenarios to generate
    #[arg(long)]
    scenarios: Option<usize>,

    /// Write an HTML plot of every scenario
    #[arg(long)]
    plot: bool,
}

impl Args {
    /// Settings file (or defaults) with command-line overrides applied
    fn resolve_settings(&self) -> Result<GeneratorSettings> {
        let mut settings = match &self.settings {
            Some(path) => load_settings(path)
                .wrap_err_with(|| format!("Failed to load settings from '{}'", path.display()))?,
            None => GeneratorSettings::default(),
        };

        if let Some(output) = &self.output {
            settings.output_dir = output.clone();
        }
        if let Some(seed) = self.seed {
            settings.seed = seed;
        }
        if let Some(scenarios) = self.scenarios {
            settings.num_scenarios = scenarios;
        }
        if self.plot {
            settings.plot_enabled = true;
        }

        settings.validate()?;
        Ok(settings)
    }
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Parse command-line arguments
    let args = Args::parse();

    // Initialize logging with default filter level of "info"
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    info!("Starting WlanGen scenario generator");
    info!("Input file: {:?}", args.input);

    let settings = args.resolve_settings()?;
    info!(
        "Generating {} scenarios with {} WLANs (seed {}, frequency reuse {})",
        settings.num_scenarios, settings.num_wlans, settings.seed, settings.frequency_reuse
    );

    let config = load_input_config(&args.input)
        .wrap_err_with(|| format!("Error reading the input constructor file '{}'", args.input.display()))?;
    for warning in config.consistency_warnings() {
        warn!("{}", warning);
    }

    let mut rng = ChaCha8Rng::seed_from_u64(settings.seed);
    let summary = generate_all(&mut rng, &args.input, &config, &settings)
        .wrap_err("Scenario generation failed")?;

    info!(
        "Generated {} node files in {:?}",
        summary.files.len(),
        summary.scenario_dir
    );
    info!("Manifest: {:?}", summary.manifest_path);
    Ok(())
}
