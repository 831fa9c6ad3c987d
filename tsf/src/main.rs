use std::fs::File;
use std::io::BufReader;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use circpack::io::export::export_instance;
use circpack::io::import::import_instance;
use log::{info, warn};
use rand::SeedableRng;
use rand::prelude::SmallRng;
use tsf::config::TSFConfig;
use tsf::io;
use tsf::io::cli::Cli;
use tsf::opt::{TSFPacker, generate_instance};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            TSFConfig::default()
        }
        Some(config_file) => {
            let file = File::open(&config_file)
                .with_context(|| format!("could not open config file: {}", config_file.display()))?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    info!("[MAIN] Successfully parsed TSFConfig: {config:?}");

    let mut rng = match config.prng_seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    let (ext_instance, stem) = match &args.input_file {
        Some(input_file) => {
            let stem = input_file
                .file_stem()
                .and_then(|s| s.to_str())
                .with_context(|| format!("invalid input file name: {}", input_file.display()))?
                .to_string();
            (io::read_instance(input_file)?, stem)
        }
        None => {
            let instance = generate_instance(&config.generator, &mut rng)?;
            info!(
                "[MAIN] No input file provided, generated instance {} with {} circles",
                instance.name,
                instance.n_circles()
            );
            let stem = instance.name.clone();
            (export_instance(&instance), stem)
        }
    };

    let instance = import_instance(&ext_instance)?;
    let solution = TSFPacker::new(instance, config, rng).solve();

    io::write_solution(&args.solution_folder, &stem, &ext_instance, &solution, &config)?;

    Ok(())
}
