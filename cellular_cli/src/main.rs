// main.rs - Print the generations of an elementary cellular automaton

use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

mod config;  // Flags and the run configuration
mod driver;  // Render/advance loop

use config::{Args, Config};

fn main() -> Result<()> {
    let args = Args::parse();
    simple_logger::SimpleLogger::new()
        .with_level(args.log_level())
        .init()
        .context("Failed to initialise logging")?;
    info!("Starting cellular v{} ...", env!("CARGO_PKG_VERSION"));

    let config = match Config::try_from(args) {
        Ok(config) => config,
        Err(err) => Args::command().error(ErrorKind::InvalidValue, err).exit(),
    };
    debug!("{:?}", config);

    let rng_seed = config.rng_seed.unwrap_or_else(rand::random);
    info!("random seed {}", rng_seed);
    let mut rng = StdRng::seed_from_u64(rng_seed);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    driver::run(&config, &mut rng, &mut out)
}
