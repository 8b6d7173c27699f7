// driver.rs - Generation loop: render the current row, then advance it

use std::io::Write;

use anyhow::{Context, Result};
use cellular::{Automaton, SegmentedEngine, initial_row};
use log::info;
use rand::Rng;

use crate::config::Config;

/// Prints `config.generations` rows to `out`, one line per generation.
pub fn run<R: Rng, W: Write>(config: &Config, rng: &mut R, out: &mut W) -> Result<()> {
    let initial = initial_row(config.width, &config.seeds, rng).context("Failed to build the initial row")?;
    let mut automaton = Automaton::new(initial, config.rule);
    let segmented = config
        .segments
        .map(SegmentedEngine::new)
        .transpose()
        .context("Failed to start the segmented engine")?;

    info!("running {} on {} cells for {} generations", config.rule, config.width, config.generations);

    for generation in 0..config.generations {
        if generation > 0 {
            match &segmented {
                Some(engine) => engine
                    .step(&mut automaton)
                    .with_context(|| format!("Failed to compute generation {generation}"))?,
                None => automaton.step(),
            }
        }
        writeln!(out, "{}", automaton.current().display(&config.symbols)).context("Failed to write generation")?;
    }

    out.flush().context("Failed to flush output")?;
    Ok(())
}
