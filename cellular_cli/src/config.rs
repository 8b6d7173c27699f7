// config.rs - Command-line flags and the immutable run configuration

use std::num::NonZeroUsize;

use cellular::{Rule, Seed, Symbols, parse_seeds};
use clap::Parser;
use log::LevelFilter;

/// Print the generations of a one-dimensional binary cellular automaton.
#[derive(Parser, Debug)]
#[command(name = "cellular", version)]
pub struct Args {
    /// Rule table value (0-255).
    #[arg(short, long, default_value = "30", value_name = "RULE")]
    pub rule: Rule,

    /// Row width in cells.
    #[arg(short, long, default_value = "80", value_name = "WIDTH")]
    pub cells: NonZeroUsize,

    /// Number of generations printed.
    #[arg(short, long, default_value_t = 20, value_name = "COUNT")]
    pub times: u64,

    /// Symbol for alive cells.
    #[arg(short = 'l', long, default_value_t = '*', value_name = "CHAR")]
    pub alive: char,

    /// Symbol for dead cells.
    #[arg(short, long, default_value_t = ' ', value_name = "CHAR")]
    pub dead: char,

    /// Initial cells: indices, `m` (middle), `l` (leftmost) or `r <percent>` (random).
    #[arg(short, long, num_args = 1.., value_name = "CELLS")]
    pub start: Vec<String>,

    /// Seed for the random start; drawn from the OS when omitted.
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Compute each generation as this many concurrent segments.
    #[arg(long, value_name = "COUNT")]
    pub segments: Option<NonZeroUsize>,

    /// Log more to stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Everything a run needs, fixed once the flags are parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub rule: Rule,
    pub width: NonZeroUsize,
    pub generations: u64,
    pub symbols: Symbols,
    pub seeds: Vec<Seed>,
    pub rng_seed: Option<u64>,
    pub segments: Option<NonZeroUsize>,
}

impl TryFrom<Args> for Config {
    type Error = cellular::Error;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let width = args.cells;
        let seeds = parse_seeds(&args.start)?;
        // Start cells are checked here so a bad index is a usage error
        if let Some(&Seed::Index(index)) = seeds.iter().find(|seed| matches!(seed, Seed::Index(i) if *i >= width.get())) {
            return Err(cellular::Error::IndexOutOfRange { index, width: width.get() });
        }

        Ok(Self {
            rule: args.rule,
            width,
            generations: args.times,
            symbols: Symbols { alive: args.alive, dead: args.dead },
            seeds,
            rng_seed: args.seed,
            segments: args.segments,
        })
    }
}
