// patterns.rs - Initial row construction from start tokens

use std::num::NonZeroUsize;

use log::debug;
use rand::Rng;

use crate::{Cell, Error, Result, Row};

/// One instruction for bringing cells of the initial row to life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seed {
    /// `m`: the middle cell, index `width / 2`.
    Middle,
    /// `l`: the leftmost cell.
    Left,
    /// `<n>`: the cell at index `n`.
    Index(usize),
    /// `r <percent>`: every cell alive with probability `percent` / 100.
    Random { percent: u8 },
}

/// Parses start tokens such as `["m", "0", "r", "25"]`.
pub fn parse_seeds<I, S>(tokens: I) -> Result<Vec<Seed>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tokens = tokens.into_iter();
    let mut seeds = Vec::new();
    while let Some(token) = tokens.next() {
        let seed = match token.as_ref() {
            "m" => Seed::Middle,
            "l" => Seed::Left,
            "r" => {
                let percent = tokens.next().ok_or(Error::MissingPercent)?;
                Seed::Random { percent: parse_percent(percent.as_ref())? }
            }
            other => other
                .parse()
                .map(Seed::Index)
                .map_err(|_| Error::InvalidSeed(other.to_owned()))?,
        };
        seeds.push(seed);
    }
    Ok(seeds)
}

fn parse_percent(token: &str) -> Result<u8> {
    let percent: u32 = token.parse().map_err(|_| Error::InvalidSeed(token.to_owned()))?;
    match u8::try_from(percent) {
        Ok(percent) if percent <= 100 => Ok(percent),
        _ => Err(Error::PercentOutOfRange(percent)),
    }
}

/// Builds generation 0: every cell dead, then each seed applied in order.
/// No seeds means the middle cell alone.
pub fn initial_row<R: Rng>(width: NonZeroUsize, seeds: &[Seed], rng: &mut R) -> Result<Row> {
    let mut row = Row::dead(width);
    let seeds = if seeds.is_empty() { &[Seed::Middle][..] } else { seeds };

    for seed in seeds {
        match *seed {
            Seed::Middle => row[width.get() / 2] = Cell::Alive,
            Seed::Left   => row[0] = Cell::Alive,
            Seed::Index(index) => row.set(index, Cell::Alive)?,
            Seed::Random { percent } => {
                for index in 0..width.get() {
                    if rng.gen_range(0..100) < percent {
                        row[index] = Cell::Alive;
                    }
                }
            }
        }
    }

    debug!("initial row: {} of {} cells alive", row.alive_count(), row.width());
    Ok(row)
}
