//! Error type shared by every module of the crate.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A row needs at least one cell.
    #[error("a row must hold at least one cell")]
    EmptyRow,

    #[error("cell index {index} is outside a row of width {width}")]
    IndexOutOfRange { index: usize, width: usize },

    #[error("invalid rule `{0}`, expected an integer from 0 to 255")]
    InvalidRule(String),

    #[error("rule {0} is outside 0..=255")]
    RuleOutOfRange(u64),

    /// Unrecognised token in an initial-row description.
    #[error("invalid start token `{0}`, expected a cell index, `m`, `l` or `r <percent>`")]
    InvalidSeed(String),

    #[error("random start `r` must be followed by a percentage")]
    MissingPercent,

    #[error("percentage {0} is outside 0..=100")]
    PercentOutOfRange(u32),

    #[error("failed to start the segment runtime: {0}")]
    Runtime(#[source] std::io::Error),

    #[error("segment task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, Error>;
