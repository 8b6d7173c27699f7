// lib.rs - One-dimensional binary cellular automata (Wolfram's elementary rules)

pub mod cell;      // Two-valued cell state
pub mod coro;      // Segmented engine, one coroutine per run of cells
pub mod engine;    // Synchronous generation update
pub mod error;
pub mod patterns;  // Initial row construction
pub mod render;    // Text rendering at the output boundary
pub mod row;       // Fixed-width ring of cells
pub mod rule;      // 8-bit rule table

pub use cell::Cell;
pub use coro::SegmentedEngine;
pub use engine::{Automaton, advance, advance_into};
pub use error::{Error, Result};
pub use patterns::{Seed, initial_row, parse_seeds};
pub use render::{Symbols, parse_row};
pub use row::Row;
pub use rule::Rule;
