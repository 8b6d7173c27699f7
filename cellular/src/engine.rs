// engine.rs - Synchronous generation update with a persistent scratch row

use std::convert::Infallible;
use std::mem;

use log::trace;

use crate::{Row, Rule};

/// Computes the generation after `previous` as a new row.
pub fn advance(previous: &Row, rule: Rule) -> Row {
    let mut next = previous.clone();
    advance_into(previous, &mut next, rule);
    next
}

/// Writes the generation after `previous` into `next`.
///
/// Every cell is computed from `previous` alone, which is never written to,
/// so no cell sees a neighbor's updated value within the same step.
///
/// # Panics
///
/// Panics if the two rows differ in width.
pub fn advance_into(previous: &Row, next: &mut Row, rule: Rule) {
    assert_eq!(previous.width(), next.width(), "scratch row must match the previous generation");
    for (index, cell) in next.cells_mut().iter_mut().enumerate() {
        *cell = rule.apply(previous.neighborhood(index));
    }
}

/// A running automaton: the current generation plus one reusable scratch row.
#[derive(Debug, Clone)]
pub struct Automaton {
    current: Row,
    scratch: Row,
    rule: Rule,
    generation: u64,
}

impl Automaton {
    pub fn new(initial: Row, rule: Rule) -> Self {
        let scratch = initial.clone();
        Self { current: initial, scratch, rule, generation: 0 }
    }

    pub fn current(&self) -> &Row {
        &self.current
    }

    pub fn rule(&self) -> Rule {
        self.rule
    }

    pub fn width(&self) -> usize {
        self.current.width()
    }

    /// Number of steps taken since construction or the last reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn step(&mut self) {
        let Ok(()) = self.step_with(|previous, next, rule| {
            advance_into(previous, next, rule);
            Ok::<(), Infallible>(())
        });
    }

    /// Advances one generation using `update` to fill the scratch row, then
    /// swaps it in. On error the current generation is left untouched.
    pub fn step_with<E, F>(&mut self, update: F) -> Result<(), E>
    where
        F: FnOnce(&Row, &mut Row, Rule) -> Result<(), E>,
    {
        update(&self.current, &mut self.scratch, self.rule)?;
        mem::swap(&mut self.current, &mut self.scratch);
        self.generation += 1;
        trace!("generation {}: {} alive", self.generation, self.current.alive_count());
        Ok(())
    }

    /// Replaces the current row and restarts the generation count.
    pub fn reset(&mut self, row: Row) {
        self.scratch = row.clone();
        self.current = row;
        self.generation = 0;
    }
}
