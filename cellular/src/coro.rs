// coro.rs - Segmented update: each run of cells is computed by its own coroutine
//
// Produces exactly the same rows as `engine::advance_into`; the segments only
// change how the work of one generation is scheduled.

use std::num::NonZeroUsize;
use std::sync::Arc;

use log::debug;
use tokio::runtime::Runtime;

use crate::{Automaton, Cell, Error, Result, Row, Rule};

/// Segment coroutine: computes cells `start..end` from the frozen snapshot.
async fn process_segment(start: usize, end: usize, previous: Arc<Row>, rule: Rule) -> (usize, Vec<Cell>) {
    let mut segment = Vec::with_capacity(end - start);
    for index in start..end {
        segment.push(rule.apply(previous.neighborhood(index)));
        tokio::task::yield_now().await;  // Cooperative yielding
    }
    (start, segment)  // Return (segment start, completed cells)
}

/// Runs generation updates as concurrent segment tasks on a private runtime.
pub struct SegmentedEngine {
    runtime: Runtime,
    segments: NonZeroUsize,
}

impl SegmentedEngine {
    pub fn new(segments: NonZeroUsize) -> Result<Self> {
        let runtime = Runtime::new().map_err(Error::Runtime)?;
        debug!("segmented engine started with {} segments", segments);
        Ok(Self { runtime, segments })
    }

    pub fn segments(&self) -> NonZeroUsize {
        self.segments
    }

    /// Writes the generation after `previous` into `next`.
    ///
    /// # Panics
    ///
    /// Panics if the two rows differ in width.
    pub fn advance_into(&self, previous: &Row, next: &mut Row, rule: Rule) -> Result<()> {
        assert_eq!(previous.width(), next.width(), "scratch row must match the previous generation");

        let width = previous.width();
        let segment_len = width.div_ceil(self.segments.get().min(width));
        let snapshot = Arc::new(previous.clone());

        self.runtime.block_on(async {
            // Spawn every segment up front so they interleave
            let mut handles = Vec::new();
            for start in (0..width).step_by(segment_len) {
                let end = (start + segment_len).min(width);
                handles.push(tokio::spawn(process_segment(start, end, Arc::clone(&snapshot), rule)));
            }

            // Stitch completed segments back by start index
            for handle in handles {
                let (start, segment) = handle.await?;
                next.cells_mut()[start..start + segment.len()].copy_from_slice(&segment);
            }
            Ok::<(), Error>(())
        })
    }

    pub fn step(&self, automaton: &mut Automaton) -> Result<()> {
        automaton.step_with(|previous, next, rule| self.advance_into(previous, next, rule))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::advance;

    fn engine(segments: usize) -> SegmentedEngine {
        SegmentedEngine::new(NonZeroUsize::new(segments).unwrap()).unwrap()
    }

    fn seeded(width: usize, alive: &[usize]) -> Row {
        let mut row = Row::dead(NonZeroUsize::new(width).unwrap());
        for &index in alive {
            row[index] = Cell::Alive;
        }
        row
    }

    #[test]
    fn rule_30_single_seed_first_step() {
        let previous = seeded(10, &[5]);
        let mut next = previous.clone();
        engine(3).advance_into(&previous, &mut next, Rule::new(30)).unwrap();
        assert_eq!(next, seeded(10, &[4, 5, 6]));
    }

    #[test]
    fn more_segments_than_cells() {
        let previous = seeded(3, &[0]);
        let mut next = previous.clone();
        engine(16).advance_into(&previous, &mut next, Rule::new(90)).unwrap();
        assert_eq!(next, seeded(3, &[1, 2]));
    }

    #[test]
    fn steps_an_automaton() {
        let segmented = engine(4);
        let mut automaton = Automaton::new(seeded(21, &[10]), Rule::new(30));
        let mut expected = automaton.current().clone();
        for _ in 0..10 {
            segmented.step(&mut automaton).unwrap();
            expected = advance(&expected, Rule::new(30));
        }
        assert_eq!(automaton.generation(), 10);
        assert_eq!(automaton.current(), &expected);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn matches_sequential_engine(
            bits in prop::collection::vec(any::<bool>(), 1..120),
            rule: u8,
            segments in 1..12usize,
        ) {
            let previous = Row::from_cells(bits.into_iter().map(Cell::from).collect()).unwrap();
            let mut next = previous.clone();
            engine(segments).advance_into(&previous, &mut next, Rule::new(rule)).unwrap();
            prop_assert_eq!(next, advance(&previous, Rule::new(rule)));
        }
    }
}
