// row.rs - Row buffer: one generation as a fixed-width ring of cells

use std::num::NonZeroUsize;
use std::ops::{Index, IndexMut};

use crate::{Cell, Error, Result};

/// One generation of the automaton.
///
/// The width is fixed when the row is created and never changes. Cell `0` and
/// cell `width - 1` are neighbors, so the row behaves as a ring.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Row {
    cells: Box<[Cell]>,
}

impl Row {
    /// A row of `width` dead cells.
    pub fn dead(width: NonZeroUsize) -> Self {
        Self { cells: vec![Cell::Dead; width.get()].into_boxed_slice() }
    }

    pub fn from_cells(cells: Vec<Cell>) -> Result<Self> {
        if cells.is_empty() {
            return Err(Error::EmptyRow);
        }
        Ok(Self { cells: cells.into_boxed_slice() })
    }

    pub fn width(&self) -> usize {
        self.cells.len()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn set(&mut self, index: usize, cell: Cell) -> Result<()> {
        let width = self.width();
        let slot = self.cells.get_mut(index).ok_or(Error::IndexOutOfRange { index, width })?;
        *slot = cell;
        Ok(())
    }

    pub fn toggle(&mut self, index: usize) -> Result<()> {
        let cell = self.get(index).ok_or(Error::IndexOutOfRange { index, width: self.width() })?;
        self.set(index, cell.toggled())
    }

    pub fn alive_count(&self) -> usize {
        self.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Overwrites every cell with the matching cell of `other`.
    ///
    /// # Panics
    ///
    /// Panics if the two rows differ in width.
    pub fn copy_from(&mut self, other: &Row) {
        self.cells.copy_from_slice(&other.cells);
    }

    /// Left, self and right cells of `index`, wrapping around both ends.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a valid cell index.
    pub fn neighborhood(&self, index: usize) -> [Cell; 3] {
        let last = self.width() - 1;
        let left = if index == 0 { last } else { index - 1 };
        let right = if index == last { 0 } else { index + 1 };
        [self.cells[left], self.cells[index], self.cells[right]]
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }
}

impl Index<usize> for Row {
    type Output = Cell;

    fn index(&self, index: usize) -> &Cell {
        &self.cells[index]
    }
}

impl IndexMut<usize> for Row {
    fn index_mut(&mut self, index: usize) -> &mut Cell {
        &mut self.cells[index]
    }
}
