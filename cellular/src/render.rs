// render.rs - Cell states to characters and back, only at the output boundary

use std::fmt;

use crate::{Cell, Result, Row};

/// Characters used to draw alive and dead cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbols {
    pub alive: char,
    pub dead: char,
}

impl Default for Symbols {
    fn default() -> Self {
        Self { alive: '*', dead: ' ' }
    }
}

impl Symbols {
    pub fn symbol(&self, cell: Cell) -> char {
        match cell {
            Cell::Alive => self.alive,
            Cell::Dead  => self.dead,
        }
    }
}

/// A row drawn with a given set of symbols, one character per cell.
pub struct Rendered<'a> {
    row: &'a Row,
    symbols: &'a Symbols,
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;
        for cell in self.row.iter() {
            f.write_char(self.symbols.symbol(cell))?;
        }
        Ok(())
    }
}

impl Row {
    pub fn display<'a>(&'a self, symbols: &'a Symbols) -> Rendered<'a> {
        Rendered { row: self, symbols }
    }
}

/// Reads a rendered row back: the alive symbol is an alive cell, any other
/// character is a dead one.
pub fn parse_row(text: &str, symbols: &Symbols) -> Result<Row> {
    let cells = text.chars().map(|c| Cell::from(c == symbols.alive)).collect();
    Row::from_cells(cells)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::Error;

    #[test]
    fn renders_with_default_symbols() {
        let row = Row::from_cells(vec![Cell::Dead, Cell::Alive, Cell::Alive, Cell::Dead]).unwrap();
        assert_eq!(row.display(&Symbols::default()).to_string(), " ** ");
    }

    #[test]
    fn renders_with_custom_symbols() {
        let symbols = Symbols { alive: '#', dead: '.' };
        let row = Row::from_cells(vec![Cell::Alive, Cell::Dead, Cell::Alive]).unwrap();
        assert_eq!(row.display(&symbols).to_string(), "#.#");
    }

    #[test]
    fn unknown_characters_read_as_dead() {
        let row = parse_row("*x* ", &Symbols::default()).unwrap();
        assert_eq!(row.cells(), &[Cell::Alive, Cell::Dead, Cell::Alive, Cell::Dead]);
    }

    #[test]
    fn empty_text_is_not_a_row() {
        assert!(matches!(parse_row("", &Symbols::default()), Err(Error::EmptyRow)));
    }

    proptest! {
        #[test]
        fn render_then_parse_round_trips(
            bits in prop::collection::vec(any::<bool>(), 1..100),
            alive in any::<char>(),
            dead in any::<char>(),
        ) {
            prop_assume!(alive != dead);
            let symbols = Symbols { alive, dead };
            let row = Row::from_cells(bits.into_iter().map(Cell::from).collect()).unwrap();
            let text = row.display(&symbols).to_string();
            prop_assert_eq!(text.chars().count(), row.width());
            prop_assert_eq!(parse_row(&text, &symbols).unwrap(), row);
        }
    }
}
