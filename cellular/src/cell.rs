// cell.rs - Cell state, kept apart from whatever characters it is drawn with

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    /// Bit used when composing a neighborhood pattern.
    pub fn bit(self) -> u8 {
        match self {
            Cell::Dead  => 0,
            Cell::Alive => 1,
        }
    }

    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    pub fn toggled(self) -> Self {
        match self {
            Cell::Dead  => Cell::Alive,
            Cell::Alive => Cell::Dead,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits_and_bools_agree() {
        assert_eq!(Cell::from(true).bit(), 1);
        assert_eq!(Cell::from(false).bit(), 0);
        assert_eq!(Cell::default(), Cell::Dead);
    }

    #[test]
    fn toggle_flips_state() {
        assert_eq!(Cell::Dead.toggled(), Cell::Alive);
        assert_eq!(Cell::Alive.toggled().toggled(), Cell::Alive);
        assert!(!Cell::Alive.toggled().is_alive());
    }
}
