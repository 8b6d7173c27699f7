// rule.rs - Wolfram rule numbers as 8-entry lookup tables

use std::fmt;
use std::str::FromStr;

use crate::{Cell, Error};

/// Elementary rule: bit `p` is the next state of a cell whose neighborhood
/// encodes to the pattern `p`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rule(u8);

impl Rule {
    pub const fn new(number: u8) -> Self {
        Self(number)
    }

    pub const fn number(self) -> u8 {
        self.0
    }

    /// Encodes a neighborhood as `left << 2 | center << 1 | right`.
    pub fn pattern(left: Cell, center: Cell, right: Cell) -> u8 {
        (left.bit() << 2) | (center.bit() << 1) | right.bit()
    }

    /// Looks up bit `pattern` of the rule. Only the low three bits of
    /// `pattern` are used.
    pub fn next_state(self, pattern: u8) -> Cell {
        Cell::from((self.0 >> (pattern & 0b111)) & 1 == 1)
    }

    pub fn apply(self, [left, center, right]: [Cell; 3]) -> Cell {
        self.next_state(Self::pattern(left, center, right))
    }
}

impl Default for Rule {
    fn default() -> Self {
        Self(30)
    }
}

impl From<u8> for Rule {
    fn from(number: u8) -> Self {
        Self(number)
    }
}

impl FromStr for Rule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let number: u64 = s.trim().parse().map_err(|_| Error::InvalidRule(s.to_owned()))?;
        u8::try_from(number).map(Self).map_err(|_| Error::RuleOutOfRange(number))
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rule {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Cell::{Alive as A, Dead as D};

    #[test]
    fn patterns_read_left_to_right() {
        assert_eq!(Rule::pattern(D, D, D), 0);
        assert_eq!(Rule::pattern(D, D, A), 1);
        assert_eq!(Rule::pattern(D, A, D), 2);
        assert_eq!(Rule::pattern(A, D, D), 4);
        assert_eq!(Rule::pattern(A, A, A), 7);
    }

    #[test]
    fn rule_30_table() {
        // 30 = 0b0001_1110
        let rule = Rule::new(30);
        let expected = [D, A, A, A, A, D, D, D];
        for (pattern, cell) in expected.iter().enumerate() {
            assert_eq!(rule.next_state(pattern as u8), *cell, "pattern {pattern}");
        }
    }

    #[test]
    fn apply_matches_table_lookup() {
        let rule = Rule::new(110);
        assert_eq!(rule.apply([A, A, A]), D);
        assert_eq!(rule.apply([A, A, D]), A);
        assert_eq!(rule.apply([D, D, A]), A);
        assert_eq!(rule.apply([D, D, D]), D);
    }

    #[test]
    fn parses_rule_numbers() {
        assert_eq!("0".parse::<Rule>().unwrap(), Rule::new(0));
        assert_eq!("255".parse::<Rule>().unwrap().number(), 255);
        assert_eq!(" 90 ".parse::<Rule>().unwrap(), Rule::new(90));
        assert!(matches!("256".parse::<Rule>(), Err(Error::RuleOutOfRange(256))));
        assert!(matches!("-1".parse::<Rule>(), Err(Error::InvalidRule(_))));
        assert!(matches!("thirty".parse::<Rule>(), Err(Error::InvalidRule(_))));
    }

    #[test]
    fn displays_number() {
        assert_eq!(Rule::default().to_string(), "rule 30");
    }
}
