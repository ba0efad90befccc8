// src/core/types.rs
use crate::error::{AutocompleteError, Result};

/// Letters `a`-`z` plus the space character.
pub const ALPHABET_SIZE: usize = 27;
const SPACE_INDEX: u8 = 26;

/// Cumulative rank score of a stored sentence.
pub type Weight = u64;

/// One member of the 27-symbol alphabet, stored as its child-slot index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(u8);

impl Symbol {
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Inverse of `index`. Callers only pass slot indices of a node's child array.
    pub fn from_index(index: usize) -> Self {
        debug_assert!(index < ALPHABET_SIZE);
        Self(index as u8)
    }

    pub fn to_char(self) -> char {
        if self.0 == SPACE_INDEX {
            ' '
        } else {
            (b'a' + self.0) as char
        }
    }
}

impl TryFrom<char> for Symbol {
    type Error = AutocompleteError;

    fn try_from(c: char) -> Result<Self> {
        match c {
            'a'..='z' => Ok(Self(c as u8 - b'a')),
            ' ' => Ok(Self(SPACE_INDEX)),
            _ => Err(AutocompleteError::InvalidSymbol(c)),
        }
    }
}

/// Validates a whole string against the alphabet without allocating nodes.
pub fn encode(text: &str) -> Result<Vec<Symbol>> {
    text.chars().map(Symbol::try_from).collect()
}

/// A stored sentence together with its accumulated weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub sentence: String,
    pub weight: Weight,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_and_space_map_to_slots() {
        assert_eq!(Symbol::try_from('a').unwrap().index(), 0);
        assert_eq!(Symbol::try_from('z').unwrap().index(), 25);
        assert_eq!(Symbol::try_from(' ').unwrap().index(), 26);
        for index in 0..ALPHABET_SIZE {
            let symbol = Symbol::from_index(index);
            assert_eq!(Symbol::try_from(symbol.to_char()).unwrap(), symbol);
        }
    }

    #[test]
    fn rejects_everything_else() {
        for c in ['A', '#', '1', '\n', 'é', '-'] {
            assert!(matches!(
                Symbol::try_from(c),
                Err(AutocompleteError::InvalidSymbol(bad)) if bad == c
            ));
        }
        assert!(encode("hello world").is_ok());
        assert!(encode("hello, world").is_err());
    }
}
