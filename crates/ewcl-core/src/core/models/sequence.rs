use super::residue::ResidueCode;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Ordered residue codes; index 0 is residue position 1.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct Sequence {
    residues: Vec<ResidueCode>,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid residue symbol '{symbol}' at position {position}")]
pub struct ParseSequenceError {
    pub symbol: char,
    pub position: usize,
}

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    pub fn residues(&self) -> &[ResidueCode] {
        &self.residues
    }

    pub fn iter(&self) -> impl Iterator<Item = ResidueCode> + '_ {
        self.residues.iter().copied()
    }

    /// Residue at a 1-based position.
    pub fn get(&self, position: usize) -> Option<ResidueCode> {
        position
            .checked_sub(1)
            .and_then(|i| self.residues.get(i))
            .copied()
    }

    pub fn unknown_count(&self) -> usize {
        self.residues.iter().filter(|c| c.is_unknown()).count()
    }

    pub(crate) fn push(&mut self, code: ResidueCode) {
        self.residues.push(code);
    }
}

impl FromIterator<ResidueCode> for Sequence {
    fn from_iter<I: IntoIterator<Item = ResidueCode>>(iter: I) -> Self {
        Self {
            residues: iter.into_iter().collect(),
        }
    }
}

impl FromStr for Sequence {
    type Err = ParseSequenceError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .filter(|c| !c.is_whitespace())
            .enumerate()
            .map(|(i, symbol)| {
                ResidueCode::from_symbol(symbol).ok_or(ParseSequenceError {
                    symbol,
                    position: i + 1,
                })
            })
            .collect()
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for code in &self.residues {
            write!(f, "{}", code)?;
        }
        Ok(())
    }
}

impl From<Sequence> for String {
    fn from(sequence: Sequence) -> Self {
        sequence.to_string()
    }
}
