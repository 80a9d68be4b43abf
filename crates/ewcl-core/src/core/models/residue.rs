use crate::core::utils::identifiers::{UNKNOWN_RESIDUE_SYMBOL, is_standard_symbol, one_letter_code};
use serde::Serialize;
use std::fmt;

/// A one-letter amino-acid symbol, or the unknown sentinel `X`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "char")]
pub struct ResidueCode(char);

impl ResidueCode {
    pub const UNKNOWN: ResidueCode = ResidueCode(UNKNOWN_RESIDUE_SYMBOL);

    /// Converts a three-letter residue name. Unrecognized names map to [`ResidueCode::UNKNOWN`].
    pub fn from_three_letter(name: &str) -> Self {
        one_letter_code(name).map_or(Self::UNKNOWN, ResidueCode)
    }

    /// Accepts one of the 20 standard symbols or the unknown sentinel, in either case.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        let symbol = symbol.to_ascii_uppercase();
        if symbol == UNKNOWN_RESIDUE_SYMBOL || is_standard_symbol(symbol) {
            Some(ResidueCode(symbol))
        } else {
            None
        }
    }

    pub fn symbol(self) -> char {
        self.0
    }

    pub fn is_unknown(self) -> bool {
        self == Self::UNKNOWN
    }
}

impl From<ResidueCode> for char {
    fn from(code: ResidueCode) -> Self {
        code.0
    }
}

impl fmt::Display for ResidueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One alpha-carbon residue as read from an ATOM record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResidueRecord {
    pub chain_id: char,      // Chain identifier, ' ' when the column is blank
    pub residue_number: i32, // Residue sequence number from columns 23-26
    pub name: String,        // Three-letter residue name (e.g., "ALA")
    pub code: ResidueCode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_three_letter_converts_standard_names() {
        assert_eq!(ResidueCode::from_three_letter("TRP").symbol(), 'W');
        assert_eq!(ResidueCode::from_three_letter("lys").symbol(), 'K');
    }

    #[test]
    fn from_three_letter_maps_unrecognized_names_to_unknown() {
        let code = ResidueCode::from_three_letter("MSE");
        assert!(code.is_unknown());
        assert_eq!(code.symbol(), 'X');
    }

    #[test]
    fn from_symbol_accepts_standard_symbols_and_sentinel() {
        assert_eq!(ResidueCode::from_symbol('a').map(ResidueCode::symbol), Some('A'));
        assert_eq!(ResidueCode::from_symbol('X'), Some(ResidueCode::UNKNOWN));
        assert_eq!(ResidueCode::from_symbol('B'), None);
        assert_eq!(ResidueCode::from_symbol('1'), None);
    }
}
