use phf::{Map, phf_map};

/// One-letter symbol used for any residue name missing from [`THREE_TO_ONE`].
pub const UNKNOWN_RESIDUE_SYMBOL: char = 'X';

/// Atom name of the backbone alpha carbon, one per residue.
pub const ALPHA_CARBON: &str = "CA";

static THREE_TO_ONE: Map<&'static str, char> = phf_map! {
    "ALA" => 'A', "ARG" => 'R', "ASN" => 'N', "ASP" => 'D', "CYS" => 'C',
    "GLN" => 'Q', "GLU" => 'E', "GLY" => 'G', "HIS" => 'H', "ILE" => 'I',
    "LEU" => 'L', "LYS" => 'K', "MET" => 'M', "PHE" => 'F', "PRO" => 'P',
    "SER" => 'S', "THR" => 'T', "TRP" => 'W', "TYR" => 'Y', "VAL" => 'V',
};

/// Looks up the one-letter code of a standard residue name.
///
/// Surrounding whitespace is ignored and the name is matched case-insensitively.
pub fn one_letter_code(residue_name: &str) -> Option<char> {
    let name = residue_name.trim();
    if name.len() != 3 {
        return None;
    }
    THREE_TO_ONE.get(name.to_ascii_uppercase().as_str()).copied()
}

pub fn is_standard_symbol(symbol: char) -> bool {
    THREE_TO_ONE.values().any(|&c| c == symbol)
}

pub fn is_alpha_carbon(atom_name: &str) -> bool {
    atom_name.trim() == ALPHA_CARBON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_letter_code_maps_all_twenty_standard_residues() {
        let pairs = [
            ("ALA", 'A'), ("ARG", 'R'), ("ASN", 'N'), ("ASP", 'D'), ("CYS", 'C'),
            ("GLN", 'Q'), ("GLU", 'E'), ("GLY", 'G'), ("HIS", 'H'), ("ILE", 'I'),
            ("LEU", 'L'), ("LYS", 'K'), ("MET", 'M'), ("PHE", 'F'), ("PRO", 'P'),
            ("SER", 'S'), ("THR", 'T'), ("TRP", 'W'), ("TYR", 'Y'), ("VAL", 'V'),
        ];
        for (name, code) in pairs {
            assert_eq!(one_letter_code(name), Some(code), "{name}");
        }
    }

    #[test]
    fn one_letter_code_is_case_insensitive_and_trims_whitespace() {
        assert_eq!(one_letter_code("gly"), Some('G'));
        assert_eq!(one_letter_code(" Met "), Some('M'));
    }

    #[test]
    fn one_letter_code_returns_none_for_nonstandard_names() {
        assert_eq!(one_letter_code("HOH"), None);
        assert_eq!(one_letter_code("MSE"), None);
        assert_eq!(one_letter_code(""), None);
        assert_eq!(one_letter_code("ALAA"), None);
    }

    #[test]
    fn is_standard_symbol_rejects_unknown_sentinel() {
        assert!(is_standard_symbol('W'));
        assert!(!is_standard_symbol(UNKNOWN_RESIDUE_SYMBOL));
        assert!(!is_standard_symbol('B'));
    }

    #[test]
    fn is_alpha_carbon_trims_whitespace_and_is_case_sensitive() {
        assert!(is_alpha_carbon(" CA "));
        assert!(is_alpha_carbon("CA"));
        assert!(!is_alpha_carbon("ca"));
        assert!(!is_alpha_carbon("CB"));
        assert!(!is_alpha_carbon(" C  "));
    }
}
