use crate::core::io::traits::StructureFile;
use crate::core::models::residue::{ResidueCode, ResidueRecord};
use crate::core::models::sequence::Sequence;
use crate::core::utils::identifiers::is_alpha_carbon;
use std::collections::{HashMap, HashSet};
use std::io::{self, BufRead};
use thiserror::Error;
use tracing::{debug, trace};

const SEQRES_FIRST_CODE: usize = 19;
const SEQRES_CODE_STRIDE: usize = 4;
const SEQRES_CODE_WIDTH: usize = 3;

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end).unwrap_or("").trim()
}

/// Extracts the residue sequence of a PDB file.
///
/// SEQRES records are used whenever at least one is present. Otherwise the
/// sequence is rebuilt from alpha-carbon ATOM records (see [`parse_ca_residues`]). Text with
/// neither record type yields an empty sequence.
pub fn parse_sequence(pdb_text: &str) -> Sequence {
    if let Some(seqres) = parse_seqres(pdb_text) {
        debug!("Parsed {} residues from SEQRES records.", seqres.len());
        return seqres;
    }

    let sequence: Sequence = parse_ca_residues(pdb_text)
        .into_iter()
        .map(|r| r.code)
        .collect();
    debug!(
        "No SEQRES records; parsed {} residues from CA atoms.",
        sequence.len()
    );
    sequence
}

/// Returns `None` when the text holds no SEQRES record at all.
fn parse_seqres(pdb_text: &str) -> Option<Sequence> {
    let mut sequence = Sequence::new();
    let mut found = false;
    for line in pdb_text.lines().filter(|l| l.starts_with("SEQRES")) {
        found = true;
        let mut start = SEQRES_FIRST_CODE;
        while start + SEQRES_CODE_WIDTH <= line.len() {
            let token = slice_and_trim(line, start, start + SEQRES_CODE_WIDTH);
            if !token.is_empty() {
                sequence.push(ResidueCode::from_three_letter(token));
            }
            start += SEQRES_CODE_STRIDE;
        }
    }
    found.then_some(sequence)
}

/// Collects one record per alpha carbon from ATOM lines.
///
/// Residues are keyed by (chain, residue number); the first occurrence wins,
/// so alternate locations never add a second entry. Chains keep the order in
/// which they first appear and residues within a chain are sorted by number.
/// Only the first MODEL of a multi-model file is read.
pub fn parse_ca_residues(pdb_text: &str) -> Vec<ResidueRecord> {
    let mut chains: Vec<Vec<ResidueRecord>> = Vec::new();
    let mut chain_slots: HashMap<char, usize> = HashMap::new();
    let mut seen: HashSet<(char, i32)> = HashSet::new();

    for (line_num, line) in pdb_text.lines().enumerate() {
        if line.starts_with("ENDMDL") {
            break;
        }
        if !line.starts_with("ATOM") || !is_alpha_carbon(slice_and_trim(line, 12, 16)) {
            continue;
        }

        let res_num_str = slice_and_trim(line, 22, 26);
        let Ok(residue_number) = res_num_str.parse::<i32>() else {
            trace!(
                "Skipping CA atom on line {} with unreadable residue number '{}'.",
                line_num + 1,
                res_num_str
            );
            continue;
        };
        let chain_id = line
            .get(21..22)
            .and_then(|s| s.chars().next())
            .unwrap_or(' ');
        if !seen.insert((chain_id, residue_number)) {
            continue;
        }

        let name = slice_and_trim(line, 17, 20);
        let slot = *chain_slots.entry(chain_id).or_insert_with(|| {
            chains.push(Vec::new());
            chains.len() - 1
        });
        chains[slot].push(ResidueRecord {
            chain_id,
            residue_number,
            name: name.to_string(),
            code: ResidueCode::from_three_letter(name),
        });
    }

    chains
        .into_iter()
        .flat_map(|mut residues| {
            residues.sort_by_key(|r| r.residue_number);
            residues
        })
        .collect()
}

pub struct PdbFile;

impl StructureFile for PdbFile {
    type Output = Sequence;
    type Error = PdbError;

    fn read_from(reader: &mut impl BufRead) -> Result<Self::Output, Self::Error> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(parse_sequence(&text))
    }
}
