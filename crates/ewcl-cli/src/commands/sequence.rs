use crate::cli::SequenceArgs;
use crate::error::{CliError, Result};
use ewcl::core::io::pdb::{PdbFile, parse_ca_residues};
use ewcl::core::io::traits::StructureFile;
use ewcl::core::models::residue::ResidueRecord;
use std::fmt::Write;
use tracing::info;

pub fn run(args: SequenceArgs) -> Result<()> {
    if args.residues {
        let text = std::fs::read_to_string(&args.input)?;
        let records = parse_ca_residues(&text);
        info!("Found {} alpha-carbon residues.", records.len());
        print!("{}", format_residues(&records));
    } else {
        let sequence =
            PdbFile::read_from_path(&args.input).map_err(|e| CliError::FileParsing {
                path: args.input.clone(),
                source: e.into(),
            })?;
        info!(
            "Parsed {} residues ({} unknown).",
            sequence.len(),
            sequence.unknown_count()
        );
        println!("{}", sequence);
    }
    Ok(())
}

fn format_residues(records: &[ResidueRecord]) -> String {
    let mut out = String::new();
    for record in records {
        let _ = writeln!(
            out,
            "{}\t{}\t{}\t{}",
            record.chain_id, record.residue_number, record.name, record.code
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ewcl::core::models::residue::ResidueCode;

    #[test]
    fn residues_are_printed_one_per_line() {
        let records = vec![
            ResidueRecord {
                chain_id: 'A',
                residue_number: 1,
                name: "MET".to_string(),
                code: ResidueCode::from_three_letter("MET"),
            },
            ResidueRecord {
                chain_id: 'B',
                residue_number: -2,
                name: "HOH".to_string(),
                code: ResidueCode::from_three_letter("HOH"),
            },
        ];
        assert_eq!(format_residues(&records), "A\t1\tMET\tM\nB\t-2\tHOH\tX\n");
    }
}
