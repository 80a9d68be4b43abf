use super::{load_registry, to_pretty_json};
use crate::cli::{RegistryArgs, RegistryCommands};
use crate::error::{CliError, Result};
use crate::utils::input::parse_structure_id;
use ewcl::core::reference::registry::ReferenceRegistry;
use std::fmt::Write;

pub fn run(args: RegistryArgs) -> Result<()> {
    let registry = load_registry(args.catalogue.as_deref())?;
    match args.command {
        RegistryCommands::List => print!("{}", format_listing(&registry)),
        RegistryCommands::Show { id } => {
            let id = parse_structure_id(&id)?;
            let entry = registry.lookup(&id).ok_or_else(|| {
                CliError::Argument(format!("Structure '{}' is not in the registry", id))
            })?;
            println!("{}", to_pretty_json(entry)?);
        }
    }
    Ok(())
}

fn format_listing(registry: &ReferenceRegistry) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<6} {:<20} {:<22} METRIC", "ID", "PROTEIN", "PUBLICATION");
    for entry in registry.entries() {
        let _ = writeln!(
            out,
            "{:<6} {:<20} {:<22} {}",
            entry.id, entry.protein, entry.publication, entry.metric
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ewcl::core::reference::registry::builtin_registry;

    #[test]
    fn listing_has_a_header_and_one_line_per_entry() {
        let listing = format_listing(builtin_registry());
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(lines.len(), builtin_registry().len() + 1);
        assert!(lines[0].starts_with("ID"));
        assert!(lines.iter().any(|l| l.starts_with("1XQ8")));
        assert!(lines.iter().any(|l| l.starts_with("2K4X")));
        assert!(lines.iter().any(|l| l.starts_with("5J7Y")));
    }
}
