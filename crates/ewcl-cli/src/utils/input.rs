use crate::error::{CliError, Result};
use ewcl::core::models::ids::StructureId;
use ewcl::core::models::series::PredictionMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

/// Reads a JSON object of position-keyed scores, e.g. `{"1": 0.42, "2": 0.57}`.
pub fn read_predictions(path: &Path) -> Result<PredictionMap> {
    debug!("Reading predictions from {:?}", path);
    let file = File::open(path)?;
    let predictions: PredictionMap =
        serde_json::from_reader(BufReader::new(file)).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
    debug!("Read {} predicted positions.", predictions.len());
    Ok(predictions)
}

pub fn parse_structure_id(raw: &str) -> Result<StructureId> {
    raw.parse::<StructureId>()
        .map_err(|e| CliError::Argument(format!("'{}': {}", raw, e)))
}

/// Takes the structure identifier from a file stem (`1xq8.json` -> `1XQ8`).
pub fn structure_id_from_path(path: &Path) -> Result<StructureId> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| {
            CliError::Argument(format!("Cannot derive a structure id from {:?}", path))
        })?;
    parse_structure_id(stem)
}
