use super::to_pretty_json;
use crate::cli::PredictArgs;
use crate::error::{CliError, Result};
use ewcl::core::io::pdb::PdbFile;
use ewcl::core::io::traits::StructureFile;
use ewcl::core::models::sequence::Sequence;
use ewcl::core::models::series::PredictionMap;
use ewcl::engine::config::RiskThresholds;
use ewcl::engine::predictor::{PeriodicPredictor, Predictor};
use ewcl::workflows::summary::{ScoreSummary, summarize};
use serde::Serialize;
use tracing::{info, warn};

#[derive(Debug, Serialize)]
struct PredictionOutput {
    sequence: Sequence,
    predictions: PredictionMap,
    summary: Option<ScoreSummary>,
}

pub fn run(args: PredictArgs, risk: &RiskThresholds) -> Result<()> {
    let sequence = PdbFile::read_from_path(&args.input).map_err(|e| CliError::FileParsing {
        path: args.input.clone(),
        source: e.into(),
    })?;
    if sequence.is_empty() {
        warn!("No residues found in {:?}.", args.input);
    }

    let output = predict(sequence, &PeriodicPredictor, args.precision, risk)?;
    info!("Scored {} residues.", output.predictions.len());
    println!("{}", to_pretty_json(&output)?);
    Ok(())
}

fn predict(
    sequence: Sequence,
    predictor: &dyn Predictor,
    precision: u32,
    risk: &RiskThresholds,
) -> Result<PredictionOutput> {
    let predictions = predictor.predict(&sequence)?.rounded(precision);
    let summary = summarize(&predictions, risk);
    Ok(PredictionOutput {
        sequence,
        predictions,
        summary,
    })
}
