use super::load_registry;
use super::validate::reference_source;
use crate::cli::BatchArgs;
use crate::error::{CliError, Result};
use crate::utils::input::{read_predictions, structure_id_from_path};
use crate::utils::progress::CliProgressHandler;
use ewcl::core::models::ids::StructureId;
use ewcl::engine::config::ThresholdConfig;
use ewcl::engine::error::EngineError;
use ewcl::engine::progress::ProgressReporter;
use ewcl::workflows::batch::{ValidationRequest, validate_batch};
use ewcl::workflows::validate::ValidationResult;
use std::fmt::Write;
use tracing::warn;

pub fn run(args: BatchArgs, config: &ThresholdConfig) -> Result<()> {
    let registry = load_registry(args.reference.catalogue.as_deref())?;
    let source = reference_source(&args.reference);

    let requests = args
        .predictions
        .iter()
        .map(|path| -> Result<ValidationRequest> {
            Ok(ValidationRequest::new(
                structure_id_from_path(path)?,
                read_predictions(path)?,
            ))
        })
        .collect::<Result<Vec<_>>>()?;

    let handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(handler.get_callback());
    let outcomes = validate_batch(
        &requests,
        &registry,
        source.as_ref(),
        &config.validation,
        &reporter,
    );

    print!("{}", format_outcomes(&outcomes));

    let failed = outcomes.iter().filter(|(_, r)| r.is_err()).count();
    if failed > 0 {
        warn!("{} of {} validations could not be completed.", failed, outcomes.len());
        return Err(CliError::Argument(format!(
            "{} of {} structures could not be validated",
            failed,
            outcomes.len()
        )));
    }
    Ok(())
}

type Outcome = (StructureId, std::result::Result<ValidationResult, EngineError>);

fn format_outcomes(outcomes: &[Outcome]) -> String {
    let mut out = String::new();
    for (id, outcome) in outcomes {
        let _ = match outcome {
            Ok(result) => writeln!(
                out,
                "{:<6} r={:>7.4} rmse={:.4} {}",
                id,
                result.pearson_r,
                result.rmse,
                if result.is_valid { "PASS" } else { "FAIL" }
            ),
            Err(e) => writeln!(out, "{:<6} error: {}", id, e),
        };
    }
    out
}
