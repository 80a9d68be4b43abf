use crate::core::io::pdb::parse_sequence;
use crate::core::models::ids::StructureId;
use crate::core::models::sequence::Sequence;
use crate::core::models::series::{PredictionMap, ReferenceSeries};
use crate::core::reference::registry::ReferenceRegistry;
use crate::core::reference::source::ReferenceSource;
use crate::engine::align::align_keyed;
use crate::engine::config::ValidationThresholds;
use crate::engine::error::EngineError;
use crate::engine::predictor::Predictor;
use crate::engine::stats::compute_metrics;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// Outcome of one strict validation. Built fresh per call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub pearson_r: f64,
    pub rmse: f64,
    pub is_valid: bool,
    pub aligned_reference: ReferenceSeries,
    pub aligned_prediction: Vec<f64>,
}

/// Scores a prediction map against a reference series.
///
/// The reference length is authoritative: prediction positions missing from
/// the map count as 0.0 and positions past the reference are ignored.
///
/// # Errors
///
/// Returns [`EngineError::Statistics`] when the reference series is empty.
pub fn validate_series(
    reference: &ReferenceSeries,
    predictions: &PredictionMap,
    thresholds: &ValidationThresholds,
) -> Result<ValidationResult, EngineError> {
    let aligned = align_keyed(reference, predictions);
    let covered = (1..=reference.len())
        .filter(|&p| predictions.get(p).is_some())
        .count();
    if covered < reference.len() {
        debug!(
            "Prediction covers {} of {} reference positions; the rest are filled with 0.0.",
            covered,
            reference.len()
        );
    }

    let metrics = compute_metrics(&aligned.reference, &aligned.prediction)?;
    Ok(ValidationResult {
        pearson_r: metrics.pearson_r,
        rmse: metrics.rmse,
        is_valid: thresholds.is_valid(&metrics),
        aligned_reference: ReferenceSeries::new(aligned.reference),
        aligned_prediction: aligned.prediction,
    })
}

/// Looks up the published reference for `id` and validates `predictions` against it.
///
/// # Errors
///
/// Returns [`EngineError::ReferenceNotFound`] when the registry does not list
/// `id` or the source holds no series for it, and propagates load and
/// statistics errors.
#[instrument(skip_all, name = "validation_workflow", fields(id = %id))]
pub fn validate(
    id: &StructureId,
    predictions: &PredictionMap,
    registry: &ReferenceRegistry,
    source: &dyn ReferenceSource,
    thresholds: &ValidationThresholds,
) -> Result<ValidationResult, EngineError> {
    let Some(entry) = registry.lookup(id) else {
        warn!("Structure {} is not in the reference registry.", id);
        return Err(EngineError::ReferenceNotFound { id: id.clone() });
    };
    let reference = source
        .series(id, entry.series_metric)?
        .ok_or_else(|| EngineError::ReferenceNotFound { id: id.clone() })?;
    info!(
        "Validating against {} ({}, {} residues).",
        entry.protein,
        entry.publication,
        reference.len()
    );

    let result = validate_series(&reference, predictions, thresholds)?;
    info!(
        "Pearson r = {:.4}, RMSE = {:.4}, valid = {}",
        result.pearson_r, result.rmse, result.is_valid
    );
    Ok(result)
}

/// Runs `predictor` on a sequence and validates its output.
pub fn validate_sequence(
    id: &StructureId,
    sequence: &Sequence,
    predictor: &dyn Predictor,
    registry: &ReferenceRegistry,
    source: &dyn ReferenceSource,
    thresholds: &ValidationThresholds,
) -> Result<ValidationResult, EngineError> {
    let predictions = predictor.predict(sequence)?;
    validate(id, &predictions, registry, source, thresholds)
}

/// The whole pipeline from raw PDB text to a verdict.
pub fn validate_structure(
    id: &StructureId,
    pdb_text: &str,
    predictor: &dyn Predictor,
    registry: &ReferenceRegistry,
    source: &dyn ReferenceSource,
    thresholds: &ValidationThresholds,
) -> Result<ValidationResult, EngineError> {
    let sequence = parse_sequence(pdb_text);
    if sequence.is_empty() {
        warn!("No residues could be read from the structure of {}.", id);
    }
    validate_sequence(id, &sequence, predictor, registry, source, thresholds)
}
