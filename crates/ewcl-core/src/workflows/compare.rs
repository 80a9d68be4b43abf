use crate::engine::align::truncate_to_shortest;
use crate::engine::config::QualitativeThresholds;
use crate::engine::error::EngineError;
use crate::engine::stats::{CorrelationStrength, ErrorLevel, compute_metrics};
use serde::Serialize;
use tracing::{debug, instrument};

/// Qualitative agreement between two plain score series.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonReport {
    pub pearson_r: f64,
    pub rmse: f64,
    /// Number of positions compared after truncation.
    pub length: usize,
    pub correlation: CorrelationStrength,
    pub error: ErrorLevel,
    pub aligned_reference: Vec<f64>,
    pub aligned_prediction: Vec<f64>,
}

/// Compares two series without a positional mapping.
///
/// Both series are cut to the shorter length from the start before the
/// statistics are taken.
///
/// # Errors
///
/// Returns [`EngineError::Statistics`] when either series is empty.
#[instrument(skip_all, name = "comparison_workflow")]
pub fn compare(
    reference: &[f64],
    prediction: &[f64],
    thresholds: &QualitativeThresholds,
) -> Result<ComparisonReport, EngineError> {
    if reference.len() != prediction.len() {
        debug!(
            "Truncating series of lengths {} and {} to the shorter one.",
            reference.len(),
            prediction.len()
        );
    }
    let aligned = truncate_to_shortest(reference, prediction);
    let metrics = compute_metrics(&aligned.reference, &aligned.prediction)?;

    Ok(ComparisonReport {
        pearson_r: metrics.pearson_r,
        rmse: metrics.rmse,
        length: aligned.len(),
        correlation: thresholds.correlation_strength(metrics.pearson_r),
        error: thresholds.error_level(metrics.rmse),
        aligned_reference: aligned.reference,
        aligned_prediction: aligned.prediction,
    })
}
