use super::validate::{ValidationResult, validate};
use crate::core::models::ids::StructureId;
use crate::core::models::series::PredictionMap;
use crate::core::reference::registry::ReferenceRegistry;
use crate::core::reference::source::ReferenceSource;
use crate::engine::config::ValidationThresholds;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use rayon::prelude::*;
use tracing::{info, instrument};

/// One structure's predictions awaiting validation.
#[derive(Debug, Clone)]
pub struct ValidationRequest {
    pub id: StructureId,
    pub predictions: PredictionMap,
}

impl ValidationRequest {
    pub fn new(id: StructureId, predictions: PredictionMap) -> Self {
        Self { id, predictions }
    }
}

/// Validates every request independently and in parallel.
///
/// Results come back in request order. A failing request does not stop the
/// others; its error takes its slot.
#[instrument(skip_all, name = "batch_validation_workflow", fields(requests = requests.len()))]
pub fn validate_batch(
    requests: &[ValidationRequest],
    registry: &ReferenceRegistry,
    source: &dyn ReferenceSource,
    thresholds: &ValidationThresholds,
    reporter: &ProgressReporter,
) -> Vec<(StructureId, Result<ValidationResult, EngineError>)> {
    reporter.report(Progress::BatchStart {
        total: requests.len() as u64,
    });

    let results: Vec<_> = requests
        .par_iter()
        .map(|request| {
            let outcome = validate(
                &request.id,
                &request.predictions,
                registry,
                source,
                thresholds,
            );
            match &outcome {
                Ok(result) => reporter.report(Progress::Validated {
                    id: request.id.clone(),
                    is_valid: result.is_valid,
                }),
                Err(e) => reporter.report(Progress::Failed {
                    id: request.id.clone(),
                    reason: e.to_string(),
                }),
            }
            (request.id.clone(), outcome)
        })
        .collect();

    reporter.report(Progress::BatchFinish);

    let passed = results
        .iter()
        .filter(|(_, r)| matches!(r, Ok(v) if v.is_valid))
        .count();
    info!(
        "Batch finished: {} of {} structures passed validation.",
        passed,
        results.len()
    );
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::reference::registry::builtin_registry;
    use crate::core::reference::source::InMemoryReferenceSource;
    use crate::core::models::series::ReferenceSeries;
    use std::sync::Mutex;

    fn id(s: &str) -> StructureId {
        StructureId::new(s).unwrap()
    }

    fn source() -> InMemoryReferenceSource {
        InMemoryReferenceSource::new()
            .with(id("1XQ8"), ReferenceSeries::new(vec![0.9, 0.1, 0.9, 0.1]))
            .with(id("5J7Y"), ReferenceSeries::new(vec![0.9, 0.1]))
    }

    #[test]
    fn batch_keeps_request_order_and_isolates_failures() {
        let requests = vec![
            ValidationRequest::new(id("1XQ8"), PredictionMap::from_scores([0.9, 0.1, 0.9, 0.1])),
            ValidationRequest::new(id("9ZZZ"), PredictionMap::from_scores([0.5])),
            ValidationRequest::new(id("5J7Y"), PredictionMap::from_scores([0.1, 0.9])),
        ];
        let results = validate_batch(
            &requests,
            builtin_registry(),
            &source(),
            &ValidationThresholds::default(),
            &ProgressReporter::new(),
        );

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].0, id("1XQ8"));
        assert!(results[0].1.as_ref().unwrap().is_valid);
        assert!(matches!(
            results[1].1,
            Err(EngineError::ReferenceNotFound { .. })
        ));
        assert!(!results[2].1.as_ref().unwrap().is_valid);
    }

    #[test]
    fn batch_reports_one_event_per_request() {
        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            events.lock().unwrap().push(event);
        }));
        let requests = vec![
            ValidationRequest::new(id("1XQ8"), PredictionMap::from_scores([0.9, 0.1, 0.9, 0.1])),
            ValidationRequest::new(id("2K4X"), PredictionMap::new()),
        ];
        validate_batch(
            &requests,
            builtin_registry(),
            &source(),
            &ValidationThresholds::default(),
            &reporter,
        );
        drop(reporter);

        let events = events.into_inner().unwrap();
        assert_eq!(events.len(), 4);
        assert!(matches!(events[0], Progress::BatchStart { total: 2 }));
        assert!(matches!(events[3], Progress::BatchFinish));
        let validated = events
            .iter()
            .filter(|e| matches!(e, Progress::Validated { is_valid: true, .. }))
            .count();
        let failed = events
            .iter()
            .filter(|e| matches!(e, Progress::Failed { .. }))
            .count();
        assert_eq!(validated, 1);
        assert_eq!(failed, 1);
    }

    #[test]
    fn empty_batch_yields_no_results() {
        let results = validate_batch(
            &[],
            builtin_registry(),
            &source(),
            &ValidationThresholds::default(),
            &ProgressReporter::new(),
        );
        assert!(results.is_empty());
    }
}
