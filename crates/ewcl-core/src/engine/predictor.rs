use super::error::EngineError;
use crate::core::models::sequence::Sequence;
use crate::core::models::series::PredictionMap;

/// Produces a per-residue disorder score in [0, 1] for a sequence.
///
/// Keys of the returned map are 1-based residue positions. Closures with the
/// matching signature implement this trait, which keeps synthetic predictors
/// in tests to a single line.
pub trait Predictor: Send + Sync {
    fn predict(&self, sequence: &Sequence) -> Result<PredictionMap, EngineError>;
}

impl<F> Predictor for F
where
    F: Fn(&Sequence) -> Result<PredictionMap, EngineError> + Send + Sync,
{
    fn predict(&self, sequence: &Sequence) -> Result<PredictionMap, EngineError> {
        self(sequence)
    }
}

/// Deterministic placeholder scorer cycling through ten levels from 0.1 to 0.82.
///
/// Residue `i` (0-based) scores `0.1 + 0.8 * (i % 10) / 10`, rounded to four
/// decimals. It carries no biological meaning.
#[derive(Debug, Clone, Copy, Default)]
pub struct PeriodicPredictor;

impl Predictor for PeriodicPredictor {
    fn predict(&self, sequence: &Sequence) -> Result<PredictionMap, EngineError> {
        let scores = (0..sequence.len()).map(|i| 0.1 + 0.8 * (i % 10) as f64 / 10.0);
        Ok(PredictionMap::from_scores(scores).rounded(4))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn periodic_predictor_scores_every_position() {
        let sequence: Sequence = "MDVFMKGLSKAK".parse().unwrap();
        let map = PeriodicPredictor.predict(&sequence).unwrap();
        assert_eq!(map.len(), 12);
        assert!((map.get(1).unwrap() - 0.1).abs() < 1e-12);
        assert!((map.get(2).unwrap() - 0.18).abs() < 1e-12);
        assert!((map.get(10).unwrap() - 0.82).abs() < 1e-12);
        assert!((map.get(11).unwrap() - 0.1).abs() < 1e-12);
    }

    #[test]
    fn periodic_predictor_returns_empty_map_for_empty_sequence() {
        let map = PeriodicPredictor.predict(&Sequence::new()).unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn closures_act_as_predictors() {
        let constant = |seq: &Sequence| -> Result<PredictionMap, EngineError> {
            Ok(PredictionMap::from_scores(seq.iter().map(|_| 0.5)))
        };
        let sequence: Sequence = "AC".parse().unwrap();
        let map = constant.predict(&sequence).unwrap();
        assert_eq!(map.get(2), Some(0.5));
    }

    #[test]
    fn predictor_errors_propagate() {
        let failing = |_: &Sequence| -> Result<PredictionMap, EngineError> {
            Err(EngineError::Prediction("offline".into()))
        };
        let err = failing.predict(&Sequence::new()).unwrap_err();
        assert!(matches!(err, EngineError::Prediction(msg) if msg == "offline"));
    }
}
