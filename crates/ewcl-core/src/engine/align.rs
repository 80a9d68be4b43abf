use crate::core::models::series::{PredictionMap, ReferenceSeries};
use serde::Serialize;

/// Score used for reference positions the prediction does not cover.
pub const MISSING_PREDICTION_FILL: f64 = 0.0;

/// How a prediction is paired with a reference series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlignmentMode {
    /// Position `i` of the reference takes prediction key `i`; gaps are filled
    /// with [`MISSING_PREDICTION_FILL`] and the reference length is kept.
    #[default]
    Keyed,
    /// Both series are cut to the shorter length, keeping the leading values.
    /// Prediction values are taken in ascending position order.
    Truncate,
}

/// Two equal-length series ready for comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlignedSeries {
    pub reference: Vec<f64>,
    pub prediction: Vec<f64>,
}

impl AlignedSeries {
    pub fn len(&self) -> usize {
        self.reference.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reference.is_empty()
    }
}

pub fn align(
    reference: &ReferenceSeries,
    predictions: &PredictionMap,
    mode: AlignmentMode,
) -> AlignedSeries {
    match mode {
        AlignmentMode::Keyed => align_keyed(reference, predictions),
        AlignmentMode::Truncate => {
            let ordered: Vec<f64> = predictions.values().collect();
            truncate_to_shortest(reference.values(), &ordered)
        }
    }
}

pub fn align_keyed(reference: &ReferenceSeries, predictions: &PredictionMap) -> AlignedSeries {
    let prediction = (1..=reference.len())
        .map(|position| {
            predictions
                .get(position)
                .unwrap_or(MISSING_PREDICTION_FILL)
        })
        .collect();
    AlignedSeries {
        reference: reference.values().to_vec(),
        prediction,
    }
}

pub fn truncate_to_shortest(reference: &[f64], prediction: &[f64]) -> AlignedSeries {
    let n = reference.len().min(prediction.len());
    AlignedSeries {
        reference: reference[..n].to_vec(),
        prediction: prediction[..n].to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyed_alignment_with_empty_predictions_is_all_fill() {
        let reference = ReferenceSeries::new(vec![0.2, 0.4, 0.6]);
        let aligned = align_keyed(&reference, &PredictionMap::new());
        assert_eq!(aligned.reference, vec![0.2, 0.4, 0.6]);
        assert_eq!(aligned.prediction, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn keyed_alignment_fills_gaps_and_drops_extra_positions() {
        let reference = ReferenceSeries::new(vec![0.1, 0.2, 0.3]);
        let predictions: PredictionMap = [(1, 0.5), (3, 0.7), (4, 0.9)].into_iter().collect();
        let aligned = align_keyed(&reference, &predictions);
        assert_eq!(aligned.prediction, vec![0.5, 0.0, 0.7]);
        assert_eq!(aligned.len(), reference.len());
    }

    #[test]
    fn keyed_alignment_ignores_position_zero() {
        let reference = ReferenceSeries::new(vec![0.1]);
        let predictions: PredictionMap = [(0, 0.8)].into_iter().collect();
        assert_eq!(align_keyed(&reference, &predictions).prediction, vec![0.0]);
    }

    #[test]
    fn truncation_keeps_leading_values_of_both_series() {
        let aligned = truncate_to_shortest(&[0.1, 0.2, 0.3, 0.4], &[0.9, 0.8]);
        assert_eq!(aligned.reference, vec![0.1, 0.2]);
        assert_eq!(aligned.prediction, vec![0.9, 0.8]);

        let aligned = truncate_to_shortest(&[0.1], &[0.9, 0.8, 0.7]);
        assert_eq!(aligned.reference, vec![0.1]);
        assert_eq!(aligned.prediction, vec![0.9]);
    }

    #[test]
    fn truncate_mode_orders_predictions_by_position() {
        let reference = ReferenceSeries::new(vec![0.1, 0.2, 0.3]);
        let predictions: PredictionMap = [(10, 0.6), (2, 0.4)].into_iter().collect();
        let aligned = align(&reference, &predictions, AlignmentMode::Truncate);
        assert_eq!(aligned.reference, vec![0.1, 0.2]);
        assert_eq!(aligned.prediction, vec![0.4, 0.6]);
    }

    #[test]
    fn default_mode_is_keyed() {
        let reference = ReferenceSeries::new(vec![0.1, 0.2]);
        let predictions = PredictionMap::from_scores([0.3]);
        let aligned = align(&reference, &predictions, AlignmentMode::default());
        assert_eq!(aligned.prediction, vec![0.3, 0.0]);
    }
}
