use crate::core::models::series::PredictionMap;
use crate::engine::config::RiskThresholds;
use crate::engine::risk::RiskLevel;
use serde::Serialize;

/// Number of positions falling in each risk band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RiskCounts {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

impl RiskCounts {
    fn record(&mut self, level: RiskLevel) {
        match level {
            RiskLevel::Low => self.low += 1,
            RiskLevel::Medium => self.medium += 1,
            RiskLevel::High => self.high += 1,
        }
    }
}

/// Aggregate view of a prediction map.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSummary {
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    pub risk_counts: RiskCounts,
}

/// Summarizes every score in the map. Returns `None` for an empty map.
pub fn summarize(predictions: &PredictionMap, thresholds: &RiskThresholds) -> Option<ScoreSummary> {
    if predictions.is_empty() {
        return None;
    }

    let mut sum = 0.0;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut risk_counts = RiskCounts::default();
    for score in predictions.values() {
        sum += score;
        min = min.min(score);
        max = max.max(score);
        risk_counts.record(thresholds.classify(score));
    }

    Some(ScoreSummary {
        count: predictions.len(),
        mean: sum / predictions.len() as f64,
        min,
        max,
        risk_counts,
    })
}
