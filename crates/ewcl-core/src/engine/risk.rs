use super::config::RiskThresholds;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        })
    }
}

impl RiskThresholds {
    /// Each band includes its upper cut-point. Scores outside [0, 1] are
    /// classified by the same rule; NaN falls through to `High`.
    pub fn classify(&self, score: f64) -> RiskLevel {
        if score <= self.low {
            RiskLevel::Low
        } else if score <= self.medium {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }
}

/// Classifies a score with the default cut-points (0.33, 0.66).
pub fn classify(score: f64) -> RiskLevel {
    RiskThresholds::default().classify(score)
}
