use serde::Serialize;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StatsError {
    #[error("Cannot compute statistics on empty series")]
    Empty,
    #[error("Series lengths differ ({left} vs {right})")]
    LengthMismatch { left: usize, right: usize },
}

fn check_lengths(x: &[f64], y: &[f64]) -> Result<usize, StatsError> {
    if x.len() != y.len() {
        return Err(StatsError::LengthMismatch {
            left: x.len(),
            right: y.len(),
        });
    }
    if x.is_empty() {
        return Err(StatsError::Empty);
    }
    Ok(x.len())
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// A variance sum this small relative to the squared magnitude of the data is
/// rounding noise of a constant series.
fn is_degenerate(variance_sum: f64, values: &[f64]) -> bool {
    let magnitude: f64 = values.iter().map(|v| v * v).sum();
    variance_sum <= f64::EPSILON * magnitude
}

/// Pearson correlation coefficient of two series.
///
/// Never fails and never returns NaN: empty input, unequal lengths, a
/// constant series, or non-finite values all yield `0.0`.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    if check_lengths(x, y).is_err() {
        return 0.0;
    }

    let mean_x = mean(x);
    let mean_y = mean(y);

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if is_degenerate(var_x, x) || is_degenerate(var_y, y) {
        return 0.0;
    }

    let r = cov / (var_x * var_y).sqrt();
    if r.is_finite() { r.clamp(-1.0, 1.0) } else { 0.0 }
}

/// Root-mean-square error between two equal-length series.
pub fn rmse(x: &[f64], y: &[f64]) -> Result<f64, StatsError> {
    let n = check_lengths(x, y)?;
    let sum_sq: f64 = x.iter().zip(y).map(|(a, b)| (a - b) * (a - b)).sum();
    Ok((sum_sq / n as f64).sqrt())
}

/// Agreement statistics of two aligned series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub pearson_r: f64,
    pub rmse: f64,
}

/// Computes both metrics, rejecting empty or mismatched input up front.
pub fn compute_metrics(x: &[f64], y: &[f64]) -> Result<Metrics, StatsError> {
    check_lengths(x, y)?;
    Ok(Metrics {
        pearson_r: pearson(x, y),
        rmse: rmse(x, y)?,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CorrelationStrength {
    Strong,
    Moderate,
    Weak,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorLevel {
    Low,
    Moderate,
    High,
}

impl fmt::Display for CorrelationStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CorrelationStrength::Strong => "strong",
            CorrelationStrength::Moderate => "moderate",
            CorrelationStrength::Weak => "weak",
        })
    }
}

impl fmt::Display for ErrorLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorLevel::Low => "low",
            ErrorLevel::Moderate => "moderate",
            ErrorLevel::High => "high",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pearson_of_series_with_itself_is_one() {
        let x = [0.1, 0.5, 0.3, 0.9, 0.7];
        assert!((pearson(&x, &x) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn pearson_of_series_with_its_negation_is_minus_one() {
        let x = [0.1, 0.5, 0.3, 0.9];
        let neg: Vec<f64> = x.iter().map(|v| -v).collect();
        assert!((pearson(&x, &neg) + 1.0).abs() < 1e-9);
    }

    #[test]
    fn pearson_matches_hand_computed_value() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [2.0, 1.0, 4.0, 3.0];
        // cov = 3, var_x = var_y = 5
        assert!((pearson(&x, &y) - 0.6).abs() < 1e-12);
    }

    #[test]
    fn pearson_returns_zero_for_constant_series() {
        let x = [0.5, 0.5, 0.5];
        let y = [0.1, 0.2, 0.3];
        assert_eq!(pearson(&x, &y), 0.0);
        assert_eq!(pearson(&y, &x), 0.0);
        assert_eq!(pearson(&[0.1, 0.1, 0.1], &[0.1, 0.1, 0.1]), 0.0);
    }

    #[test]
    fn pearson_is_independent_of_data_scale() {
        let x = [0.0, 1e-7, 2e-7];
        let neg: Vec<f64> = x.iter().map(|v| -v).collect();
        assert!((pearson(&x, &x) - 1.0).abs() < 1e-9);
        assert!((pearson(&x, &neg) + 1.0).abs() < 1e-9);

        let y = [0.5, 0.5000005, 0.500001];
        assert!((pearson(&y, &y) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn pearson_returns_zero_for_all_zero_series() {
        assert_eq!(pearson(&[0.0, 0.0], &[0.3, 0.7]), 0.0);
    }

    #[test]
    fn pearson_returns_zero_for_empty_or_mismatched_input() {
        assert_eq!(pearson(&[], &[]), 0.0);
        assert_eq!(pearson(&[0.1, 0.2], &[0.1]), 0.0);
    }

    #[test]
    fn pearson_returns_zero_instead_of_nan_for_non_finite_input() {
        let r = pearson(&[0.1, f64::NAN, 0.3], &[0.2, 0.4, 0.6]);
        assert_eq!(r, 0.0);
    }

    #[test]
    fn pearson_of_single_point_is_zero() {
        assert_eq!(pearson(&[0.4], &[0.9]), 0.0);
    }

    #[test]
    fn rmse_of_series_with_itself_is_zero() {
        let x = [0.2, 0.4, 0.6];
        assert_eq!(rmse(&x, &x), Ok(0.0));
    }

    #[test]
    fn rmse_matches_hand_computed_value() {
        let value = rmse(&[0.0, 0.0], &[0.3, 0.4]).unwrap();
        // sqrt((0.09 + 0.16) / 2)
        assert!((value - 0.125f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn rmse_reports_mismatched_lengths() {
        assert_eq!(
            rmse(&[0.1, 0.2, 0.3], &[0.1]),
            Err(StatsError::LengthMismatch { left: 3, right: 1 })
        );
    }

    #[test]
    fn rmse_reports_empty_input() {
        assert_eq!(rmse(&[], &[]), Err(StatsError::Empty));
    }

    #[test]
    fn compute_metrics_rejects_mismatch_before_computing() {
        assert_eq!(
            compute_metrics(&[0.1], &[0.1, 0.2]),
            Err(StatsError::LengthMismatch { left: 1, right: 2 })
        );
    }

    #[test]
    fn compute_metrics_combines_both_statistics() {
        let m = compute_metrics(&[0.9, 0.1, 0.9, 0.1], &[0.9, 0.1, 0.9, 0.1]).unwrap();
        assert!((m.pearson_r - 1.0).abs() < 1e-9);
        assert!(m.rmse.abs() < 1e-12);
    }
}
