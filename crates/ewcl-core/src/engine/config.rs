use super::stats::{CorrelationStrength, ErrorLevel, Metrics};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Threshold '{name}' must be a finite number (got {value})")]
    NonFinite { name: &'static str, value: f64 },
    #[error("Threshold '{lower}' ({lower_value}) must not exceed '{upper}' ({upper_value})")]
    Unordered {
        lower: &'static str,
        lower_value: f64,
        upper: &'static str,
        upper_value: f64,
    },
}

/// Cut-offs of the strict pass/fail verdict. Both comparisons are strict.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValidationThresholds {
    pub min_pearson: f64,
    pub max_rmse: f64,
}

impl Default for ValidationThresholds {
    fn default() -> Self {
        Self {
            min_pearson: 0.8,
            max_rmse: 0.1,
        }
    }
}

impl ValidationThresholds {
    pub fn is_valid(&self, metrics: &Metrics) -> bool {
        metrics.pearson_r > self.min_pearson && metrics.rmse < self.max_rmse
    }
}

/// Bands of the qualitative comparison labels. Bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QualitativeThresholds {
    pub strong_pearson: f64,
    pub moderate_pearson: f64,
    pub low_rmse: f64,
    pub moderate_rmse: f64,
}

impl Default for QualitativeThresholds {
    fn default() -> Self {
        Self {
            strong_pearson: 0.7,
            moderate_pearson: 0.5,
            low_rmse: 0.1,
            moderate_rmse: 0.2,
        }
    }
}

impl QualitativeThresholds {
    pub fn correlation_strength(&self, pearson_r: f64) -> CorrelationStrength {
        if pearson_r >= self.strong_pearson {
            CorrelationStrength::Strong
        } else if pearson_r >= self.moderate_pearson {
            CorrelationStrength::Moderate
        } else {
            CorrelationStrength::Weak
        }
    }

    pub fn error_level(&self, rmse: f64) -> ErrorLevel {
        if rmse <= self.low_rmse {
            ErrorLevel::Low
        } else if rmse <= self.moderate_rmse {
            ErrorLevel::Moderate
        } else {
            ErrorLevel::High
        }
    }
}

/// Upper cut-points of the Low and Medium risk bands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskThresholds {
    pub low: f64,
    pub medium: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            low: 0.33,
            medium: 0.66,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ThresholdConfig {
    pub validation: ValidationThresholds,
    pub qualitative: QualitativeThresholds,
    pub risk: RiskThresholds,
}

/// Overrides individual thresholds on top of the defaults.
#[derive(Default)]
pub struct ThresholdConfigBuilder {
    min_pearson: Option<f64>,
    max_rmse: Option<f64>,
    strong_pearson: Option<f64>,
    moderate_pearson: Option<f64>,
    low_rmse: Option<f64>,
    moderate_rmse: Option<f64>,
    risk_low: Option<f64>,
    risk_medium: Option<f64>,
}

impl ThresholdConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_pearson(mut self, value: f64) -> Self {
        self.min_pearson = Some(value);
        self
    }
    pub fn max_rmse(mut self, value: f64) -> Self {
        self.max_rmse = Some(value);
        self
    }
    pub fn strong_pearson(mut self, value: f64) -> Self {
        self.strong_pearson = Some(value);
        self
    }
    pub fn moderate_pearson(mut self, value: f64) -> Self {
        self.moderate_pearson = Some(value);
        self
    }
    pub fn low_rmse(mut self, value: f64) -> Self {
        self.low_rmse = Some(value);
        self
    }
    pub fn moderate_rmse(mut self, value: f64) -> Self {
        self.moderate_rmse = Some(value);
        self
    }
    pub fn risk_low(mut self, value: f64) -> Self {
        self.risk_low = Some(value);
        self
    }
    pub fn risk_medium(mut self, value: f64) -> Self {
        self.risk_medium = Some(value);
        self
    }

    pub fn build(self) -> Result<ThresholdConfig, ConfigError> {
        let defaults = ThresholdConfig::default();
        let config = ThresholdConfig {
            validation: ValidationThresholds {
                min_pearson: self.min_pearson.unwrap_or(defaults.validation.min_pearson),
                max_rmse: self.max_rmse.unwrap_or(defaults.validation.max_rmse),
            },
            qualitative: QualitativeThresholds {
                strong_pearson: self
                    .strong_pearson
                    .unwrap_or(defaults.qualitative.strong_pearson),
                moderate_pearson: self
                    .moderate_pearson
                    .unwrap_or(defaults.qualitative.moderate_pearson),
                low_rmse: self.low_rmse.unwrap_or(defaults.qualitative.low_rmse),
                moderate_rmse: self
                    .moderate_rmse
                    .unwrap_or(defaults.qualitative.moderate_rmse),
            },
            risk: RiskThresholds {
                low: self.risk_low.unwrap_or(defaults.risk.low),
                medium: self.risk_medium.unwrap_or(defaults.risk.medium),
            },
        };
        config.check()?;
        Ok(config)
    }
}

impl ThresholdConfig {
    fn check(&self) -> Result<(), ConfigError> {
        let named = [
            ("validation.min-pearson", self.validation.min_pearson),
            ("validation.max-rmse", self.validation.max_rmse),
            ("qualitative.strong-pearson", self.qualitative.strong_pearson),
            ("qualitative.moderate-pearson", self.qualitative.moderate_pearson),
            ("qualitative.low-rmse", self.qualitative.low_rmse),
            ("qualitative.moderate-rmse", self.qualitative.moderate_rmse),
            ("risk.low", self.risk.low),
            ("risk.medium", self.risk.medium),
        ];
        for (name, value) in named {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { name, value });
            }
        }

        let ordered = [
            (
                ("qualitative.moderate-pearson", self.qualitative.moderate_pearson),
                ("qualitative.strong-pearson", self.qualitative.strong_pearson),
            ),
            (
                ("qualitative.low-rmse", self.qualitative.low_rmse),
                ("qualitative.moderate-rmse", self.qualitative.moderate_rmse),
            ),
            (("risk.low", self.risk.low), ("risk.medium", self.risk.medium)),
        ];
        for ((lower, lower_value), (upper, upper_value)) in ordered {
            if lower_value > upper_value {
                return Err(ConfigError::Unordered {
                    lower,
                    lower_value,
                    upper,
                    upper_value,
                });
            }
        }
        Ok(())
    }
}
