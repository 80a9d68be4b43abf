use crate::error::{CliError, Result};
use ewcl::engine::config::{ThresholdConfig, ThresholdConfigBuilder};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct PartialValidationConfig {
    min_pearson: Option<f64>,
    max_rmse: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct PartialQualitativeConfig {
    strong_pearson: Option<f64>,
    moderate_pearson: Option<f64>,
    low_rmse: Option<f64>,
    moderate_rmse: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct PartialRiskConfig {
    low: Option<f64>,
    medium: Option<f64>,
}

/// Threshold overrides read from a TOML file; every key is optional.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialThresholdConfig {
    validation: Option<PartialValidationConfig>,
    qualitative: Option<PartialQualitativeConfig>,
    risk: Option<PartialRiskConfig>,
}

impl PartialThresholdConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading threshold configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Loads the file when one is given, otherwise starts from no overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Applies `--set` overrides on top of the file values and fills the rest
    /// from the library defaults.
    pub fn merge_with_cli(mut self, set_values: &[String]) -> Result<ThresholdConfig> {
        self.apply_set_values(set_values)?;

        let mut builder = ThresholdConfigBuilder::new();
        if let Some(v) = self.validation {
            if let Some(x) = v.min_pearson {
                builder = builder.min_pearson(x);
            }
            if let Some(x) = v.max_rmse {
                builder = builder.max_rmse(x);
            }
        }
        if let Some(q) = self.qualitative {
            if let Some(x) = q.strong_pearson {
                builder = builder.strong_pearson(x);
            }
            if let Some(x) = q.moderate_pearson {
                builder = builder.moderate_pearson(x);
            }
            if let Some(x) = q.low_rmse {
                builder = builder.low_rmse(x);
            }
            if let Some(x) = q.moderate_rmse {
                builder = builder.moderate_rmse(x);
            }
        }
        if let Some(r) = self.risk {
            if let Some(x) = r.low {
                builder = builder.risk_low(x);
            }
            if let Some(x) = r.medium {
                builder = builder.risk_medium(x);
            }
        }

        let config = builder.build()?;
        debug!("Final threshold configuration: {:?}", config);
        Ok(config)
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value_str)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };
            let key = key.trim();
            let value: f64 = value_str.trim().parse().map_err(|_| {
                CliError::Config(format!("Invalid float value for {}: {}", key, value_str))
            })?;

            let slot = match key {
                "validation.min-pearson" => {
                    &mut self
                        .validation
                        .get_or_insert_with(Default::default)
                        .min_pearson
                }
                "validation.max-rmse" => {
                    &mut self.validation.get_or_insert_with(Default::default).max_rmse
                }
                "qualitative.strong-pearson" => {
                    &mut self
                        .qualitative
                        .get_or_insert_with(Default::default)
                        .strong_pearson
                }
                "qualitative.moderate-pearson" => {
                    &mut self
                        .qualitative
                        .get_or_insert_with(Default::default)
                        .moderate_pearson
                }
                "qualitative.low-rmse" => {
                    &mut self.qualitative.get_or_insert_with(Default::default).low_rmse
                }
                "qualitative.moderate-rmse" => {
                    &mut self
                        .qualitative
                        .get_or_insert_with(Default::default)
                        .moderate_rmse
                }
                "risk.low" => &mut self.risk.get_or_insert_with(Default::default).low,
                "risk.medium" => &mut self.risk.get_or_insert_with(Default::default).medium,
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            };
            *slot = Some(value);
        }
        Ok(())
    }
}
