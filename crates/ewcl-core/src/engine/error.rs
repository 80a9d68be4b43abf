use thiserror::Error;

use super::config::ConfigError;
use super::stats::StatsError;
use crate::core::io::reference::ReferenceLoadError;
use crate::core::models::ids::StructureId;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("No reference data found for structure '{id}'")]
    ReferenceNotFound { id: StructureId },

    #[error("Reference data could not be loaded: {source}")]
    Reference {
        #[from]
        source: ReferenceLoadError,
    },

    #[error("Statistics could not be computed: {source}")]
    Statistics {
        #[from]
        source: StatsError,
    },

    #[error("Invalid threshold configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Prediction failed: {0}")]
    Prediction(String),
}
