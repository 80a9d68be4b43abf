//! # EWCL Validation Library
//!
//! Checks per-residue protein disorder predictions against published experimental
//! data. Given a structure file and a predictor, it extracts the amino-acid sequence,
//! aligns the predicted scores with a reference series and reports Pearson
//! correlation, RMSE and a pass/fail verdict.
//!
//! ## Layers
//!
//! - **[`core`]: Data and Input.** Residue codes, sequences, score series, PDB
//!   sequence extraction, reference CSV loading and the registry of benchmark
//!   structures (1XQ8, 2K4X, 5J7Y).
//!
//! - **[`engine`]: Comparison Logic.** Alignment modes, the statistics engine, risk
//!   classification, named thresholds and the predictor interface.
//!
//! - **[`workflows`]: The Public API.** Strict validation, qualitative comparison,
//!   batch validation and score summaries.
//!
//! ```no_run
//! use ewcl::core::models::ids::StructureId;
//! use ewcl::core::models::series::PredictionMap;
//! use ewcl::core::reference::registry::builtin_registry;
//! use ewcl::core::reference::source::CsvReferenceDirectory;
//! use ewcl::engine::config::ValidationThresholds;
//! use ewcl::workflows::validate::validate;
//!
//! let id: StructureId = "1xq8".parse()?;
//! let predictions = PredictionMap::from_scores([0.9, 0.1, 0.9, 0.1]);
//! let source = CsvReferenceDirectory::new("data/references");
//! let result = validate(
//!     &id,
//!     &predictions,
//!     builtin_registry(),
//!     &source,
//!     &ValidationThresholds::default(),
//! )?;
//! println!("r = {:.3}, valid = {}", result.pearson_r, result.is_valid);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod core;
pub mod engine;
pub mod workflows;
