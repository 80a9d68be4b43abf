//! # Engine Module
//!
//! The comparison logic of the library: pairing predictions with references and
//! judging their agreement.
//!
//! ## Components
//!
//! - **Alignment** ([`align`]) - Keyed (reference-length) and truncating alignment modes
//! - **Statistics** ([`stats`]) - Pearson correlation, RMSE and qualitative labels
//! - **Risk Classification** ([`risk`]) - Low/Medium/High banding of single scores
//! - **Thresholds** ([`config`]) - One named structure for every verdict and band cut-off
//! - **Prediction Capability** ([`predictor`]) - The interface a disorder predictor implements
//! - **Progress Reporting** ([`progress`]) - Callback hooks for batch runs
//! - **Errors** ([`error`]) - The conditions callers are expected to handle
//!
//! Every function here is pure over its inputs, so any number of validations
//! may run concurrently without coordination.

pub mod align;
pub mod config;
pub mod error;
pub mod predictor;
pub mod progress;
pub mod risk;
pub mod stats;
