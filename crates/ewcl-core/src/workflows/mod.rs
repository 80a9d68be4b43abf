//! # Workflows Module
//!
//! End-to-end entry points that tie the [`core`](crate::core) data layer and the
//! [`engine`](crate::engine) logic together.
//!
//! ## Workflows
//!
//! - **Strict Validation** ([`validate`]) - Registry lookup, keyed alignment and a
//!   pass/fail verdict against the published series
//! - **Qualitative Comparison** ([`compare`]) - Truncating comparison of two plain
//!   series with strength and error labels
//! - **Batch Validation** ([`batch`]) - Many independent validations run in parallel
//! - **Score Summary** ([`summary`]) - Mean, extremes and risk-band counts of a prediction
//!
//! Each call builds its results from scratch; nothing is cached between calls.

pub mod batch;
pub mod compare;
pub mod summary;
pub mod validate;
