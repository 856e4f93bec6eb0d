//! Error types for the QueryKit crate
//!
//! This module contains all error types that can be returned during query-model construction.

use thiserror::Error;

/// Errors raised while assembling a query model.
///
/// Construction errors are surfaced synchronously to the caller; a failing
/// call validates before mutating, so the model is never left half-updated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("query table must not be empty: call from(...) before alias(...)")]
    NoTable,

    #[error("alias(...) only supports a single query table, found {0}")]
    MultipleTables(usize),
}
