//! The `Engine` trait and error type.
//!
//! `Engine` is the public trait consumed by orchestration. Both the
//! parallel engine (`ThreadedEngine`) and the single-threaded oracle
//! (`ReferenceEngine`) implement it.

use crate::observer::ProgressObserver;
use crate::options::Options;
use crate::series::Series;

/// Error type for series summation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PiError {
    /// A computation error occurred.
    #[error("computation error: {0}")]
    Computation(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// A kernel evaluation produced a NaN or infinite value.
    #[error("non-finite value encountered: {0}")]
    NonFinite(String),

    /// A worker thread terminated abnormally before publishing its sum.
    #[error("worker failure: {0}")]
    Worker(String),

    /// Results from different engines don't agree within tolerance.
    #[error("result mismatch between engines")]
    Mismatch,
}

/// Public trait for summation engines, consumed by orchestration.
pub trait Engine: Send + Sync {
    /// Sum `terms` iterations of `series` with the given options.
    fn compute(
        &self,
        observer: &dyn ProgressObserver,
        engine_index: usize,
        terms: u64,
        series: &Series,
        opts: &Options,
    ) -> Result<f64, PiError>;

    /// Get the name of this engine.
    fn name(&self) -> &str;
}
