//! # picalc-core
//!
//! Core library for the PiCalc-rs high-performance π approximator.
//! Implements the lock-free chunk dispenser, the unrolled summation
//! kernel, the threaded engine, and the single-threaded reference oracle.

pub mod constants;
pub mod dispenser;
pub mod engine;
pub mod kernel;
pub mod observer;
pub mod observers;
pub mod options;
pub mod progress;
pub mod reference;
pub mod registry;
pub mod series;
pub mod threaded;
pub mod worker;

// Re-exports
pub use constants::{
    exit_codes, COMPARE_TOLERANCE, DEFAULT_CHUNK_SIZE, DEFAULT_TERMS,
    FALLBACK_THREADS, PROGRESS_REPORT_THRESHOLD,
};
pub use dispenser::{Chunk, ChunkDispenser};
pub use engine::{Engine, PiError};
pub use observer::{FrozenObserver, ProgressObserver};
pub use options::Options;
pub use progress::ProgressUpdate;
pub use registry::{DefaultFactory, EngineFactory};
pub use series::Series;

/// Approximate π by summing `terms` iterations of the Leibniz series.
///
/// This is a convenience function for simple use cases. For engine
/// selection, custom parameters, or progress reporting, use the `Engine`
/// trait directly.
///
/// # Example
/// ```
/// let pi = picalc_core::leibniz_pi(1000);
/// assert!((pi - 3.142092403684).abs() < 1e-9);
/// ```
#[must_use]
pub fn leibniz_pi(terms: u64) -> f64 {
    use engine::Engine as _;
    use observers::NoOpObserver;

    let engine = reference::ReferenceEngine::new();
    engine
        .compute(
            &NoOpObserver::new(),
            0,
            terms,
            &Series::leibniz(),
            &Options::default(),
        )
        .expect("reference engine cannot fail for a positive iteration count")
}
