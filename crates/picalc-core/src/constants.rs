//! Constants for series-summation configuration and defaults.

/// Default number of series iterations to sum.
pub const DEFAULT_TERMS: u64 = 200_000_000;

/// Default chunk size handed out by the dispenser.
///
/// Measured against the per-index kernel cost (two divisions, two
/// additions): 50 000 indices amortize one relaxed `fetch_add` down to
/// noise, while still producing thousands of chunks for the default
/// iteration count so slow cores never hold up fast ones.
pub const DEFAULT_CHUNK_SIZE: u64 = 50_000;

/// Thread count used when hardware parallelism detection reports nothing.
pub const FALLBACK_THREADS: usize = 8;

/// First series parameter (denominator slope) of the Leibniz series.
pub const LEIBNIZ_P1: f64 = 4.0;

/// Second series parameter (denominator offset) of the Leibniz series.
pub const LEIBNIZ_P2: f64 = 1.0;

/// Leading term of the series, added before the final multiplier.
pub const LEIBNIZ_INITIAL_TERM: f64 = 1.0;

/// Scalar applied to the reduced sum to obtain the approximation of π.
pub const LEIBNIZ_MULTIPLIER: f64 = 4.0;

/// Tolerance for cross-engine result comparison.
///
/// Partial sums are reduced in configuration-dependent order, so engines
/// agree only up to floating-point reassociation error.
pub const COMPARE_TOLERANCE: f64 = 1e-9;

/// Minimum progress change (1%) before reporting an update.
pub const PROGRESS_REPORT_THRESHOLD: f64 = 0.01;

/// Exit codes for the `picalc` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Engine results did not agree within tolerance.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}
