//! Numeric kernel: unrolled and scalar range summation.
//!
//! `sum_range` keeps four independent accumulators across consecutive
//! indices so the four kernel evaluations carry no data dependency between
//! them, letting the hardware's floating-point pipelines run in parallel.
//! Indices not covered by the 4-wide stride fall through to a scalar tail.
//!
//! Callers must guarantee that no index in the range makes a denominator
//! exactly zero (see [`Series::validate`](crate::series::Series::validate));
//! the hot loop itself is branch-free.

use crate::series::Series;

/// Sum the series terms for indices in the half-open range `[start, end)`
/// using the 4-wide unrolled path plus a scalar remainder.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn sum_range(series: &Series, start: u64, end: u64) -> f64 {
    let p1 = series.p1;
    let p2 = series.p2;

    let mut s1 = 0.0f64;
    let mut s2 = 0.0f64;
    let mut s3 = 0.0f64;
    let mut s4 = 0.0f64;

    let mut i = start;
    while i + 3 < end {
        let iv1 = i as f64;
        s1 -= 1.0 / (iv1 * p1 - p2);
        s1 += 1.0 / (iv1 * p1 + p2);

        let iv2 = (i + 1) as f64;
        s2 -= 1.0 / (iv2 * p1 - p2);
        s2 += 1.0 / (iv2 * p1 + p2);

        let iv3 = (i + 2) as f64;
        s3 -= 1.0 / (iv3 * p1 - p2);
        s3 += 1.0 / (iv3 * p1 + p2);

        let iv4 = (i + 3) as f64;
        s4 -= 1.0 / (iv4 * p1 - p2);
        s4 += 1.0 / (iv4 * p1 + p2);

        i += 4;
    }

    // Scalar tail for the 0..=3 indices the stride left over.
    while i < end {
        let iv = i as f64;
        s1 -= 1.0 / (iv * p1 - p2);
        s1 += 1.0 / (iv * p1 + p2);
        i += 1;
    }

    s1 + s2 + s3 + s4
}

/// Sum the series terms for `[start, end)` one index at a time.
///
/// Single-accumulator oracle for the unrolled path; also the inner loop of
/// the reference engine.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn sum_range_scalar(series: &Series, start: u64, end: u64) -> f64 {
    let p1 = series.p1;
    let p2 = series.p2;

    let mut total = 0.0f64;
    let mut i = start;
    while i < end {
        let iv = i as f64;
        total -= 1.0 / (iv * p1 - p2);
        total += 1.0 / (iv * p1 + p2);
        i += 1;
    }
    total
}
