//! Series definition and fail-fast validation.
//!
//! A `Series` fixes the two denominator parameters of the summed terms
//! together with the leading term and the final multiplier. For index `i`
//! the kernel adds `-1/(i·p1 - p2)` and `+1/(i·p1 + p2)`.

use crate::constants::{
    LEIBNIZ_INITIAL_TERM, LEIBNIZ_MULTIPLIER, LEIBNIZ_P1, LEIBNIZ_P2,
};
use crate::engine::PiError;

/// Parameters of the summed series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Series {
    /// Denominator slope: index `i` contributes denominators `i·p1 ∓ p2`.
    pub p1: f64,
    /// Denominator offset.
    pub p2: f64,
    /// Leading term, added to the reduced sum before the multiplier.
    pub initial_term: f64,
    /// Scalar applied last.
    pub multiplier: f64,
}

impl Series {
    /// The Leibniz series for π: `4·(1 - 1/3 + 1/5 - 1/7 + …)`.
    #[must_use]
    pub fn leibniz() -> Self {
        Self {
            p1: LEIBNIZ_P1,
            p2: LEIBNIZ_P2,
            initial_term: LEIBNIZ_INITIAL_TERM,
            multiplier: LEIBNIZ_MULTIPLIER,
        }
    }

    /// A Leibniz-shaped series with custom denominator parameters.
    #[must_use]
    pub fn with_params(p1: f64, p2: f64) -> Self {
        Self {
            p1,
            p2,
            ..Self::leibniz()
        }
    }

    /// Validate the series against an iteration count.
    ///
    /// Rejects a non-positive iteration count, non-finite parameters, and
    /// any in-range index whose denominator evaluates to exactly zero —
    /// all before a single worker is spawned.
    pub fn validate(&self, terms: u64) -> Result<(), PiError> {
        if terms == 0 {
            return Err(PiError::Config(
                "iteration count must be positive".into(),
            ));
        }
        for (name, value) in [
            ("p1", self.p1),
            ("p2", self.p2),
            ("initial term", self.initial_term),
            ("multiplier", self.multiplier),
        ] {
            if !value.is_finite() {
                return Err(PiError::Config(format!(
                    "series parameter {name} must be finite, got {value}"
                )));
            }
        }
        if let Some(i) = self.zero_denominator_index(terms) {
            return Err(PiError::Config(format!(
                "denominator is exactly zero at index {i} (p1 = {}, p2 = {})",
                self.p1, self.p2
            )));
        }
        Ok(())
    }

    /// Find an index in `[1, terms]` where `i·p1 - p2` or `i·p1 + p2`
    /// evaluates to exactly zero, if one exists.
    ///
    /// Only indices near `±p2/p1` can hit zero, so the search checks the
    /// rounded candidates and their neighbours instead of the whole range.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn zero_denominator_index(&self, terms: u64) -> Option<u64> {
        if self.p1 == 0.0 {
            // Denominators degenerate to ∓p2 for every index.
            return (self.p2 == 0.0).then_some(1);
        }
        let last = terms as f64;
        for ratio in [self.p2 / self.p1, -self.p2 / self.p1] {
            let nearest = ratio.round();
            for candidate in [nearest - 1.0, nearest, nearest + 1.0] {
                if candidate < 1.0 || candidate > last {
                    continue;
                }
                let hit = candidate * self.p1 - self.p2 == 0.0
                    || candidate * self.p1 + self.p2 == 0.0;
                if hit {
                    return Some(candidate as u64);
                }
            }
        }
        None
    }
}

impl Default for Series {
    fn default() -> Self {
        Self::leibniz()
    }
}
