//! Lock-free chunk dispenser.
//!
//! A single shared cursor, advanced with one relaxed `fetch_add`, hands
//! each caller a disjoint contiguous sub-range of the iteration space
//! `[1, terms]`. Relaxed ordering suffices: chunks are disjoint by
//! construction and chunk contributions stay thread-private until the
//! join barrier, which publishes them with its own acquire/release
//! semantics.

use std::sync::atomic::{AtomicU64, Ordering};

/// A half-open sub-range `[start, end)` of the iteration space, owned by
/// the worker that claimed it until fully consumed.
///
/// The ordinal is fixed at creation: chunk `k` always covers the same
/// indices for a given chunk size, no matter which worker claims it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk {
    /// Ordinal of this chunk in dispense order (0-based).
    pub index: u64,
    /// First index of the chunk.
    pub start: u64,
    /// One past the last index of the chunk.
    pub end: u64,
}

impl Chunk {
    /// Number of indices in the chunk.
    #[must_use]
    pub fn len(&self) -> u64 {
        self.end - self.start
    }

    /// Whether the chunk covers no indices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Dispenses disjoint chunks of `[1, terms]` to concurrent claimers.
pub struct ChunkDispenser {
    next: AtomicU64,
    limit: u64,
    chunk_size: u64,
}

impl ChunkDispenser {
    /// Create a dispenser over the iteration space `[1, terms]`.
    ///
    /// # Panics
    /// Panics if `chunk_size` is zero (the cursor would never advance).
    #[must_use]
    pub fn new(terms: u64, chunk_size: u64) -> Self {
        assert!(chunk_size > 0, "chunk size must be positive");
        Self {
            next: AtomicU64::new(1),
            limit: terms,
            chunk_size,
        }
    }

    /// Atomically claim the next chunk, or `None` once the space is
    /// exhausted. Safe under unbounded concurrent calls; the ranges
    /// returned across all calls are pairwise disjoint and tile
    /// `[1, terms]` exactly.
    pub fn claim(&self) -> Option<Chunk> {
        let start = self.next.fetch_add(self.chunk_size, Ordering::Relaxed);
        if start > self.limit {
            return None;
        }
        let end = start
            .saturating_add(self.chunk_size)
            .min(self.limit.saturating_add(1));
        Some(Chunk {
            index: (start - 1) / self.chunk_size,
            start,
            end,
        })
    }

    /// Total number of chunks this dispenser will issue.
    #[must_use]
    pub fn total_chunks(&self) -> u64 {
        self.limit.div_ceil(self.chunk_size)
    }

    /// Upper bound of the iteration space.
    #[must_use]
    pub fn limit(&self) -> u64 {
        self.limit
    }
}
