// File: src/core/transitions.rs
use crate::core::types::Weight;
use serde::{Deserialize, Serialize};

/// First-order transition counts between consecutive weights.
///
/// Indexed `[prev][next]` by `Weight::index`, so all four pairs always exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionMatrix {
    counts: [[u64; 2]; 2],
}

impl TransitionMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the matrix from every adjacent `(weights[i], weights[i + 1])` pair.
    /// O(n) complexity.
    pub fn from_weights(weights: &[Weight]) -> Self {
        let mut matrix = Self::new();
        for pair in weights.windows(2) {
            matrix.record(pair[0], pair[1]);
        }
        matrix
    }

    pub fn record(&mut self, prev: Weight, next: Weight) {
        self.counts[prev.index()][next.index()] += 1;
    }

    pub fn get(&self, prev: Weight, next: Weight) -> u64 {
        self.counts[prev.index()][next.index()]
    }

    /// Rows are the current syllable, columns the next one, both in L, G order.
    pub fn rows(&self) -> [[u64; 2]; 2] {
        self.counts
    }

    /// Sum of all four cells, always `len(weights) - 1` for non-empty input.
    pub fn total(&self) -> u64 {
        self.counts.iter().flatten().sum()
    }

    /// All `(prev, next, count)` cells in row-major order.
    pub fn entries(&self) -> impl Iterator<Item = (Weight, Weight, u64)> + '_ {
        Weight::ALL.into_iter().flat_map(move |prev| {
            Weight::ALL
                .into_iter()
                .map(move |next| (prev, next, self.get(prev, next)))
        })
    }
}

/// Counts consecutive weight pairs.
pub fn transitions(weights: &[Weight]) -> TransitionMatrix {
    TransitionMatrix::from_weights(weights)
}
