//! Brute-force cosine retrieval over a vocabulary's token vectors.
//!
//! Similarity is `1 - round(cosine_distance, 10)`, so a token scores exactly
//! 1.0 against itself. Ranking order:
//! 1. similarity, descending
//! 2. the query token itself
//! 3. candidate token, ascending
//!
//! Self matches are kept. A zero vector scores 0.0 against everything.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use rayon::prelude::*;
use tracing::debug;

use crate::types::{round_to, Neighbor, NeighborList, TokenVectors, Vector, SIMILARITY_DECIMALS};
use crate::vector::{dot_product, norm};

struct Entry {
    token: String,
    vector: Vector,
    norm: f64,
}

/// Rounded cosine similarity from precomputed norms
fn score(a: &[f64], norm_a: f64, b: &[f64], norm_b: f64) -> f64 {
    let denom = norm_a * norm_b;
    if denom <= 0.0 {
        return 0.0;
    }
    let distance = 1.0 - dot_product(a, b) / denom;
    1.0 - round_to(distance, SIMILARITY_DECIMALS)
}

pub struct SimilarityIndex {
    entries: Vec<Entry>,
}

impl SimilarityIndex {
    pub fn new(vectors: &TokenVectors) -> Self {
        Self::from_vectors(vectors.clone())
    }

    pub fn from_vectors(vectors: TokenVectors) -> Self {
        let entries = vectors
            .into_iter()
            .map(|(token, vector)| {
                let norm = norm(&vector);
                Entry { token, vector, norm }
            })
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, token: &str) -> Option<usize> {
        self.entries
            .binary_search_by(|entry| entry.token.as_str().cmp(token))
            .ok()
    }

    /// Similarity of two indexed tokens
    pub fn similarity(&self, left: &str, right: &str) -> Option<f64> {
        let a = &self.entries[self.position(left)?];
        let b = &self.entries[self.position(right)?];
        Some(score(&a.vector, a.norm, &b.vector, b.norm))
    }

    /// Top k candidates for `query`; `preferred` wins ties against equal scores
    fn ranked(&self, query: &[f64], query_norm: f64, preferred: Option<usize>, k: usize) -> NeighborList {
        if k == 0 {
            return Vec::new();
        }

        let mut scored: Vec<(usize, f64)> = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (i, score(query, query_norm, &entry.vector, entry.norm)))
            .collect();

        let order = |a: &(usize, f64), b: &(usize, f64)| -> Ordering {
            b.1.total_cmp(&a.1)
                .then_with(|| (Some(b.0) == preferred).cmp(&(Some(a.0) == preferred)))
                .then_with(|| a.0.cmp(&b.0))
        };

        if k < scored.len() {
            scored.select_nth_unstable_by(k - 1, order);
            scored.truncate(k);
        }
        scored.sort_by(order);

        scored
            .into_iter()
            .map(|(i, similarity)| Neighbor::new(self.entries[i].token.clone(), similarity))
            .collect()
    }

    /// Neighbours of one indexed token, itself included
    pub fn neighbors_of(&self, token: &str, k: usize) -> Option<NeighborList> {
        let i = self.position(token)?;
        let entry = &self.entries[i];
        Some(self.ranked(&entry.vector, entry.norm, Some(i), k))
    }

    /// Rank an arbitrary vector (e.g. an unseen word) against the index
    pub fn rank(&self, query: &[f64], k: usize) -> NeighborList {
        self.ranked(query, norm(query), None, k)
    }

    /// Neighbour lists for every indexed token, computed in parallel
    pub fn nearest_neighbors(&self, k: usize) -> BTreeMap<String, NeighborList> {
        debug!(tokens = self.entries.len(), k, "computing nearest neighbours");
        self.entries
            .par_iter()
            .enumerate()
            .map(|(i, entry)| {
                (
                    entry.token.clone(),
                    self.ranked(&entry.vector, entry.norm, Some(i), k),
                )
            })
            .collect()
    }
}

/// One-shot neighbour computation over a token-vector mapping
pub fn nearest_neighbors(vectors: &TokenVectors, k: usize) -> BTreeMap<String, NeighborList> {
    SimilarityIndex::new(vectors).nearest_neighbors(k)
}
