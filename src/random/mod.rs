//! Random index vectors and permutations.
//!
//! - Index vectors are ternary: k of d positions are non-zero, half +1 and
//!   half -1, everything else 0. Two independent index vectors are nearly
//!   orthogonal when d is large.
//! - Permutations are uniformly random bijections of `{0, …, d-1}`.

use rand::prelude::*;
use rand::seq::index;
use rand_chacha::ChaCha8Rng;

use crate::error::{PhoneticError, Result};
use crate::types::Vector;
use crate::vector::Permutation;

/// Check `0 < k <= d`
pub fn validate_dimensions(dimensionality: usize, sparsity: usize) -> Result<()> {
    if dimensionality == 0 {
        return Err(PhoneticError::InvalidParameter(
            "dimensionality must be positive".to_string(),
        ));
    }
    if sparsity == 0 || sparsity > dimensionality {
        return Err(PhoneticError::InvalidParameter(format!(
            "sparsity {sparsity} must be in 1..={dimensionality}"
        )));
    }
    Ok(())
}

/// Source of index vectors and permutations
pub struct RandomIndexer {
    rng: ChaCha8Rng,
}

impl RandomIndexer {
    /// Seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Create an indexer with a specific seed (for testing)
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Sparse ternary vector of length d with exactly k non-zero entries.
    ///
    /// The k positions are an unordered sample; in sample order the first
    /// `k / 2` become +1 and the remaining `k - k / 2` become -1.
    pub fn random_vector(&mut self, dimensionality: usize, sparsity: usize) -> Result<Vector> {
        validate_dimensions(dimensionality, sparsity)?;

        let mut vector = vec![0.0; dimensionality];
        let positives = sparsity / 2;
        let positions = index::sample(&mut self.rng, dimensionality, sparsity);
        for (order, position) in positions.into_iter().enumerate() {
            vector[position] = if order < positives { 1.0 } else { -1.0 };
        }
        Ok(vector)
    }

    /// Uniformly random bijection of `{0, …, d-1}`
    pub fn permutation(&mut self, dimensionality: usize) -> Permutation {
        let mut indices: Vec<usize> = (0..dimensionality).collect();
        indices.shuffle(&mut self.rng);
        Permutation::from_indices(indices)
    }
}

impl Default for RandomIndexer {
    fn default() -> Self {
        Self::new()
    }
}
