//! Dense vector arithmetic and index permutations.
//!
//! Permutation is the binding operator of the space: applying a permutation
//! moves the value at position i to position `p[i]`, so sequences of
//! permutations encode order while keeping the vector's norm unchanged.

use serde::{Deserialize, Serialize};

use crate::types::Vector;

/// Zero vector of length d
pub fn zeros(d: usize) -> Vector {
    vec![0.0; d]
}

/// Vector dot product
pub fn dot_product(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(&x, &y)| x * y).sum()
}

/// Euclidean norm
pub fn norm(a: &[f64]) -> f64 {
    dot_product(a, a).sqrt()
}

/// Vector addition: a += b
pub fn vec_add(a: &mut [f64], b: &[f64]) {
    for (ai, &bi) in a.iter_mut().zip(b.iter()) {
        *ai += bi;
    }
}

/// Vector addition: a += scale * b
pub fn vec_add_scaled(a: &mut [f64], b: &[f64], scale: f64) {
    for (ai, &bi) in a.iter_mut().zip(b.iter()) {
        *ai += scale * bi;
    }
}

/// Normalisation hook applied to every symbol vector.
///
/// Currently the identity: symbol vectors keep their raw sums so that
/// shared articulatory classes show up in their magnitude as well.
pub fn normalise(vector: Vector) -> Vector {
    vector
}

/// Cosine similarity; 0.0 when either vector is all zeros
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let denom = norm(a) * norm(b);
    if denom > 0.0 {
        dot_product(a, b) / denom
    } else {
        0.0
    }
}

/// Bijection on `{0, …, d-1}` stored as the destination of every source index
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permutation(Vec<usize>);

impl Permutation {
    /// Wrap raw indices; use [`Permutation::is_bijection`] before trusting them
    pub fn from_indices(indices: Vec<usize>) -> Self {
        Self(indices)
    }

    pub fn identity(d: usize) -> Self {
        Self((0..d).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Move `vector[i]` to `result[self[i]]`.
    ///
    /// Untargeted positions stay zero; out-of-range targets are dropped.
    pub fn apply(&self, vector: &[f64]) -> Vector {
        let mut result = zeros(vector.len());
        for (&target, &value) in self.0.iter().zip(vector.iter()) {
            if let Some(slot) = result.get_mut(target) {
                *slot = value;
            }
        }
        result
    }

    pub fn inverse(&self) -> Self {
        let mut inverse = vec![0; self.0.len()];
        for (source, &target) in self.0.iter().enumerate() {
            if let Some(slot) = inverse.get_mut(target) {
                *slot = source;
            }
        }
        Self(inverse)
    }

    /// Every index in `0..len` appears exactly once
    pub fn is_bijection(&self) -> bool {
        let mut seen = vec![false; self.0.len()];
        for &target in &self.0 {
            match seen.get_mut(target) {
                Some(flag) if !*flag => *flag = true,
                _ => return false,
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_product() {
        let a = vec![1.0, 2.0, 3.0];
        let b = vec![4.0, 5.0, 6.0];
        assert!((dot_product(&a, &b) - 32.0).abs() < 1e-10);
    }

    #[test]
    fn test_vec_add_scaled() {
        let mut a = vec![1.0, 1.0];
        vec_add_scaled(&mut a, &[2.0, -4.0], 0.5);
        assert_eq!(a, vec![2.0, -1.0]);
    }

    #[test]
    fn test_cosine_similarity() {
        let a = vec![1.0, 0.0];
        let b = vec![0.0, 3.0];
        assert!(cosine_similarity(&a, &b).abs() < 1e-12);
        assert!((cosine_similarity(&a, &a) - 1.0).abs() < 1e-12);
        assert!((cosine_similarity(&a, &[-2.0, 0.0]) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_similarity_zero_vector() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]), 0.0);
    }

    #[test]
    fn test_apply_moves_source_to_target() {
        let p = Permutation::from_indices(vec![2, 0, 1]);
        let v = p.apply(&[10.0, 20.0, 30.0]);
        // value at 0 goes to 2, at 1 goes to 0, at 2 goes to 1
        assert_eq!(v, vec![20.0, 30.0, 10.0]);
    }

    #[test]
    fn test_inverse_round_trip() {
        let p = Permutation::from_indices(vec![3, 0, 2, 1]);
        let v = vec![1.0, -1.0, 0.5, 7.0];
        assert_eq!(p.inverse().apply(&p.apply(&v)), v);
        assert_eq!(p.apply(&p.inverse().apply(&v)), v);
    }

    #[test]
    fn test_is_bijection() {
        assert!(Permutation::identity(5).is_bijection());
        assert!(!Permutation::from_indices(vec![0, 0, 1]).is_bijection());
        assert!(!Permutation::from_indices(vec![0, 3, 1]).is_bijection());
    }

    #[test]
    fn test_normalise_is_identity() {
        let v = vec![3.0, -1.0, 2.0];
        assert_eq!(normalise(v.clone()), v);
    }
}
