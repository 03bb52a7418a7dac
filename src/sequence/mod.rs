//! Sequence binding over the symbol space.
//!
//! Two strategies turn an ordered run of symbols into one vector:
//!
//! - **Permutation binding**: `v ← P_c(v)` for every symbol c, starting from
//!   a seed vector. Only the order of permutations matters, so "ab" and "ba"
//!   land on unrelated vectors while the norm of the seed is preserved.
//! - **Additive binding**: `v ← item(c) + P(v)` with one fixed permutation P,
//!   starting from zero. Each symbol's identity is added, and every earlier
//!   symbol is pushed one permutation step further away.
//!
//! Symbols missing from the tables are skipped.

use crate::space::SymbolSpace;
use crate::types::Vector;
use crate::vector::{vec_add, zeros, Permutation};

pub struct SequenceEncoder<'a> {
    space: &'a SymbolSpace,
}

impl<'a> SequenceEncoder<'a> {
    pub fn new(space: &'a SymbolSpace) -> Self {
        Self { space }
    }

    /// Apply each symbol's permutation to the running vector, left to right
    pub fn bind_by_permutation<I>(&self, sequence: I, seed: &[f64]) -> Vector
    where
        I: IntoIterator<Item = char>,
    {
        let mut vector = seed.to_vec();
        for symbol in sequence {
            if let Some(permutation) = self.space.permutations().symbol(symbol) {
                vector = permutation.apply(&vector);
            }
        }
        vector
    }

    /// `v = item(c) + P(v)` for each known symbol, starting from zero
    pub fn bind_additive<I>(&self, sequence: I, permutation: &Permutation) -> Vector
    where
        I: IntoIterator<Item = char>,
    {
        let mut vector = zeros(self.space.dimensionality());
        for symbol in sequence {
            if let Some(item) = self.space.items().symbol(symbol) {
                let mut next = permutation.apply(&vector);
                vec_add(&mut next, item);
                vector = next;
            }
        }
        vector
    }
}

/// All contiguous windows of `size` characters; empty when `size` is 0 or too large
pub fn char_windows(chars: &[char], size: usize) -> Vec<&[char]> {
    if size == 0 {
        return Vec::new();
    }
    chars.windows(size).collect()
}
