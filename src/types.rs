//! Common Types and Constants
//!
//! Shared data structures used across the vector-space modules.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ==================== Constants ====================

/// Default vector dimensionality
pub const DEFAULT_DIMENSIONALITY: usize = 200;

/// Default number of non-zero entries in a random vector
pub const DEFAULT_SPARSITY: usize = 200;

/// Default neighbour count for retrieval
pub const DEFAULT_NEIGHBOURS: usize = 10;

/// Vowels of the working alphabet (y is treated as a vowel)
pub const DEFAULT_VOWELS: &str = "aeiouäöåüy";

/// Consonants of the working alphabet
pub const DEFAULT_CONSONANTS: &str = "bcdgfhjklmnpqrstvwxz";

/// Reserved item key: neutral seed for n-gram binding
pub const DUMMY_VECTOR_KEY: &str = "dummyvector";

/// Reserved permutation key: binds vowel subsequences
pub const VOWEL_SEQUENCE_KEY: &str = "vowelsequence";

/// Decimal places kept in the cosine distance before it is turned into a similarity
pub const SIMILARITY_DECIMALS: i32 = 10;

/// Decimal places used when reporting symbol-to-symbol similarity
pub const DIAGNOSTIC_DECIMALS: i32 = 3;

// ==================== Aliases ====================

/// Dense real-valued vector of length d
pub type Vector = Vec<f64>;

/// Token string -> composite token vector
///
/// Ordered so that retrieval and reporting iterate deterministically.
pub type TokenVectors = BTreeMap<String, Vector>;

/// Ranked neighbours of one query token
pub type NeighborList = Vec<Neighbor>;

// ==================== Retrieval Types ====================

/// One ranked retrieval candidate
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Neighbor {
    /// Candidate token
    pub token: String,
    /// Cosine similarity to the query, in [-1, 1]
    pub similarity: f64,
}

impl Neighbor {
    pub fn new(token: impl Into<String>, similarity: f64) -> Self {
        Self {
            token: token.into(),
            similarity,
        }
    }
}

/// Pairwise similarity between two item-table entries
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SymbolSimilarity {
    pub left: String,
    pub right: String,
    pub similarity: f64,
}

// ==================== Phonetic Inventory ====================

/// Named articulatory feature with its member symbols
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticulatoryClass {
    pub name: String,
    pub members: String,
}

impl ArticulatoryClass {
    pub fn new(name: impl Into<String>, members: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: members.into(),
        }
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.members.contains(symbol)
    }
}

/// The default articulatory classes, in generation order
///
/// The `vowel` class spans every vowel so that vowels weigh higher against
/// each other than any single articulatory feature would make them.
pub fn default_articulatory_classes() -> Vec<ArticulatoryClass> {
    [
        ("klusil", "ptkqbdg"),
        ("frikativ", "szjfvrl"),
        ("nasal", "mn"),
        ("labial", "pbmw"),
        ("palatal", "j"),
        ("dental", "tdsnl"),
        ("velar", "kghq"),
        ("likvid", "lrw"),
        ("tonlös", "ptkqfs"),
        ("tonande", "bdgvrlmnzw"),
        ("aspirerad", "pqtkh"),
        ("front", "ieyüäö"),
        ("back", "uoåa"),
        ("closed", "iyuü"),
        ("mid", "eöoå"),
        ("open", "äa"),
        ("rounded", "yuüåoö"),
        ("unrounded", "ieäa"),
        ("vowel", DEFAULT_VOWELS),
    ]
    .into_iter()
    .map(|(name, members)| ArticulatoryClass::new(name, members))
    .collect()
}

/// Round to a fixed number of decimal places
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_classes_cover_alphabet_only() {
        let alphabet: String = format!("{DEFAULT_VOWELS}{DEFAULT_CONSONANTS}");
        for class in default_articulatory_classes() {
            for c in class.members.chars() {
                assert!(
                    alphabet.contains(c),
                    "Class {} member {} outside the alphabet",
                    class.name,
                    c
                );
            }
        }
    }

    #[test]
    fn test_vowel_class_spans_vowels() {
        let classes = default_articulatory_classes();
        let vowel = classes.iter().find(|c| c.name == "vowel").unwrap();
        for c in DEFAULT_VOWELS.chars() {
            assert!(vowel.contains(c), "Vowel class should contain {}", c);
        }
        assert!(!vowel.contains('b'));
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.123456, 3), 0.123);
        assert_eq!(round_to(1e-16, 10), 0.0);
        assert_eq!(round_to(-0.98765, 2), -0.99);
    }
}
