//! Symbol Space - item and permutation tables for the working alphabet
//!
//! Every symbol gets a random index vector plus the vector of every
//! articulatory class it belongs to. Symbols that share classes therefore
//! share components, and their cosine similarity grows with the number of
//! shared features. Every symbol also owns a random permutation used to bind
//! it into ordered sequences.
//!
//! Reserved entries:
//! - `dummyvector` (item table): dense random seed for n-gram binding
//! - `vowelsequence` (permutation table): positional binder for vowel runs

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::error::{PhoneticError, Result};
use crate::random::{validate_dimensions, RandomIndexer};
use crate::types::{
    default_articulatory_classes, round_to, ArticulatoryClass, SymbolSimilarity, Vector,
    DEFAULT_CONSONANTS, DEFAULT_DIMENSIONALITY, DEFAULT_SPARSITY, DEFAULT_VOWELS,
    DIAGNOSTIC_DECIMALS, DUMMY_VECTOR_KEY, VOWEL_SEQUENCE_KEY,
};
use crate::vector::{cosine_similarity, normalise, vec_add, Permutation};

// ==================== Configuration ====================

/// Parameters of the symbol space
#[derive(Clone, Debug)]
pub struct SpaceConfig {
    /// Vector length d
    pub dimensionality: usize,
    /// Non-zero entries k of every random vector
    pub sparsity: usize,
    pub vowels: String,
    pub consonants: String,
    /// Articulatory classes, generated in this order
    pub classes: Vec<ArticulatoryClass>,
    /// Random seed (tests and benchmarks only)
    pub seed: Option<u64>,
}

impl Default for SpaceConfig {
    fn default() -> Self {
        Self {
            dimensionality: DEFAULT_DIMENSIONALITY,
            sparsity: DEFAULT_SPARSITY,
            vowels: DEFAULT_VOWELS.to_string(),
            consonants: DEFAULT_CONSONANTS.to_string(),
            classes: default_articulatory_classes(),
            seed: None,
        }
    }
}

impl SpaceConfig {
    pub fn with_dimensions(dimensionality: usize, sparsity: usize) -> Self {
        Self {
            dimensionality,
            sparsity,
            ..Default::default()
        }
    }

    /// Vowels followed by consonants, duplicates removed
    pub fn alphabet(&self) -> Vec<char> {
        let mut symbols = Vec::new();
        for c in self.vowels.chars().chain(self.consonants.chars()) {
            if !symbols.contains(&c) {
                symbols.push(c);
            }
        }
        symbols
    }

    pub fn validate(&self) -> Result<()> {
        validate_dimensions(self.dimensionality, self.sparsity)?;
        if self.alphabet().is_empty() {
            return Err(PhoneticError::InvalidParameter(
                "alphabet must contain at least one symbol".to_string(),
            ));
        }
        // Class vectors share the item table with symbols and the dummy vector
        let alphabet = self.alphabet();
        for class in &self.classes {
            let mut chars = class.name.chars();
            let is_symbol = matches!((chars.next(), chars.next()), (Some(c), None) if alphabet.contains(&c));
            if class.name.is_empty() || is_symbol || class.name == DUMMY_VECTOR_KEY {
                return Err(PhoneticError::InvalidParameter(format!(
                    "articulatory class name {:?} collides with an item table key",
                    class.name
                )));
            }
        }
        Ok(())
    }
}

// ==================== Tables ====================

fn symbol_key(symbol: char) -> String {
    symbol.to_string()
}

/// Key -> vector for symbols, articulatory classes and reserved markers
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemTable(BTreeMap<String, Vector>);

impl ItemTable {
    pub fn from_map(entries: BTreeMap<String, Vector>) -> Self {
        Self(entries)
    }

    pub fn get(&self, key: &str) -> Option<&[f64]> {
        self.0.get(key).map(Vec::as_slice)
    }

    pub fn symbol(&self, symbol: char) -> Option<&[f64]> {
        self.get(&symbol_key(symbol))
    }

    pub fn insert(&mut self, key: impl Into<String>, vector: Vector) {
        self.0.insert(key.into(), vector);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

/// Key -> permutation for symbols and the vowel-sequence marker
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermutationTable(BTreeMap<String, Permutation>);

impl PermutationTable {
    pub fn from_map(entries: BTreeMap<String, Permutation>) -> Self {
        Self(entries)
    }

    pub fn get(&self, key: &str) -> Option<&Permutation> {
        self.0.get(key)
    }

    pub fn symbol(&self, symbol: char) -> Option<&Permutation> {
        self.get(&symbol_key(symbol))
    }

    pub fn insert(&mut self, key: impl Into<String>, permutation: Permutation) {
        self.0.insert(key.into(), permutation);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Permutation)> {
        self.0.iter().map(|(k, p)| (k.as_str(), p))
    }
}

// ==================== Symbol Space ====================

/// Immutable bundle of the item and permutation tables
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SymbolSpace {
    dimensionality: usize,
    items: ItemTable,
    permutations: PermutationTable,
}

impl SymbolSpace {
    /// Assemble a space from loaded tables, inferring and checking d
    pub fn from_tables(items: ItemTable, permutations: PermutationTable) -> Result<Self> {
        let dimensionality = items
            .iter()
            .map(|(_, v)| v.len())
            .chain(permutations.iter().map(|(_, p)| p.len()))
            .next()
            .unwrap_or(0);

        for (key, vector) in items.iter() {
            if vector.len() != dimensionality {
                return Err(PhoneticError::InconsistentModel(format!(
                    "vector {key} has length {} instead of {dimensionality}",
                    vector.len()
                )));
            }
        }
        for (key, permutation) in permutations.iter() {
            if permutation.len() != dimensionality || !permutation.is_bijection() {
                return Err(PhoneticError::InconsistentModel(format!(
                    "permutation {key} is not a bijection of size {dimensionality}"
                )));
            }
        }

        Ok(Self {
            dimensionality,
            items,
            permutations,
        })
    }

    /// Space with no entries; never usable for encoding
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn dimensionality(&self) -> usize {
        self.dimensionality
    }

    pub fn items(&self) -> &ItemTable {
        &self.items
    }

    pub fn permutations(&self) -> &PermutationTable {
        &self.permutations
    }

    pub fn dummy_vector(&self) -> Option<&[f64]> {
        self.items.get(DUMMY_VECTOR_KEY)
    }

    pub fn vowel_sequence_permutation(&self) -> Option<&Permutation> {
        self.permutations.get(VOWEL_SEQUENCE_KEY)
    }

    /// Reserved entries present and at least one symbol besides them
    pub fn is_usable(&self) -> bool {
        self.dimensionality > 0
            && self.dummy_vector().is_some()
            && self.vowel_sequence_permutation().is_some()
            && self.items.len() > 1
            && self.permutations.len() > 1
    }

    /// Cosine similarity of every ordered pair of item-table entries
    pub fn symbol_similarities(&self) -> Vec<SymbolSimilarity> {
        let mut result = Vec::with_capacity(self.items.len() * self.items.len());
        for (left, a) in self.items.iter() {
            for (right, b) in self.items.iter() {
                result.push(SymbolSimilarity {
                    left: left.to_string(),
                    right: right.to_string(),
                    similarity: round_to(cosine_similarity(a, b), DIAGNOSTIC_DECIMALS),
                });
            }
        }
        result
    }
}

// ==================== Builder ====================

/// Builds a [`SymbolSpace`] from an alphabet and articulatory classes
pub struct SymbolSpaceBuilder {
    config: SpaceConfig,
}

impl SymbolSpaceBuilder {
    pub fn new(config: SpaceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SpaceConfig {
        &self.config
    }

    /// Build with the configured seed, or from entropy
    pub fn build(&self) -> Result<SymbolSpace> {
        let mut indexer = match self.config.seed {
            Some(seed) => RandomIndexer::with_seed(seed),
            None => RandomIndexer::new(),
        };
        self.build_with(&mut indexer)
    }

    pub fn build_with(&self, indexer: &mut RandomIndexer) -> Result<SymbolSpace> {
        self.config.validate()?;
        let d = self.config.dimensionality;
        let k = self.config.sparsity;

        let mut items = ItemTable::default();
        let mut permutations = PermutationTable::default();
        let mut class_vectors: HashMap<&str, Vector> = HashMap::new();

        for symbol in self.config.alphabet() {
            let mut vector = indexer.random_vector(d, k)?;
            for class in self.config.classes.iter().filter(|c| c.contains(symbol)) {
                if !class_vectors.contains_key(class.name.as_str()) {
                    let class_vector = indexer.random_vector(d, k)?;
                    class_vectors.insert(class.name.as_str(), class_vector);
                }
                if let Some(class_vector) = class_vectors.get(class.name.as_str()) {
                    vec_add(&mut vector, class_vector);
                }
            }
            items.insert(symbol_key(symbol), normalise(vector));
            permutations.insert(symbol_key(symbol), indexer.permutation(d));
        }

        for (name, vector) in class_vectors {
            items.insert(name, vector);
        }
        items.insert(DUMMY_VECTOR_KEY, indexer.random_vector(d, d)?);
        permutations.insert(VOWEL_SEQUENCE_KEY, indexer.permutation(d));

        let space = SymbolSpace {
            dimensionality: d,
            items,
            permutations,
        };

        info!(
            dimensionality = d,
            sparsity = k,
            items = space.items.len(),
            permutations = space.permutations.len(),
            "symbol space built"
        );
        if tracing::enabled!(tracing::Level::TRACE) {
            for entry in space.symbol_similarities() {
                trace!("{}\t{}\t{}", entry.left, entry.right, entry.similarity);
            }
        } else {
            debug!("symbol similarity table available at trace level");
        }

        Ok(space)
    }
}

impl Default for SymbolSpaceBuilder {
    fn default() -> Self {
        Self::new(SpaceConfig::default())
    }
}
