//! # phonetic-similarity - random-indexing vectors for word-forms
//!
//! Builds distributed representations of word-forms from their characters
//! and retrieves phonetically similar forms by cosine similarity:
//!
//! - **Symbol space** - every symbol is a random index vector plus the
//!   vectors of its articulatory classes (nasal, labial, front, ...), so
//!   symbols sharing features are close in the space
//! - **Sequence binding** - permutations encode order inside n-grams and
//!   vowel sequences
//! - **Token encoding** - character presence, n-grams and vowel sequence,
//!   each independently switchable
//! - **Retrieval** - brute-force cosine nearest neighbours
//!
//! ## Module layout
//!
//! - [`random`] - index vectors and permutations
//! - [`vector`] - vector arithmetic and [`Permutation`]
//! - [`space`] - item/permutation tables and their builder
//! - [`sequence`] - permutation and additive binding
//! - [`encoder`] - composite token vectors
//! - [`similarity`] - neighbour ranking
//! - [`store`] - model persistence and atomic reload
//! - [`corpus`] - vocabulary extraction from text
//! - [`experiment`] - end-to-end run
//!
//! ## Example
//!
//! ```rust
//! use phonetic_similarity::{EncoderOptions, SimilarityIndex, SpaceConfig, SymbolSpaceBuilder, TokenEncoder};
//!
//! let space = SymbolSpaceBuilder::new(SpaceConfig::default()).build().unwrap();
//! let encoder = TokenEncoder::new(&space, EncoderOptions::default()).unwrap();
//! let vocabulary = vec!["cat".to_string(), "bat".to_string(), "dog".to_string()];
//! let index = SimilarityIndex::from_vectors(encoder.encode_vocabulary(&vocabulary));
//! let neighbours = index.neighbors_of("cat", 2).unwrap();
//! assert_eq!(neighbours[0].token, "cat");
//! ```

// ============================================================================
// Module declarations
// ============================================================================

pub mod config;
pub mod corpus;
pub mod encoder;
pub mod error;
pub mod experiment;
pub mod logging;
pub mod random;
pub mod sequence;
pub mod similarity;
pub mod space;
pub mod store;
pub mod types;
pub mod vector;

// ============================================================================
// Re-exports
// ============================================================================

pub use types::*;

pub use config::ExperimentConfig;
pub use encoder::{EncoderOptions, TokenEncoder};
pub use error::{PhoneticError, Result};
pub use experiment::ExperimentReport;
pub use random::RandomIndexer;
pub use sequence::SequenceEncoder;
pub use similarity::{nearest_neighbors, SimilarityIndex};
pub use space::{ItemTable, PermutationTable, SpaceConfig, SymbolSpace, SymbolSpaceBuilder};
pub use store::{ModelStore, SharedSpace};
pub use vector::Permutation;
