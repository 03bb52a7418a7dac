//! Token Encoder - composite word-form vectors
//!
//! A token vector is the sum of up to three independent hypotheses about
//! what makes two word-forms sound alike:
//!
//! - **Character presence**: bag of symbol vectors; each symbol is weighted by
//!   `(1 - decay)^n` where n is the number of vowels before it, so weight
//!   tapers roughly per syllable rather than per character.
//! - **N-grams**: every bigram and trigram bound by permutation from the
//!   dummy seed vector.
//! - **Vowel sequence**: the token's vowels additively bound against the
//!   reserved vowel-sequence permutation.
//!
//! A configured suffix (e.g. "ing") can be stripped before any of these run.

use rayon::prelude::*;
use tracing::debug;

use crate::error::{PhoneticError, Result};
use crate::sequence::{char_windows, SequenceEncoder};
use crate::space::SymbolSpace;
use crate::types::{TokenVectors, Vector, DEFAULT_VOWELS};
use crate::vector::{vec_add, vec_add_scaled, zeros};

// ==================== Options ====================

/// Which hypotheses contribute to a token vector
#[derive(Clone, Debug, PartialEq)]
pub struct EncoderOptions {
    /// Bag-of-characters baseline
    pub character_presence: bool,
    /// Vowels weigh more than other symbols
    pub vowel_sequence: bool,
    /// Bigrams and trigrams
    pub ngrams: bool,
    /// Per-vowel taper of character weights; 0 keeps all characters equal
    pub positional_decay_rate: f64,
    /// Drop one skippable suffix before encoding
    pub suffix_stripping: bool,
    /// Checked in order, the first match is removed
    pub skippable_suffixes: Vec<String>,
    /// Symbols counted as vowels; must match the vowels the space was built with
    /// (`ExperimentConfig::encoder_options` copies them over)
    pub vowels: String,
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self {
            character_presence: false,
            vowel_sequence: true,
            ngrams: true,
            positional_decay_rate: 0.3,
            suffix_stripping: true,
            skippable_suffixes: vec!["ing".to_string(), "ed".to_string()],
            vowels: DEFAULT_VOWELS.to_string(),
        }
    }
}

impl EncoderOptions {
    pub fn validate(&self) -> Result<()> {
        if !self.positional_decay_rate.is_finite() || self.positional_decay_rate < 0.0 {
            return Err(PhoneticError::InvalidParameter(format!(
                "positional decay rate {} must be finite and >= 0",
                self.positional_decay_rate
            )));
        }
        Ok(())
    }
}

// ==================== Encoder ====================

pub struct TokenEncoder<'a> {
    space: &'a SymbolSpace,
    options: EncoderOptions,
}

impl<'a> TokenEncoder<'a> {
    pub fn new(space: &'a SymbolSpace, options: EncoderOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { space, options })
    }

    pub fn options(&self) -> &EncoderOptions {
        &self.options
    }

    /// Token with at most one skippable suffix removed
    pub fn strip_suffix<'t>(&self, token: &'t str) -> &'t str {
        if !self.options.suffix_stripping {
            return token;
        }
        self.options
            .skippable_suffixes
            .iter()
            .filter(|suffix| !suffix.is_empty())
            .find_map(|suffix| token.strip_suffix(suffix.as_str()))
            .unwrap_or(token)
    }

    pub fn encode(&self, token: &str) -> Vector {
        let stripped = self.strip_suffix(token);
        let chars: Vec<char> = stripped.chars().collect();
        let sequence = SequenceEncoder::new(self.space);
        let mut vector = zeros(self.space.dimensionality());
        let mut vowels = String::new();

        let retention = 1.0 - self.options.positional_decay_rate;
        for &c in &chars {
            if self.options.character_presence {
                if let Some(item) = self.space.items().symbol(c) {
                    let weight = retention.powi(vowels.chars().count() as i32);
                    vec_add_scaled(&mut vector, item, weight);
                }
            }
            if self.options.vowels.contains(c) {
                vowels.push(c);
            }
        }

        if self.options.ngrams {
            if let Some(seed) = self.space.dummy_vector() {
                for ngram in char_windows(&chars, 2)
                    .into_iter()
                    .chain(char_windows(&chars, 3))
                {
                    let bound = sequence.bind_by_permutation(ngram.iter().copied(), seed);
                    vec_add(&mut vector, &bound);
                }
            }
        }

        if self.options.vowel_sequence {
            if let Some(permutation) = self.space.vowel_sequence_permutation() {
                let bound = sequence.bind_additive(vowels.chars(), permutation);
                vec_add(&mut vector, &bound);
            }
        }

        vector
    }

    /// Encode every token in parallel
    pub fn encode_vocabulary<'v, I>(&self, vocabulary: I) -> TokenVectors
    where
        I: IntoIterator<Item = &'v String>,
    {
        let tokens: Vec<&String> = vocabulary.into_iter().collect();
        debug!(tokens = tokens.len(), "encoding vocabulary");

        tokens
            .par_iter()
            .map(|token| ((*token).clone(), self.encode(token)))
            .collect()
    }
}
