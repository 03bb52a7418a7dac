use std::path::PathBuf;

use crate::encoder::EncoderOptions;
use crate::space::SpaceConfig;
use crate::types::DEFAULT_NEIGHBOURS;

const DEFAULT_LOG_DIR: &str = "./logs";

/// Parameters of one experiment run
#[derive(Debug, Clone)]
pub struct ExperimentConfig {
    pub corpus_path: Option<PathBuf>,
    /// Load the symbol space from here when it holds a usable model
    pub model_path: Option<PathBuf>,
    /// Write the symbol space to `model_path` after building it
    pub save_model: bool,
    pub neighbours: usize,
    pub space: SpaceConfig,
    pub encoder: EncoderOptions,
    pub log_level: String,
    /// Directory for the daily rolling log file; `None` logs to stderr only
    pub log_dir: Option<PathBuf>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            corpus_path: None,
            model_path: None,
            save_model: false,
            neighbours: DEFAULT_NEIGHBOURS,
            space: SpaceConfig::default(),
            encoder: EncoderOptions::default(),
            log_level: "info".to_string(),
            log_dir: None,
        }
    }
}

impl ExperimentConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let space = SpaceConfig {
            dimensionality: env_parse("DIMENSIONALITY").unwrap_or(defaults.space.dimensionality),
            sparsity: env_parse("SPARSITY").unwrap_or(defaults.space.sparsity),
            seed: env_parse("SEED"),
            ..defaults.space
        };

        let encoder = EncoderOptions {
            character_presence: env_bool("TEST_CHARACTER_PRESENCE")
                .unwrap_or(defaults.encoder.character_presence),
            vowel_sequence: env_bool("TEST_VOWEL_SEQUENCE")
                .unwrap_or(defaults.encoder.vowel_sequence),
            ngrams: env_bool("TEST_NGRAMS").unwrap_or(defaults.encoder.ngrams),
            positional_decay_rate: env_parse("TEST_DESCENT")
                .unwrap_or(defaults.encoder.positional_decay_rate),
            suffix_stripping: env_bool("TEST_SKIP_SUFFIXES")
                .unwrap_or(defaults.encoder.suffix_stripping),
            skippable_suffixes: env_string("SKIPPABLE_SUFFIXES")
                .map(|value| parse_list(&value))
                .unwrap_or(defaults.encoder.skippable_suffixes),
            ..defaults.encoder
        };

        Self {
            corpus_path: env_string("CORPUS_PATH").map(PathBuf::from),
            model_path: env_string("MODEL_PATH").map(PathBuf::from),
            save_model: env_bool("SAVE_MODEL").unwrap_or(false),
            neighbours: env_parse("NEIGHBOURS").unwrap_or(defaults.neighbours),
            space,
            encoder,
            log_level: env_string("RUST_LOG").unwrap_or(defaults.log_level),
            log_dir: log_dir(
                env_bool("ENABLE_FILE_LOGS").unwrap_or(false),
                env_string("LOG_DIR"),
            ),
        }
    }

    /// Encoder options with the vowel set taken from the symbol space
    pub fn encoder_options(&self) -> EncoderOptions {
        EncoderOptions {
            vowels: self.space.vowels.clone(),
            ..self.encoder.clone()
        }
    }
}

fn log_dir(enabled: bool, dir: Option<String>) -> Option<PathBuf> {
    enabled.then(|| PathBuf::from(dir.unwrap_or_else(|| DEFAULT_LOG_DIR.to_string())))
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env_string(key).and_then(|value| value.parse::<T>().ok())
}

fn env_bool(key: &str) -> Option<bool> {
    env_string(key).and_then(|value| parse_bool(&value))
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
