//! Experiment driver: corpus -> symbol space -> token vectors -> neighbours.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, info, warn};

use crate::config::ExperimentConfig;
use crate::corpus::read_vocabulary;
use crate::encoder::TokenEncoder;
use crate::error::{PhoneticError, Result};
use crate::similarity::SimilarityIndex;
use crate::space::{SymbolSpace, SymbolSpaceBuilder};
use crate::store::ModelStore;
use crate::types::NeighborList;

/// Outcome of one run
#[derive(Clone, Debug)]
pub struct ExperimentReport {
    pub vocabulary_size: usize,
    pub dimensionality: usize,
    /// Whether the symbol space came from a stored model
    pub loaded_model: bool,
    pub neighbours: BTreeMap<String, NeighborList>,
}

impl ExperimentReport {
    /// `token \t neighbour \t similarity` lines
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.neighbours.iter().flat_map(|(token, list)| {
            list.iter()
                .map(move |n| format!("{}\t{}\t{}", token, n.token, n.similarity))
        })
    }
}

/// Load a usable stored model, or build a fresh space
pub fn prepare_space(config: &ExperimentConfig) -> Result<(SymbolSpace, bool)> {
    if let Some(path) = config.model_path.as_ref().filter(|p| p.exists()) {
        let space = ModelStore::load_or_empty(path);
        if space.is_usable() {
            return Ok((space, true));
        }
        warn!(path = %path.display(), "stored model unusable, rebuilding");
    }

    let space = SymbolSpaceBuilder::new(config.space.clone()).build()?;
    if config.save_model {
        if let Some(path) = config.model_path.as_ref() {
            ModelStore::save_logged(path, &space);
        }
    }
    Ok((space, false))
}

/// Encode a vocabulary and rank neighbours within it
pub fn run_on_vocabulary(
    config: &ExperimentConfig,
    space: &SymbolSpace,
    vocabulary: &BTreeSet<String>,
) -> Result<BTreeMap<String, NeighborList>> {
    let encoder = TokenEncoder::new(space, config.encoder_options())?;
    let vectors = encoder.encode_vocabulary(vocabulary);
    let neighbours = SimilarityIndex::from_vectors(vectors).nearest_neighbors(config.neighbours);

    for (token, list) in &neighbours {
        for n in list {
            debug!("{}\t{}\t{}", token, n.token, n.similarity);
        }
    }
    Ok(neighbours)
}

pub fn run(config: &ExperimentConfig) -> Result<ExperimentReport> {
    let corpus_path = config.corpus_path.as_ref().ok_or_else(|| {
        PhoneticError::InvalidParameter("no corpus path configured (CORPUS_PATH)".to_string())
    })?;

    let (space, loaded_model) = prepare_space(config)?;
    let vocabulary = read_vocabulary(corpus_path)?;
    let neighbours = run_on_vocabulary(config, &space, &vocabulary)?;

    info!(
        vocabulary = vocabulary.len(),
        dimensionality = space.dimensionality(),
        loaded_model,
        "experiment finished"
    );

    Ok(ExperimentReport {
        vocabulary_size: vocabulary.len(),
        dimensionality: space.dimensionality(),
        loaded_model,
        neighbours,
    })
}
