//! Integration tests: space building, encoding, retrieval and persistence together.

use std::collections::BTreeSet;
use std::io::Write;

use phonetic_similarity::config::ExperimentConfig;
use phonetic_similarity::experiment;
use phonetic_similarity::{
    EncoderOptions, ModelStore, SharedSpace, SimilarityIndex, SpaceConfig, SymbolSpace,
    SymbolSpaceBuilder, TokenEncoder,
};

fn build(seed: u64) -> SymbolSpace {
    SymbolSpaceBuilder::new(SpaceConfig {
        seed: Some(seed),
        ..Default::default()
    })
    .build()
    .unwrap()
}

fn vocabulary(tokens: &[&str]) -> BTreeSet<String> {
    tokens.iter().map(|t| t.to_string()).collect()
}

#[test]
fn test_rhyming_words_rank_above_unrelated() {
    let words = vocabulary(&["cat", "bat", "mat", "dog"]);

    for seed in 0..8 {
        let space = build(seed);
        let encoder = TokenEncoder::new(&space, EncoderOptions::default()).unwrap();
        let index = SimilarityIndex::from_vectors(encoder.encode_vocabulary(&words));
        let neighbours = index.nearest_neighbors(4);

        for token in &words {
            let list = &neighbours[token];
            assert_eq!(&list[0].token, token, "seed {}: {} should be its own top neighbour", seed, token);
            assert_eq!(list[0].similarity, 1.0);
        }

        let cat: Vec<&str> = neighbours["cat"].iter().map(|n| n.token.as_str()).collect();
        let dog_rank = cat.iter().position(|&t| t == "dog").unwrap();
        assert_eq!(dog_rank, 3, "seed {}: dog should rank last for cat, got {:?}", seed, cat);
    }
}

#[test]
fn test_suffix_stripping_example() {
    let space = build(1);
    let encoder = TokenEncoder::new(&space, EncoderOptions::default()).unwrap();
    assert_eq!(encoder.strip_suffix("coding"), "cod");
    assert_eq!(encoder.encode("coding"), encoder.encode("cod"));
}

#[test]
fn test_run_and_running_differ() {
    let space = SymbolSpaceBuilder::new(SpaceConfig::with_dimensions(50, 10))
        .build()
        .unwrap();
    let encoder = TokenEncoder::new(&space, EncoderOptions::default()).unwrap();

    // "running" strips to "runn", not "run"
    assert_eq!(encoder.strip_suffix("running"), "runn");
    let vectors = encoder.encode_vocabulary(&vocabulary(&["run", "running"]));
    assert_eq!(vectors["run"].len(), 50);
    assert_ne!(vectors["run"], vectors["running"]);
    assert_eq!(vectors["running"], encoder.encode("runn"));
}

#[test]
fn test_persistence_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.json");
    let space = build(7);

    ModelStore::save(&path, &space).unwrap();
    let loaded = ModelStore::load(&path).unwrap();

    assert_eq!(loaded.items(), space.items(), "Item table should survive a round trip");
    assert_eq!(loaded.permutations(), space.permutations(), "Permutation table should survive a round trip");
    assert_eq!(loaded.dimensionality(), space.dimensionality());
    assert!(loaded.is_usable());

    // Loaded space encodes exactly like the saved one
    let options = EncoderOptions {
        character_presence: true,
        ..Default::default()
    };
    let a = TokenEncoder::new(&space, options.clone()).unwrap().encode("phonetics");
    let b = TokenEncoder::new(&loaded, options).unwrap().encode("phonetics");
    assert_eq!(a, b);
}

#[test]
fn test_corrupt_model_is_reported_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, b"{\"vectors\": {\"a\": [1.0]}").unwrap();

    let err = ModelStore::load(&path).unwrap_err();
    assert!(err.is_persistence_failure());
    let fallback = ModelStore::load_or_empty(&path);
    assert!(!fallback.is_usable(), "Fallback space should be detectably unusable");
    assert!(fallback.items().is_empty());
}

#[test]
fn test_shared_space_reload_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.json");
    let stored = build(2);
    ModelStore::save(&path, &stored).unwrap();

    let shared = SharedSpace::new(build(3));
    let snapshot = shared.current();
    shared.reload(&path).unwrap();

    assert_eq!(*shared.current(), stored);
    assert_eq!(*snapshot, build(3), "Earlier snapshot should be untouched");
}

#[test]
fn test_experiment_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let corpus = dir.path().join("corpus.txt");
    let model = dir.path().join("model.json");
    let mut file = std::fs::File::create(&corpus).unwrap();
    writeln!(file, "The cat sat on the mat.").unwrap();
    writeln!(file, "A bat flew over the dog!").unwrap();

    let mut config = ExperimentConfig {
        corpus_path: Some(corpus.clone()),
        model_path: Some(model.clone()),
        save_model: true,
        neighbours: 3,
        ..Default::default()
    };
    config.space.seed = Some(42);

    let first = experiment::run(&config).unwrap();
    assert!(!first.loaded_model);
    assert!(model.exists(), "Model should be saved after building");
    assert!(first.neighbours.contains_key("cat"));
    assert!(first.neighbours.contains_key("."));
    assert_eq!(first.vocabulary_size, first.neighbours.len());

    // Second run reuses the stored model and reproduces the neighbours
    let second = experiment::run(&config).unwrap();
    assert!(second.loaded_model);
    assert_eq!(first.neighbours, second.neighbours);
}
