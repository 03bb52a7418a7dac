//! Benchmark suite for phonetic-similarity
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use phonetic_similarity::{
    EncoderOptions, SimilarityIndex, SpaceConfig, SymbolSpaceBuilder, TokenEncoder,
};

fn seeded_config() -> SpaceConfig {
    SpaceConfig {
        seed: Some(42),
        ..Default::default()
    }
}

fn synthetic_vocabulary(size: usize) -> Vec<String> {
    let onsets = ["b", "c", "d", "fl", "gr", "k", "m", "p", "st", "tr"];
    let nuclei = ["a", "e", "i", "o", "u", "ä", "ö"];
    let codas = ["", "t", "n", "ng", "ck", "ll", "ss", "ing", "ed"];
    (0..size)
        .map(|i| {
            format!(
                "{}{}{}{}",
                onsets[i % onsets.len()],
                nuclei[(i / onsets.len()) % nuclei.len()],
                codas[(i / (onsets.len() * nuclei.len())) % codas.len()],
                i / 630
            )
        })
        .collect()
}

fn bench_build_space(c: &mut Criterion) {
    let builder = SymbolSpaceBuilder::new(seeded_config());
    c.bench_function("build_symbol_space_200", |b| {
        b.iter(|| black_box(builder.build().unwrap()))
    });
}

fn bench_encode_token(c: &mut Criterion) {
    let space = SymbolSpaceBuilder::new(seeded_config()).build().unwrap();
    let options = EncoderOptions {
        character_presence: true,
        ..Default::default()
    };
    let encoder = TokenEncoder::new(&space, options).unwrap();

    c.bench_function("encode_token", |b| {
        b.iter(|| black_box(encoder.encode(black_box("phonetically"))))
    });
}

fn bench_nearest_neighbors(c: &mut Criterion) {
    let space = SymbolSpaceBuilder::new(seeded_config()).build().unwrap();
    let encoder = TokenEncoder::new(&space, EncoderOptions::default()).unwrap();
    let mut group = c.benchmark_group("nearest_neighbors");

    for size in [100, 500, 1000] {
        let vocabulary = synthetic_vocabulary(size);
        let index = SimilarityIndex::from_vectors(encoder.encode_vocabulary(&vocabulary));

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(index.nearest_neighbors(10)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_build_space,
    bench_encode_token,
    bench_nearest_neighbors
);
criterion_main!(benches);
