//! Benchmarks for the Rankr scoring engine and round lifecycle.
//!
//! The scoring step is the only super-constant work in the game: it walks
//! every submission once and sorts N indices. These benchmarks track how
//! `finalize` scales with player count and how much a whole round costs end
//! to end.
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//!
//! # Run specific benchmark
//! cargo bench -- finalize
//! ```
//!
//! Results are saved to `target/criterion/` with HTML reports.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use rankr::{GameConfig, RankingSubmission, RoundLedger, ScoringEngine, Vault};

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// ============================================================================
// HELPER FUNCTIONS - Deterministic submission generation
// ============================================================================

/// Generate deterministic submissions: `count` players, each a seeded random
/// permutation of `0..num_items`.
fn generate_submissions(count: usize, num_items: u8, seed: u64) -> Vec<RankingSubmission> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let mut order: Vec<u8> = (0..num_items).collect();
            order.shuffle(&mut rng);
            RankingSubmission::new((i + 1) as u64, order)
        })
        .collect()
}

// ============================================================================
// BENCHMARK: finalize scaling with player count
// ============================================================================

fn bench_finalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("finalize");
    let engine = ScoringEngine::new();

    for players in [2usize, 10, 100, 1_000] {
        let submissions = generate_submissions(players, 5, 42);
        let pool = players as u128 * 10_000_000_000_000;

        group.throughput(Throughput::Elements(players as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(players),
            &submissions,
            |b, subs| {
                b.iter(|| engine.finalize(black_box(5), black_box(subs), black_box(pool)));
            },
        );
    }

    group.finish();
}

// ============================================================================
// BENCHMARK: item count sensitivity
// ============================================================================

fn bench_finalize_item_counts(c: &mut Criterion) {
    let mut group = c.benchmark_group("finalize_items");
    let engine = ScoringEngine::new();

    for num_items in [3u8, 5, 10, 32] {
        let submissions = generate_submissions(100, num_items, 42);
        let pool = 100u128 * 10_000_000_000_000;

        group.bench_with_input(
            BenchmarkId::from_parameter(num_items),
            &submissions,
            |b, subs| {
                b.iter(|| {
                    engine.finalize(black_box(num_items as usize), black_box(subs), black_box(pool))
                });
            },
        );
    }

    group.finish();
}

// ============================================================================
// BENCHMARK: whole round end to end
// ============================================================================

fn bench_full_round(c: &mut Criterion) {
    let fee: u128 = 10_000_000_000_000;
    let config = GameConfig::new(3, 2, fee).unwrap();

    c.bench_function("full_round", |b| {
        b.iter(|| {
            let mut game = RoundLedger::new(config);
            let mut vault = Vault::new();
            vault.fund(1, fee);
            vault.fund(2, fee);

            game.add_item("A1", "T1", "u1", 9, 0).unwrap();
            game.add_item("A2", "T2", "u2", 9, 1).unwrap();
            game.add_item("A3", "T3", "u3", 9, 2).unwrap();
            game.submit_ranking(&mut vault, &[0, 1, 2], fee, 1, 3).unwrap();
            let receipt = game
                .submit_ranking(&mut vault, &[1, 0, 2], fee, 2, 4)
                .unwrap();
            black_box(receipt)
        });
    });
}

criterion_group!(benches, bench_finalize, bench_finalize_item_counts, bench_full_round);
criterion_main!(benches);
