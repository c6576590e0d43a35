//! `nim_core::ai::alphabeta` と `minimax` の性能計測（ルート探索）。

use core::hint::black_box;
use criterion::BenchmarkId;
use criterion::Criterion;
use nim_core::ai;
use nim_core::engine;
use nim_core::engine::game::Game as _;

/// 探索対象の山。
const SAMPLES: [&[u32]; 3] = [&[1, 2, 3], &[2, 2, 3], &[3, 4, 5]];

/// ベンチ名に使う山の表記（例: `1-2-3`）。
fn label(heaps: &[u32]) -> String {
    let counts: Vec<String> = heaps.iter().map(u32::to_string).collect();
    counts.join("-")
}

/// `cargo bench` の引数を取り込みつつ `Criterion` を生成する。
fn criterion_configured() -> Criterion {
    let base = Criterion::default();
    base.configure_from_args()
}

/// `alpha_beta_search` を計測する。
fn bench_alpha_beta(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("ai/alphabeta/search");

    for heaps in SAMPLES {
        let Ok(game) = engine::Nim::from_counts(heaps) else {
            continue;
        };
        let bench_id = BenchmarkId::from_parameter(label(heaps));
        group.bench_with_input(bench_id, &game, |bench, input| {
            bench.iter(|| black_box(ai::alphabeta::alpha_beta_search(input, input.initial())));
        });
    }

    group.finish();
}

/// 枝刈りなしの `minimax_decision` を計測する（小さな局面のみ）。
fn bench_minimax(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("ai/minimax/search");

    for heaps in SAMPLES.iter().take(2) {
        let Ok(game) = engine::Nim::from_counts(heaps) else {
            continue;
        };
        let bench_id = BenchmarkId::from_parameter(label(heaps));
        group.bench_with_input(bench_id, &game, |bench, input| {
            bench.iter(|| black_box(ai::minimax::minimax_decision(input, input.initial())));
        });
    }

    group.finish();
}

/// ベンチマークのエントリーポイント。
fn main() {
    let mut criterion = criterion_configured();
    bench_alpha_beta(&mut criterion);
    bench_minimax(&mut criterion);
    criterion.final_summary();
}
