//! `nim_core::ai::random` の性能計測（1手選択）。

use core::hint::black_box;
use criterion::BatchSize;
use criterion::BenchmarkId;
use criterion::Criterion;
use nim_core::ai::types::Ai as _;
use nim_core::engine::game::Game as _;
use nim_core::{ai, engine};

/// `cargo bench` の引数を取り込みつつ `Criterion` を生成する。
fn criterion_configured() -> Criterion {
    let base = Criterion::default();
    base.configure_from_args()
}

/// ベンチ用に山の大きさが異なる局面をいくつか用意する。
fn game_samples() -> Vec<engine::Nim> {
    [&[3_u32, 4, 5][..], &[7, 11, 13], &[20, 20, 20, 20]]
        .into_iter()
        .filter_map(|heaps| engine::Nim::from_counts(heaps).ok())
        .collect()
}

/// `random::Agent::select_move` を計測する。
fn bench_select_move(criterion: &mut Criterion) {
    let samples = game_samples();
    let mut group = criterion.benchmark_group("ai/random/select_move");

    for (index, game) in samples.iter().enumerate() {
        let bench_id = BenchmarkId::new("heaps", index);
        group.bench_with_input(bench_id, game, |bench, input| {
            bench.iter_batched(
                || ai::random::Agent::new(u64::MIN),
                |mut agent| black_box(agent.select_move(input, input.initial())),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// ベンチマークのエントリーポイント。
fn main() {
    let mut criterion = criterion_configured();
    bench_select_move(&mut criterion);
    criterion.final_summary();
}
