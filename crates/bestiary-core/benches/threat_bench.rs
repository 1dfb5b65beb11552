//! # Threat Benchmarks
//!
//! Performance benchmarks for bestiary-core analytics.
//!
//! Run with: `cargo bench -p bestiary-core`

use bestiary_core::{
    MonsterCollection, calculate_threat_levels, extract_monster_names, organize_by_threat_level,
};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use serde_json::{Value, json};
use std::hint::black_box;

/// Build a collection with `size` monsters spread over four rosters.
fn create_collection(size: usize) -> MonsterCollection {
    let mut map = serde_json::Map::new();
    for tier in ["easy", "medium", "hard", "boss"] {
        map.insert(tier.to_string(), Value::Array(Vec::new()));
    }
    map.insert("version".to_string(), json!("bench"));

    for i in 0..size {
        let tier = ["easy", "medium", "hard", "boss"][i % 4];
        if let Some(Value::Array(roster)) = map.get_mut(tier) {
            roster.push(json!({
                "name": format!("monster-{i}"),
                "health": (i % 700) as u64,
                "damage": (i % 150) as u64,
            }));
        }
    }

    MonsterCollection::from_map(map)
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_calculate(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculate_threat_levels");

    for size in [100, 1000, 10000].iter() {
        let monsters = create_collection(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &monsters, |b, m| {
            b.iter(|| black_box(calculate_threat_levels(m)));
        });
    }

    group.finish();
}

fn bench_names(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_monster_names");

    for size in [100, 1000, 10000].iter() {
        let monsters = create_collection(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &monsters, |b, m| {
            b.iter(|| black_box(extract_monster_names(m)));
        });
    }

    group.finish();
}

fn bench_organize(c: &mut Criterion) {
    let mut group = c.benchmark_group("organize_by_threat_level");

    for size in [100, 1000, 10000].iter() {
        let monsters = create_collection(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &monsters, |b, m| {
            b.iter(|| black_box(organize_by_threat_level(m)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_calculate, bench_names, bench_organize);
criterion_main!(benches);
