//! Roster scan benchmarks for skirmish_core.
//!
//! Run with: `cargo bench -p skirmish_core`

// Benchmark binaries don't need docs on macro-generated functions
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use skirmish_core::prelude::*;

fn packed_roster(side: Side, count: i32) -> Roster {
    let units = (0..count)
        .map(|i| {
            let pos = GridPos::new(i % MAP_SIZE, (i / MAP_SIZE) % MAP_SIZE)
                .unwrap_or(GridPos::ORIGIN);
            Unit::new(format!("{side} {i}"), UnitKind::Tank, pos)
        })
        .collect();
    Roster::new(side, units)
}

/// Runs roster scan benchmarks for the skirmish_core crate.
pub fn roster_benchmark(c: &mut Criterion) {
    let player = packed_roster(Side::Player, 100);
    let enemy = packed_roster(Side::Enemy, 100);

    c.bench_function("check_victory_100v100", |b| {
        b.iter(|| black_box(check_victory(black_box(&player), black_box(&enemy))));
    });

    c.bench_function("in_range_scan_100", |b| {
        let attacker = Unit::new("Delta", UnitKind::AirSupport, GridPos::ORIGIN);
        b.iter(|| {
            black_box(
                enemy
                    .units()
                    .iter()
                    .filter(|target| attacker.in_range_of(target))
                    .count(),
            )
        });
    });
}

criterion_group!(benches, roster_benchmark);
criterion_main!(benches);
