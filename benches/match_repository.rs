//! Repository throughput benchmarks.

#![allow(missing_docs)]

use criterion::{Criterion, criterion_group, criterion_main};
use match_tracker::domain::entities::Match;
use match_tracker::domain::value_objects::{MatchEvent, MatchId};
use match_tracker::infrastructure::persistence::MatchRepository;
use match_tracker::infrastructure::persistence::in_memory::InMemoryMatchRepository;
use std::hint::black_box;

fn seeded(count: usize) -> InMemoryMatchRepository {
    let repo = InMemoryMatchRepository::new();
    for i in 0..count {
        repo.create(Match::new(format!("Home {i}"), format!("Away {i}"), "2024-01-01"));
    }
    repo
}

fn bench_repository(c: &mut Criterion) {
    let repo = seeded(1_000);

    c.bench_function("get", |b| {
        b.iter(|| repo.get(black_box(MatchId::new(500))))
    });

    c.bench_function("get_all_1000", |b| b.iter(|| black_box(repo.get_all())));

    c.bench_function("apply_event", |b| {
        b.iter(|| repo.apply_event(black_box(MatchId::new(500)), MatchEvent::Goal))
    });

    c.bench_function("create", |b| {
        let repo = InMemoryMatchRepository::new();
        b.iter(|| repo.create(black_box(Match::new("A", "B", "2024-01-01"))))
    });
}

criterion_group!(benches, bench_repository);
criterion_main!(benches);
