use criterion::{criterion_group, criterion_main, Criterion};
use dripy::config::Config;
use dripy::models::{CommunityMember, Rank, SeedProfile, User};
use dripy::services::{leaderboard, Catalog};
use dripy::ProgressionStore;
use std::hint::black_box;
use std::sync::Arc;

fn benchmark_leaderboard(c: &mut Criterion) {
    let catalog = Catalog::builtin().expect("Failed to parse builtin catalog");
    let store = ProgressionStore::new(Arc::new(catalog), &Config::default());

    // A large synthetic roster to see how the projection scales
    let big_roster: Vec<CommunityMember> = (0..10_000)
        .map(|i| CommunityMember {
            id: i,
            name: format!("Member {i}"),
            points: 1500 + i64::from(i % 1000),
            rank: Rank::Gold,
            avatar: "M".to_string(),
            is_current_user: false,
        })
        .collect();
    let user = User::from_seed(&SeedProfile {
        points: 2000,
        ..SeedProfile::default()
    });

    let mut group = c.benchmark_group("leaderboard_projection");

    group.bench_function("builtin_silver_roster", |b| {
        b.iter(|| black_box(&store).current_leaderboard())
    });

    group.bench_function("synthetic_10k_roster", |b| {
        b.iter(|| leaderboard::project(black_box(&big_roster), black_box(&user)))
    });

    group.finish();
}

criterion_group!(benches, benchmark_leaderboard);
criterion_main!(benches);
