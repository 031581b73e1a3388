// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Catalog file smoke tests.
//!
//! The builtin catalog is compiled in from data/catalog.json; these tests load
//! the same file from disk and check the shape the screens rely on.

use dripy::models::{Rank, RewardCategory};
use dripy::services::Catalog;
use std::collections::HashSet;

fn load_test_catalog() -> Catalog {
    Catalog::load_from_file("data/catalog.json")
        .expect("Failed to load catalog - is data/ committed?")
}

#[test]
fn test_file_matches_builtin() {
    let from_file = load_test_catalog();
    let builtin = Catalog::builtin().expect("builtin catalog");

    assert_eq!(from_file.actions, builtin.actions);
    assert_eq!(from_file.rewards, builtin.rewards);
    assert_eq!(from_file.rosters, builtin.rosters);
}

#[test]
fn test_seed_profile() {
    let catalog = load_test_catalog();
    assert_eq!(catalog.seed.name, "Usuario");
    assert_eq!(catalog.seed.points, 1150);
    assert_eq!(catalog.seed.streak, 7);
    assert_eq!(catalog.seed.water_saved, 2340);
}

#[test]
fn test_reward_categories_by_cost() {
    let catalog = load_test_catalog();

    for reward in &catalog.rewards {
        match reward.category {
            RewardCategory::Discount => assert!(reward.points_cost <= 600, "{}", reward.id),
            RewardCategory::Subscription => {
                assert!((700..=1000).contains(&reward.points_cost), "{}", reward.id)
            }
            RewardCategory::Full => assert!(reward.points_cost >= 2000, "{}", reward.id),
        }
    }
}

#[test]
fn test_only_silver_roster_has_current_user() {
    let catalog = load_test_catalog();

    for rank in Rank::ALL {
        let marked = catalog
            .roster(rank)
            .iter()
            .filter(|m| m.is_current_user)
            .count();
        let expected = usize::from(rank == Rank::Silver);
        assert_eq!(marked, expected, "current-user entries in {rank}");
    }
}

#[test]
fn test_roster_points_fall_in_tier() {
    let catalog = load_test_catalog();

    for rank in Rank::ALL {
        for member in catalog.roster(rank) {
            assert_eq!(
                Rank::for_points(member.points),
                rank,
                "{} has {} points",
                member.name,
                member.points
            );
        }
    }
}

#[test]
fn test_history_is_decreasing() {
    let catalog = load_test_catalog();
    let history = &catalog.consumption_history;

    assert_eq!(history.len(), 6);
    assert!(history.windows(2).all(|w| w[0].water > w[1].water));
    assert!(history
        .windows(2)
        .all(|w| w[0].electricity > w[1].electricity));
}

#[test]
fn test_event_ids_unique() {
    let catalog = load_test_catalog();
    let mut seen = HashSet::new();
    for event in &catalog.events {
        assert!(seen.insert(event.id.as_str()), "Duplicate event id: {}", event.id);
    }
}
