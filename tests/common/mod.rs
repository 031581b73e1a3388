// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use dripy::config::Config;
use dripy::models::{HomeType, SurveyData};
use dripy::screens::{Command, Session};
use dripy::services::Catalog;
use dripy::ProgressionStore;
use std::sync::Arc;

/// Load the builtin catalog.
#[allow(dead_code)]
pub fn test_catalog() -> Arc<Catalog> {
    Arc::new(Catalog::builtin().expect("Failed to parse builtin catalog"))
}

/// Create a fresh store seeded from the builtin catalog.
#[allow(dead_code)]
pub fn test_store() -> ProgressionStore {
    ProgressionStore::new(test_catalog(), &Config::default())
}

/// Create a store whose user has exactly `points`.
#[allow(dead_code)]
pub fn store_with_points(points: i64) -> ProgressionStore {
    let mut store = test_store();
    let delta = points - store.user().points;
    store.add_points(delta);
    assert_eq!(store.user().points, points);
    store
}

#[allow(dead_code)]
pub fn sample_survey() -> SurveyData {
    SurveyData {
        residents: 3,
        home_type: HomeType::House,
        has_garden: true,
        has_pool: false,
    }
}

/// Create a session past the login and survey gate.
#[allow(dead_code)]
pub fn onboarded_session() -> Session {
    let mut session = Session::new(test_store());
    session
        .execute(Command::Login)
        .expect("login must be accepted");
    session
        .execute(Command::Survey(sample_survey()))
        .expect("survey must be accepted");
    session
}
