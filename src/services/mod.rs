// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - reference data and derived views.

pub mod catalog;
pub mod impact;
pub mod leaderboard;

pub use catalog::{Catalog, CatalogError};
pub use impact::ImpactSummary;
