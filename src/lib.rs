// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Dripy: gamified water and energy conservation.
//!
//! This crate provides the in-memory progression store (points, levels,
//! ranks and leaderboard) plus the reference catalogs and screen views
//! built on top of it.

pub mod config;
pub mod error;
pub mod models;
pub mod screens;
pub mod services;
pub mod store;

pub use store::{ProgressionStore, StoreSnapshot, SubscriptionId};
