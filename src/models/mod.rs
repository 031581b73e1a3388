// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod catalog;
pub mod rank;
pub mod user;

pub use catalog::{
    Action, CommunityMember, ConsumptionData, Event, Reward, RewardCategory, Rosters,
};
pub use rank::{level_for_points, Rank, RankProgress};
pub use user::{HomeType, SeedProfile, SurveyData, User};
