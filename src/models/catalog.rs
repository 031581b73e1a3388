// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Reference data records: actions, rewards, events, consumption history and
//! community members.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::rank::Rank;

/// A daily water-saving action, completable once per session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Action {
    pub id: String,
    pub title: String,
    /// Base reward before the pro multiplier
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub points: i64,
    #[serde(default)]
    pub completed: bool,
}

/// Reward catalog grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum RewardCategory {
    /// Store discounts
    Discount,
    /// One month of a subscription
    Subscription,
    /// Multi-month premium packages
    Full,
}

/// A redeemable partner reward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Reward {
    pub id: String,
    pub brand: String,
    pub title: String,
    pub description: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub points_cost: i64,
    pub category: RewardCategory,
    /// Single-letter logo
    pub logo: String,
    /// Brand color class
    pub color: String,
}

/// A community event near the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub distance_km: f64,
    /// Image URL
    pub image: String,
    pub is_paid_promotion: bool,
}

/// One month of household consumption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ConsumptionData {
    pub month: String,
    /// Liters
    pub water: f64,
    /// kWh
    pub electricity: f64,
}

/// A leaderboard entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CommunityMember {
    pub id: u32,
    pub name: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub points: i64,
    pub rank: Rank,
    /// Avatar initial
    pub avatar: String,
    /// Marks the entry standing in for the local player
    #[serde(default)]
    pub is_current_user: bool,
}

/// Static leaderboard rosters, one per rank tier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rosters {
    #[serde(default)]
    pub bronze: Vec<CommunityMember>,
    #[serde(default)]
    pub silver: Vec<CommunityMember>,
    #[serde(default)]
    pub gold: Vec<CommunityMember>,
    #[serde(default)]
    pub diamond: Vec<CommunityMember>,
}

impl Rosters {
    pub fn for_rank(&self, rank: Rank) -> &[CommunityMember] {
        match rank {
            Rank::Bronze => &self.bronze,
            Rank::Silver => &self.silver,
            Rank::Gold => &self.gold,
            Rank::Diamond => &self.diamond,
        }
    }
}
