// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Rank tiers, level derivation and progress toward the next tier.

use serde::{Deserialize, Serialize};
use std::fmt;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Points needed per level.
pub const POINTS_PER_LEVEL: i64 = 500;

/// Point-threshold tier used for leaderboard grouping.
///
/// Ordered from lowest to highest so `Rank::Bronze < Rank::Diamond`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum Rank {
    Bronze,
    Silver,
    Gold,
    Diamond,
}

impl Rank {
    pub const ALL: [Rank; 4] = [Rank::Bronze, Rank::Silver, Rank::Gold, Rank::Diamond];

    /// Rank for a point total.
    pub fn for_points(points: i64) -> Self {
        if points >= Rank::Diamond.floor() {
            Rank::Diamond
        } else if points >= Rank::Gold.floor() {
            Rank::Gold
        } else if points >= Rank::Silver.floor() {
            Rank::Silver
        } else {
            Rank::Bronze
        }
    }

    /// Lowest point total belonging to this tier.
    pub fn floor(self) -> i64 {
        match self {
            Rank::Bronze => 0,
            Rank::Silver => 750,
            Rank::Gold => 1500,
            Rank::Diamond => 2500,
        }
    }

    /// The tier above this one, if any.
    pub fn next(self) -> Option<Rank> {
        match self {
            Rank::Bronze => Some(Rank::Silver),
            Rank::Silver => Some(Rank::Gold),
            Rank::Gold => Some(Rank::Diamond),
            Rank::Diamond => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Rank::Bronze => "bronze",
            Rank::Silver => "silver",
            Rank::Gold => "gold",
            Rank::Diamond => "diamond",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Level for a point total: `floor(points / 500) + 1`.
///
/// Negative totals stay at level 1.
pub fn level_for_points(points: i64) -> u32 {
    let completed = points.max(0) / POINTS_PER_LEVEL;
    u32::try_from(completed).unwrap_or(u32::MAX - 1) + 1
}

/// Progress from the current tier's floor toward the next tier.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RankProgress {
    pub rank: Rank,
    pub next: Option<Rank>,
    /// Floor of the current tier
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub floor: i64,
    /// Floor of the next tier (None at diamond)
    #[cfg_attr(feature = "binding-generation", ts(type = "number | null"))]
    pub next_threshold: Option<i64>,
    /// Points still needed to reach the next tier
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub points_to_next: i64,
    /// 0.0 - 100.0
    pub percent: f64,
}

impl RankProgress {
    pub fn for_points(points: i64) -> Self {
        let rank = Rank::for_points(points);
        let floor = rank.floor();

        match rank.next() {
            Some(next) => {
                let ceiling = next.floor();
                let percent = (points - floor) as f64 / (ceiling - floor) as f64 * 100.0;
                Self {
                    rank,
                    next: Some(next),
                    floor,
                    next_threshold: Some(ceiling),
                    points_to_next: ceiling - points,
                    percent: percent.clamp(0.0, 100.0),
                }
            }
            None => Self {
                rank,
                next: None,
                floor,
                next_threshold: None,
                points_to_next: 0,
                percent: 100.0,
            },
        }
    }
}
