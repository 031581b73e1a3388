//! User profile and onboarding survey.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::rank::{level_for_points, Rank};

/// The player's gamification profile.
///
/// `level` and `rank` are always derived from `points`; the store keeps them in
/// sync on every mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct User {
    /// Display name
    pub name: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub points: i64,
    pub level: u32,
    /// Consecutive days with activity
    pub streak: u32,
    pub rank: Rank,
    /// Liters of water saved, never decreases
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub water_saved: i64,
    pub is_pro: bool,
    /// Opaque references to uploaded bills, oldest first
    pub uploaded_bills: Vec<String>,
}

impl User {
    /// Build the initial profile from seed values.
    pub fn from_seed(seed: &SeedProfile) -> Self {
        Self {
            name: seed.name.clone(),
            points: seed.points,
            level: level_for_points(seed.points),
            streak: seed.streak,
            rank: Rank::for_points(seed.points),
            water_saved: seed.water_saved.max(0),
            is_pro: false,
            uploaded_bills: Vec::new(),
        }
    }

    /// Set points and re-derive level and rank.
    pub(crate) fn set_points(&mut self, points: i64) {
        self.points = points;
        self.level = level_for_points(points);
        self.rank = Rank::for_points(points);
    }
}

/// Initial values for the user profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedProfile {
    pub name: String,
    pub points: i64,
    #[serde(default)]
    pub streak: u32,
    #[serde(default)]
    pub water_saved: i64,
}

impl Default for SeedProfile {
    fn default() -> Self {
        Self {
            name: "Usuario".to_string(),
            points: 0,
            streak: 0,
            water_saved: 0,
        }
    }
}

/// Kind of dwelling reported in the survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum HomeType {
    House,
    Apartment,
}

/// Onboarding survey answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SurveyData {
    /// People living in the home (5 means "5 or more")
    pub residents: u32,
    pub home_type: HomeType,
    pub has_garden: bool,
    pub has_pool: bool,
}
