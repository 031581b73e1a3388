// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Serializable view models, one per screen.

use std::collections::HashSet;

use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::{
    Action, CommunityMember, ConsumptionData, Event, Rank, RankProgress, Reward, User,
};
use crate::services::{leaderboard, ImpactSummary};
use crate::store::{
    ChecklistProgress, ProgressionStore, StoreSnapshot, EVENT_ATTENDANCE_POINTS,
};

/// Output of one session command, tagged by screen.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum View {
    Survey(SurveyView),
    Home(HomeView),
    Checklist(ChecklistView),
    Leaderboard(LeaderboardView),
    Rewards(RewardsView),
    Events(EventsView),
    Impact(ImpactView),
    Profile(ProfileView),
    Snapshot(StoreSnapshot),
    Help(HelpView),
}

// ─── Onboarding ──────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SurveyQuestion {
    pub id: String,
    pub question: String,
    /// Accepted answers
    pub options: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SurveyView {
    pub questions: Vec<SurveyQuestion>,
}

impl SurveyView {
    pub fn new() -> Self {
        let question = |id: &str, question: &str, options: &[&str]| SurveyQuestion {
            id: id.to_string(),
            question: question.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
        };

        Self {
            questions: vec![
                question(
                    "residents",
                    "How many people live in your home?",
                    &["1", "2", "3", "4", "5"],
                ),
                question(
                    "home_type",
                    "What type of home do you have?",
                    &["house", "apartment"],
                ),
                question("has_garden", "Do you have a garden?", &["yes", "no"]),
                question("has_pool", "Do you have a pool?", &["yes", "no"]),
            ],
        }
    }
}

impl Default for SurveyView {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Main ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct HomeView {
    pub name: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub points: i64,
    pub level: u32,
    pub rank: Rank,
    pub streak: u32,
    pub is_pro: bool,
}

impl HomeView {
    pub fn build(store: &ProgressionStore) -> Self {
        let user = store.user();
        Self {
            name: user.name.clone(),
            points: user.points,
            level: user.level,
            rank: user.rank,
            streak: user.streak,
            is_pro: user.is_pro,
        }
    }
}

// ─── Checklist ───────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ChecklistView {
    pub actions: Vec<Action>,
    pub progress: ChecklistProgress,
    /// 2 for pro users, otherwise 1
    pub multiplier: u32,
}

impl ChecklistView {
    pub fn build(store: &ProgressionStore) -> Self {
        Self {
            actions: store.actions().to_vec(),
            progress: store.checklist_progress(),
            multiplier: if store.user().is_pro { 2 } else { 1 },
        }
    }
}

// ─── Leaderboard ─────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LeaderboardView {
    pub rank: Rank,
    /// 1-based position of the current user
    pub position: usize,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub points: i64,
    pub members: Vec<CommunityMember>,
}

impl LeaderboardView {
    pub fn build(store: &ProgressionStore) -> Self {
        let members = store.current_leaderboard();
        let position = leaderboard::position(&members).unwrap_or(0);

        Self {
            rank: store.user().rank,
            position,
            points: store.user().points,
            members,
        }
    }
}

// ─── Rewards ─────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RewardEntry {
    #[serde(flatten)]
    pub reward: Reward,
    pub affordable: bool,
    pub redeemed: bool,
}

#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RewardsView {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub points: i64,
    pub rewards: Vec<RewardEntry>,
}

impl RewardsView {
    pub fn build(store: &ProgressionStore, redeemed: &HashSet<String>) -> Self {
        let points = store.user().points;
        let rewards = store
            .catalog()
            .rewards
            .iter()
            .map(|reward| RewardEntry {
                affordable: points >= reward.points_cost,
                redeemed: redeemed.contains(&reward.id),
                reward: reward.clone(),
            })
            .collect();

        Self { points, rewards }
    }
}

// ─── Events ──────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct EventEntry {
    #[serde(flatten)]
    pub event: Event,
    pub attended: bool,
}

#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct EventsView {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub points_per_event: i64,
    pub events: Vec<EventEntry>,
}

impl EventsView {
    pub fn build(store: &ProgressionStore, attended: &HashSet<String>) -> Self {
        let events = store
            .catalog()
            .events
            .iter()
            .map(|event| EventEntry {
                attended: attended.contains(&event.id),
                event: event.clone(),
            })
            .collect();

        Self {
            points_per_event: EVENT_ATTENDANCE_POINTS,
            events,
        }
    }
}

// ─── Impact ──────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ImpactView {
    pub summary: ImpactSummary,
    pub history: Vec<ConsumptionData>,
    pub uploaded_bills: Vec<String>,
}

impl ImpactView {
    pub fn build(store: &ProgressionStore) -> Self {
        Self {
            summary: store.impact(),
            history: store.catalog().consumption_history.clone(),
            uploaded_bills: store.user().uploaded_bills.clone(),
        }
    }
}

// ─── Profile ─────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ProfileView {
    pub user: User,
    pub progress: RankProgress,
}

impl ProfileView {
    pub fn build(store: &ProgressionStore) -> Self {
        Self {
            user: store.user().clone(),
            progress: store.rank_progress(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct HelpView {
    pub commands: Vec<String>,
}
