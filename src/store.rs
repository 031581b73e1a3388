// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Progression store: the single source of truth for a player's session.
//!
//! All operations are synchronous and take `&mut self`, so every derived
//! field (level, rank, water saved) is consistent by the time a call returns.
//! Unknown ids, repeated completions and unaffordable redemptions are silent
//! no-ops rather than errors.
//!
//! Subscribers registered with [`ProgressionStore::subscribe`] receive a fresh
//! [`StoreSnapshot`] after every operation that changed state.

use std::sync::Arc;

use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::config::Config;
use crate::models::{Action, CommunityMember, RankProgress, SurveyData, User};
use crate::services::leaderboard;
use crate::services::{Catalog, ImpactSummary};

/// Points awarded for uploading a bill.
pub const BILL_UPLOAD_POINTS: i64 = 150;
/// Points awarded for attending any event.
pub const EVENT_ATTENDANCE_POINTS: i64 = 50;
/// Points granted by a simulated level-up (doubled for pro users).
pub const LEVEL_UP_POINTS: i64 = 500;
/// Liters of water credited per point awarded.
pub const WATER_LITERS_PER_POINT: i64 = 2;

/// Observable state after an operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct StoreSnapshot {
    pub is_logged_in: bool,
    pub survey_completed: bool,
    pub survey: Option<SurveyData>,
    pub user: User,
    pub actions: Vec<Action>,
    pub leaderboard: Vec<CommunityMember>,
}

/// Completed / total actions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ChecklistProgress {
    pub completed: usize,
    pub total: usize,
    pub percent: f64,
}

/// Handle returned by [`ProgressionStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&StoreSnapshot)>;

/// Gamification state for one session.
pub struct ProgressionStore {
    catalog: Arc<Catalog>,
    is_logged_in: bool,
    survey_completed: bool,
    survey: Option<SurveyData>,
    user: User,
    actions: Vec<Action>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl std::fmt::Debug for ProgressionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressionStore")
            .field("is_logged_in", &self.is_logged_in)
            .field("survey_completed", &self.survey_completed)
            .field("user", &self.user)
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}

impl ProgressionStore {
    /// Create a logged-out store seeded from the catalog.
    pub fn new(catalog: Arc<Catalog>, config: &Config) -> Self {
        let mut user = User::from_seed(&catalog.seed);
        if let Some(name) = &config.user_name {
            user.name = name.clone();
        }
        let actions = catalog.actions.clone();

        tracing::debug!(
            points = user.points,
            rank = %user.rank,
            actions = actions.len(),
            "Progression store initialized"
        );

        Self {
            catalog,
            is_logged_in: false,
            survey_completed: false,
            survey: None,
            user,
            actions,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    // ─── Reads ───────────────────────────────────────────────────

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn is_logged_in(&self) -> bool {
        self.is_logged_in
    }

    pub fn survey_completed(&self) -> bool {
        self.survey_completed
    }

    pub fn survey(&self) -> Option<&SurveyData> {
        self.survey.as_ref()
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Roster for the user's current rank with the user merged in, sorted by
    /// points descending. Recomputed on every call.
    pub fn current_leaderboard(&self) -> Vec<CommunityMember> {
        leaderboard::project(self.catalog.roster(self.user.rank), &self.user)
    }

    /// 1-based position of the user in [`Self::current_leaderboard`].
    pub fn leaderboard_position(&self) -> usize {
        leaderboard::position(&self.current_leaderboard()).unwrap_or(0)
    }

    pub fn rank_progress(&self) -> RankProgress {
        RankProgress::for_points(self.user.points)
    }

    pub fn checklist_progress(&self) -> ChecklistProgress {
        let completed = self.actions.iter().filter(|a| a.completed).count();
        let total = self.actions.len();
        let percent = if total == 0 {
            0.0
        } else {
            completed as f64 / total as f64 * 100.0
        };
        ChecklistProgress {
            completed,
            total,
            percent,
        }
    }

    pub fn impact(&self) -> ImpactSummary {
        ImpactSummary::compute(&self.catalog.consumption_history, self.user.water_saved)
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            is_logged_in: self.is_logged_in,
            survey_completed: self.survey_completed,
            survey: self.survey.clone(),
            user: self.user.clone(),
            actions: self.actions.clone(),
            leaderboard: self.current_leaderboard(),
        }
    }

    // ─── Subscriptions ───────────────────────────────────────────

    /// Register a callback invoked with the new snapshot after each change.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&StoreSnapshot) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    fn notify(&mut self) {
        if self.subscribers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for (_, callback) in &mut self.subscribers {
            callback(&snapshot);
        }
    }

    // ─── Operations ──────────────────────────────────────────────

    pub fn login(&mut self) {
        self.is_logged_in = true;
        tracing::info!("User logged in");
        self.notify();
    }

    /// Store survey answers, replacing any earlier ones.
    pub fn complete_survey(&mut self, data: SurveyData) {
        tracing::info!(
            residents = data.residents,
            home_type = ?data.home_type,
            has_garden = data.has_garden,
            has_pool = data.has_pool,
            "Survey completed"
        );
        self.survey = Some(data);
        self.survey_completed = true;
        self.notify();
    }

    /// Complete an action and award its points (doubled for pro users).
    ///
    /// Returns `true` if the action was completed by this call.
    pub fn complete_action(&mut self, id: &str) -> bool {
        let is_pro = self.user.is_pro;
        let Some(action) = self
            .actions
            .iter_mut()
            .find(|a| a.id == id && !a.completed)
        else {
            tracing::debug!(action_id = id, "Action unknown or already completed");
            return false;
        };

        action.completed = true;
        let award = if is_pro {
            action.points * 2
        } else {
            action.points
        };
        tracing::info!(action_id = id, award, "Action completed");

        self.apply_points(award);
        self.notify();
        true
    }

    /// Add (or, with a negative amount, remove) points.
    pub fn add_points(&mut self, amount: i64) {
        self.apply_points(amount);
        self.notify();
    }

    pub fn simulate_level_up(&mut self) {
        let amount = if self.user.is_pro {
            LEVEL_UP_POINTS * 2
        } else {
            LEVEL_UP_POINTS
        };
        self.add_points(amount);
    }

    pub fn upgrade_to_pro(&mut self) {
        if !self.user.is_pro {
            tracing::info!("Upgraded to pro");
        }
        self.user.is_pro = true;
        self.notify();
    }

    /// Record an uploaded bill and award the fixed upload bonus.
    ///
    /// The reference is stored as-is and never interpreted.
    pub fn upload_bill(&mut self, reference: impl Into<String>) {
        self.user.uploaded_bills.push(reference.into());
        tracing::info!(bills = self.user.uploaded_bills.len(), "Bill uploaded");
        self.apply_points(BILL_UPLOAD_POINTS);
        self.notify();
    }

    /// Award the flat attendance bonus.
    ///
    /// The id is recorded in the log only. Every id, catalog event or not, is
    /// worth the same; rejecting unknown events is up to the caller.
    pub fn attend_event(&mut self, event_id: &str) {
        tracing::info!(event_id, "Event attended");
        self.add_points(EVENT_ATTENDANCE_POINTS);
    }

    /// Spend points on a reward if the user can afford it.
    ///
    /// Level and rank are re-derived from the reduced total; water saved is
    /// left untouched. Returns `true` if points were deducted.
    pub fn redeem_reward(&mut self, reward_id: &str) -> bool {
        let Some(cost) = self.catalog.reward(reward_id).map(|r| r.points_cost) else {
            tracing::debug!(reward_id, "Unknown reward");
            return false;
        };
        if self.user.points < cost {
            tracing::debug!(
                reward_id,
                cost,
                points = self.user.points,
                "Insufficient points for reward"
            );
            return false;
        }

        let previous = self.user.rank;
        self.user.set_points(self.user.points - cost);
        tracing::info!(
            reward_id,
            cost,
            points = self.user.points,
            "Reward redeemed"
        );
        if previous != self.user.rank {
            tracing::info!(from = %previous, to = %self.user.rank, "Rank changed");
        }
        self.notify();
        true
    }

    /// Single state transition for every point award.
    fn apply_points(&mut self, amount: i64) {
        let previous = self.user.rank;
        self.user.set_points(self.user.points.saturating_add(amount));
        self.user.water_saved = self
            .user
            .water_saved
            .saturating_add(amount.max(0).saturating_mul(WATER_LITERS_PER_POINT));

        tracing::debug!(
            amount,
            points = self.user.points,
            level = self.user.level,
            "Points applied"
        );
        if previous != self.user.rank {
            tracing::info!(from = %previous, to = %self.user.rank, "Rank changed");
        }
    }
}
