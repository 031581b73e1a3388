// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Screen session: the presentation layer over the progression store.
//!
//! Each command maps to at most one store operation followed by a fresh view.
//! The session owns the transient per-screen state the store does not track
//! (events already attended, rewards already redeemed) and enforces the
//! login and onboarding gate.

pub mod command;
pub mod views;

use std::collections::HashSet;

use crate::error::{AppError, Result};
use crate::store::ProgressionStore;

pub use command::{Command, USAGE};
pub use views::View;
use views::{
    ChecklistView, EventsView, HelpView, HomeView, ImpactView, LeaderboardView, ProfileView,
    RewardsView, SurveyView,
};

/// Drives a [`ProgressionStore`] from user commands.
#[derive(Debug)]
pub struct Session {
    store: ProgressionStore,
    attended_events: HashSet<String>,
    redeemed_rewards: HashSet<String>,
}

impl Session {
    pub fn new(store: ProgressionStore) -> Self {
        Self {
            store,
            attended_events: HashSet::new(),
            redeemed_rewards: HashSet::new(),
        }
    }

    pub fn store(&self) -> &ProgressionStore {
        &self.store
    }

    /// Parse and run one input line.
    pub fn handle_line(&mut self, line: &str) -> Result<Option<View>> {
        let command: Command = line.parse()?;
        self.execute(command)
    }

    /// Run one command. Returns `None` when the session should end.
    pub fn execute(&mut self, command: Command) -> Result<Option<View>> {
        if !self.store.is_logged_in() && !command.allowed_logged_out() {
            return Err(AppError::LoginRequired);
        }
        if self.store.is_logged_in()
            && !self.store.survey_completed()
            && !command.allowed_before_survey()
        {
            return Err(AppError::SurveyRequired);
        }

        tracing::debug!(?command, "Executing command");

        let view = match command {
            Command::Quit => return Ok(None),
            Command::Help => View::Help(HelpView {
                commands: USAGE.iter().map(|s| s.to_string()).collect(),
            }),
            Command::Snapshot => View::Snapshot(self.store.snapshot()),
            Command::Login => {
                self.store.login();
                self.landing()
            }
            Command::Survey(data) => {
                self.store.complete_survey(data);
                View::Home(HomeView::build(&self.store))
            }
            Command::Home => View::Home(HomeView::build(&self.store)),
            Command::Checklist => View::Checklist(ChecklistView::build(&self.store)),
            Command::Complete(id) => {
                if !self.store.actions().iter().any(|a| a.id == id) {
                    return Err(AppError::NotFound(format!("action {id}")));
                }
                self.store.complete_action(&id);
                View::Checklist(ChecklistView::build(&self.store))
            }
            Command::Leaderboard => View::Leaderboard(LeaderboardView::build(&self.store)),
            Command::Rewards => self.rewards_view(),
            Command::Redeem(id) => {
                let cost = self
                    .store
                    .catalog()
                    .reward(&id)
                    .map(|r| r.points_cost)
                    .ok_or_else(|| AppError::NotFound(format!("reward {id}")))?;

                if self.redeemed_rewards.contains(&id) {
                    tracing::debug!(reward_id = %id, "Reward already redeemed this session");
                } else if self.store.user().points >= cost && self.store.redeem_reward(&id) {
                    self.redeemed_rewards.insert(id);
                }
                self.rewards_view()
            }
            Command::Events => self.events_view(),
            Command::Attend(id) => {
                if self.store.catalog().event(&id).is_none() {
                    return Err(AppError::NotFound(format!("event {id}")));
                }
                if !self.attended_events.contains(&id) {
                    self.store.attend_event(&id);
                    self.attended_events.insert(id);
                }
                self.events_view()
            }
            Command::Impact => View::Impact(ImpactView::build(&self.store)),
            Command::UploadBill(reference) => {
                self.store.upload_bill(reference);
                View::Impact(ImpactView::build(&self.store))
            }
            Command::Profile => View::Profile(ProfileView::build(&self.store)),
            Command::LevelUp => {
                self.store.simulate_level_up();
                View::Profile(ProfileView::build(&self.store))
            }
            Command::UpgradeToPro => {
                self.store.upgrade_to_pro();
                View::Profile(ProfileView::build(&self.store))
            }
            Command::AddPoints(amount) => {
                self.store.add_points(amount);
                View::Profile(ProfileView::build(&self.store))
            }
        };

        Ok(Some(view))
    }

    /// First screen after login: the survey until it is done, then home.
    fn landing(&self) -> View {
        if self.store.survey_completed() {
            View::Home(HomeView::build(&self.store))
        } else {
            View::Survey(SurveyView::new())
        }
    }

    fn rewards_view(&self) -> View {
        View::Rewards(RewardsView::build(&self.store, &self.redeemed_rewards))
    }

    fn events_view(&self) -> View {
        View::Events(EventsView::build(&self.store, &self.attended_events))
    }
}
