// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Reference data loading.
//!
//! The catalog is read once at startup and shared read-only for the rest of
//! the session. The builtin catalog is compiled into the binary from
//! `data/catalog.json`; an alternate file with the same schema can be loaded
//! instead.

use crate::models::{
    Action, CommunityMember, ConsumptionData, Event, Rank, Reward, Rosters, SeedProfile,
};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.json");

/// Static reference data for a session.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub seed: SeedProfile,
    pub actions: Vec<Action>,
    pub rewards: Vec<Reward>,
    pub events: Vec<Event>,
    pub consumption_history: Vec<ConsumptionData>,
    pub rosters: Rosters,
}

impl Catalog {
    /// Parse the catalog compiled into the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::load_from_json(BUILTIN_CATALOG)
    }

    /// Load a catalog from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let json_data =
            fs::read_to_string(path.as_ref()).map_err(|e| CatalogError::IoError(e.to_string()))?;
        Self::load_from_json(&json_data)
    }

    /// Load a catalog from a JSON string.
    pub fn load_from_json(json_data: &str) -> Result<Self, CatalogError> {
        let mut catalog: Catalog =
            serde_json::from_str(json_data).map_err(|e| CatalogError::ParseError(e.to_string()))?;

        // Actions always start a session incomplete
        for action in &mut catalog.actions {
            action.completed = false;
        }

        catalog.validate()?;

        tracing::info!(
            actions = catalog.actions.len(),
            rewards = catalog.rewards.len(),
            events = catalog.events.len(),
            history = catalog.consumption_history.len(),
            "Loaded catalog"
        );
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        check_unique_ids("action", self.actions.iter().map(|a| a.id.as_str()))?;
        check_unique_ids("reward", self.rewards.iter().map(|r| r.id.as_str()))?;
        check_unique_ids("event", self.events.iter().map(|e| e.id.as_str()))?;

        if let Some(action) = self.actions.iter().find(|a| a.points <= 0) {
            return Err(CatalogError::Invalid(format!(
                "action {} must award positive points",
                action.id
            )));
        }
        if let Some(reward) = self.rewards.iter().find(|r| r.points_cost <= 0) {
            return Err(CatalogError::Invalid(format!(
                "reward {} must cost positive points",
                reward.id
            )));
        }

        for rank in Rank::ALL {
            let roster = self.rosters.for_rank(rank);
            if let Some(member) = roster.iter().find(|m| m.rank != rank) {
                return Err(CatalogError::Invalid(format!(
                    "member {} listed under {} has rank {}",
                    member.name, rank, member.rank
                )));
            }
        }

        Ok(())
    }

    /// Look up a reward by ID.
    pub fn reward(&self, id: &str) -> Option<&Reward> {
        self.rewards.iter().find(|r| r.id == id)
    }

    /// Look up an event by ID.
    pub fn event(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Static roster for a rank tier.
    pub fn roster(&self, rank: Rank) -> &[CommunityMember] {
        self.rosters.for_rank(rank)
    }
}

fn check_unique_ids<'a>(
    kind: &str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for id in ids {
        if id.is_empty() {
            return Err(CatalogError::Invalid(format!("{kind} with empty id")));
        }
        if !seen.insert(id) {
            return Err(CatalogError::Invalid(format!("duplicate {kind} id: {id}")));
        }
    }
    Ok(())
}

/// Errors from catalog loading.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read file: {0}")]
    IoError(String),

    #[error("Failed to parse catalog JSON: {0}")]
    ParseError(String),

    #[error("Invalid catalog: {0}")]
    Invalid(String),
}
