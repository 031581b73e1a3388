// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Line-oriented command parsing.

use std::str::FromStr;

use crate::error::AppError;
use crate::models::{HomeType, SurveyData};

/// Bill reference used when `bill` is given no argument.
pub const SAMPLE_BILL_REFERENCE: &str = "/recibo-agua.png";

/// One user input, mapped to at most one store operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Login,
    Survey(SurveyData),
    Home,
    Checklist,
    Complete(String),
    Leaderboard,
    Rewards,
    Redeem(String),
    Events,
    Attend(String),
    Impact,
    UploadBill(String),
    Profile,
    LevelUp,
    UpgradeToPro,
    AddPoints(i64),
    Snapshot,
    Help,
    Quit,
}

/// Usage lines shown by `help`.
pub const USAGE: &[&str] = &[
    "login",
    "survey <residents> <house|apartment> <garden yes|no> <pool yes|no>",
    "home",
    "checklist",
    "complete <action-id>",
    "leaderboard",
    "rewards",
    "redeem <reward-id>",
    "events",
    "attend <event-id>",
    "impact",
    "bill [reference]",
    "profile",
    "level-up",
    "pro",
    "points <amount>",
    "snapshot",
    "help",
    "quit",
];

impl Command {
    /// Commands accepted before login.
    pub fn allowed_logged_out(&self) -> bool {
        matches!(
            self,
            Command::Login | Command::Help | Command::Quit | Command::Snapshot
        )
    }

    /// Commands accepted between login and survey completion.
    pub fn allowed_before_survey(&self) -> bool {
        self.allowed_logged_out() || matches!(self, Command::Survey(_))
    }
}

impl FromStr for Command {
    type Err = AppError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "login" => Command::Login,
            "survey" => Command::Survey(parse_survey(rest)?),
            "home" | "main" => Command::Home,
            "checklist" | "actions" => Command::Checklist,
            "complete" => Command::Complete(required_id(verb, rest)?),
            "leaderboard" | "trophy" => Command::Leaderboard,
            "rewards" => Command::Rewards,
            "redeem" => Command::Redeem(required_id(verb, rest)?),
            "events" => Command::Events,
            "attend" => Command::Attend(required_id(verb, rest)?),
            "impact" => Command::Impact,
            "bill" => {
                let reference = if rest.is_empty() {
                    SAMPLE_BILL_REFERENCE.to_string()
                } else {
                    rest.to_string()
                };
                Command::UploadBill(reference)
            }
            "profile" => Command::Profile,
            "level-up" | "levelup" => Command::LevelUp,
            "pro" => Command::UpgradeToPro,
            "points" => {
                let amount = rest.parse::<i64>().map_err(|_| {
                    AppError::InvalidCommand(format!("points expects an integer, got {rest:?}"))
                })?;
                Command::AddPoints(amount)
            }
            "snapshot" => Command::Snapshot,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            "" => return Err(AppError::InvalidCommand("empty input".to_string())),
            other => return Err(AppError::InvalidCommand(format!("unknown command {other:?}"))),
        };

        Ok(command)
    }
}

fn required_id(verb: &str, rest: &str) -> Result<String, AppError> {
    match rest.split_whitespace().next() {
        Some(id) => Ok(id.to_string()),
        None => Err(AppError::InvalidCommand(format!("{verb} expects an id"))),
    }
}

fn parse_survey(rest: &str) -> Result<SurveyData, AppError> {
    let parts: Vec<&str> = rest.split_whitespace().collect();
    let [residents, home_type, garden, pool] = parts.as_slice() else {
        return Err(AppError::InvalidCommand(
            "survey expects 4 answers: residents home-type garden pool".to_string(),
        ));
    };

    let residents = residents
        .parse::<u32>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| {
            AppError::InvalidCommand(format!(
                "residents must be a positive number, got {residents:?}"
            ))
        })?;

    let home_type = match home_type.to_ascii_lowercase().as_str() {
        "house" | "casa" => HomeType::House,
        "apartment" | "departamento" => HomeType::Apartment,
        other => {
            return Err(AppError::InvalidCommand(format!(
                "home type must be house or apartment, got {other:?}"
            )))
        }
    };

    Ok(SurveyData {
        residents,
        home_type,
        has_garden: parse_yes_no(garden)?,
        has_pool: parse_yes_no(pool)?,
    })
}

fn parse_yes_no(value: &str) -> Result<bool, AppError> {
    match value.to_ascii_lowercase().as_str() {
        "yes" | "y" | "si" | "true" => Ok(true),
        "no" | "n" | "false" => Ok(false),
        other => Err(AppError::InvalidCommand(format!(
            "expected yes or no, got {other:?}"
        ))),
    }
}
