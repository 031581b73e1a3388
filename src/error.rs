// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent JSON output.

use crate::config::ConfigError;
use crate::services::CatalogError;
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Errors surfaced to the screen session and the binary.
///
/// The progression store itself never fails; these cover gating, input
/// parsing and startup.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Log in first")]
    LoginRequired,

    #[error("Complete the survey first")]
    SurveyRequired,

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// JSON error body
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl AppError {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::LoginRequired => "login_required",
            AppError::SurveyRequired => "survey_required",
            AppError::InvalidCommand(_) => "invalid_command",
            AppError::NotFound(_) => "not_found",
            AppError::Catalog(_) => "catalog_error",
            AppError::Config(_) => "config_error",
            AppError::Internal(_) => "internal_error",
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        let details = match self {
            AppError::LoginRequired | AppError::SurveyRequired => None,
            AppError::InvalidCommand(msg) | AppError::NotFound(msg) => Some(msg.clone()),
            AppError::Catalog(err) => Some(err.to_string()),
            AppError::Config(err) => Some(err.to_string()),
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal error");
                None
            }
        };

        ErrorResponse {
            error: self.code().to_string(),
            details,
        }
    }
}

/// Result type alias for session handlers
pub type Result<T> = std::result::Result<T, AppError>;
