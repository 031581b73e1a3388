// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dripy terminal session
//!
//! Reads one command per line from stdin and writes one JSON view per line
//! to stdout. Logs go to stderr.

use dripy::{
    config::{Config, LogFormat},
    error::AppError,
    screens::Session,
    services::Catalog,
    ProgressionStore,
};
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

fn main() -> anyhow::Result<()> {
    // Load configuration from environment
    let config = Config::from_env()?;
    init_logging(config.log_format)?;
    tracing::info!(?config, "Starting Dripy session");

    // Load reference data
    let catalog = match &config.catalog_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading catalog");
            Catalog::load_from_file(path)?
        }
        None => Catalog::builtin()?,
    };

    let mut store = ProgressionStore::new(Arc::new(catalog), &config);
    store.subscribe(|snapshot| {
        tracing::debug!(
            points = snapshot.user.points,
            level = snapshot.user.level,
            rank = %snapshot.user.rank,
            "State changed"
        );
    });

    let mut session = Session::new(store);
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let output = match session.handle_line(&line) {
            Ok(Some(view)) => serde_json::to_string(&view)?,
            Ok(None) => break,
            Err(err) => render_error(&err)?,
        };
        writeln!(stdout, "{output}")?;
        stdout.flush()?;
    }

    tracing::info!(
        points = session.store().user().points,
        "Session ended"
    );
    Ok(())
}

fn render_error(err: &AppError) -> serde_json::Result<String> {
    tracing::warn!(error = %err, "Command rejected");
    serde_json::to_string(&err.to_response())
}

/// Initialize structured logging on stderr.
fn init_logging(format: LogFormat) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive("dripy=debug".parse()?)
        .add_directive("info".parse()?);

    let fmt_layer = match format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_target(false)
            .with_current_span(true)
            .flatten_event(true)
            .with_writer(io::stderr)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_writer(io::stderr)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
    Ok(())
}
