//! Depression Screening Pipeline - Main Entry Point
//!
//! Loads the trained SVM once at startup, reads one answers submission
//! (JSON file argument or stdin), and prints the screening report.
//! Single-threaded and synchronous: one submission per invocation.

use std::env;
use std::fs;
use std::io::Read;

use anyhow::{Context, Result};
use depression_screener::{
    config::AppConfig, context::AppContext, render::ReportRenderer, types::answers::UserAnswers,
};
use tracing::{error, info};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("depression_screener=info".parse()?),
        )
        .init();

    info!("Starting depression screening pipeline");

    // Load configuration
    let config = AppConfig::load()?;
    info!("Configuration loaded successfully");

    // Bootstrap the application context; without a model there is no
    // degraded mode, so any failure here ends the process.
    let ctx = match AppContext::bootstrap(config) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!(error = %e, "The model could not be loaded; screening is unavailable");
            return Err(e);
        }
    };

    // Read one submission: a JSON document from the argument path, or
    // from stdin when no path is given.
    let raw = match env::args().nth(1) {
        Some(path) => fs::read_to_string(&path)
            .with_context(|| format!("Failed to read answers from {}", path))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read answers from stdin")?;
            buf
        }
    };

    let answers: UserAnswers =
        serde_json::from_str(&raw).context("Failed to deserialize answers")?;

    // Encode and predict
    let screening = ctx.screen(&answers)?;
    let report = screening.prediction.to_report();

    info!(
        report_id = %report.report_id,
        outcome = ?report.outcome,
        confidence = report.confidence,
        "Screening complete"
    );

    let renderer = ReportRenderer::new(ctx.config().output.show_details);
    print!("{}", renderer.render(&report, &screening.features));

    Ok(())
}
