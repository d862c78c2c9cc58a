//! `cohort-report [QUERY]`: print the student roster as JSON lines.

use std::io::Write;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cohort_service::registry::load_seed_file;
use cohort_service::{Registry, RegistryConfig};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cohort_service=info,cohort_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // --- Configuration ---
    let config = RegistryConfig::from_env().context("Failed to load configuration")?;
    tracing::info!(
        sweep_mode = ?config.sweep_mode,
        seed_path = ?config.seed_path,
        "Loaded registry configuration"
    );

    let registry = Registry::in_memory(config);

    // --- Seed ---
    if let Some(path) = &registry.config().seed_path {
        let drafts = load_seed_file(path)
            .with_context(|| format!("Failed to read seed file {}", path.display()))?;
        registry.seed(drafts).context("Failed to seed records")?;
    }

    // --- Report ---
    let query = std::env::args().nth(1).unwrap_or_default();
    let records = registry.filter_records(&query)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for student in &records {
        serde_json::to_writer(&mut out, &registry.summarize(student))?;
        writeln!(out)?;
    }

    tracing::info!(count = records.len(), "Report written");
    Ok(())
}
