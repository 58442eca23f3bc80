//! apivault -- typed catalog and test harness for external API endpoints.
//!
//! This crate provides the core library for the endpoint catalog, the
//! query/filter engine, the live/simulated invocation harness, and the
//! bounded invocation history.

pub mod api;
pub mod catalog;
pub mod config;
pub mod filter;
pub mod harness;
pub mod history;

use std::path::Path;

use anyhow::Result;

/// Build the catalog from built-ins plus any descriptor files named in the
/// config, using upload validation for each file.
pub fn build_catalog(config: &config::Config) -> Result<catalog::Catalog> {
    let catalog = catalog::Catalog::new();
    for file in &config.descriptor_files {
        let raw = std::fs::read_to_string(file)?;
        match catalog::upload::parse(&raw) {
            Ok(candidates) => {
                let outcome = catalog.merge(candidates);
                tracing::info!(
                    file = %file.display(),
                    accepted = outcome.accepted,
                    discarded = outcome.discarded,
                    "merged descriptor file"
                );
            }
            Err(e) => {
                tracing::warn!(file = %file.display(), error = %e, "skipping descriptor file");
            }
        }
    }
    Ok(catalog)
}

/// Start the apivault daemon: catalog, invoker, and API server.
pub async fn serve(bind: &str, config_path: &Path) -> Result<()> {
    let config = config::load(config_path)?;
    tracing::info!(mode = ?config.mode, "Initializing catalog");

    let catalog = build_catalog(&config)?;
    let invoker = harness::build_invoker(&config)?;
    let state = api::state::AppState {
        catalog,
        history: history::History::new(),
        invoker,
    };
    let app = api::router(state);

    let addr: std::net::SocketAddr = bind.parse()?;
    tracing::info!(%addr, "apivault listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
