//! Standalone REST API server binary.
//!
//! ## Purpose
//! Runs the REST API server from the `api-rest` crate on its own.
//!
//! ## Intended use
//! Useful during development when working on the REST layer. The workspace's default
//! `plant-run` binary serves the same API.

use api_rest::startup;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    startup::init_tracing(&["api_rest=info", "plant_core=info"])?;

    let settings = startup::settings_from_env()?;
    tracing::info!("-- Starting standalone plant REST API");
    startup::serve(settings).await
}
