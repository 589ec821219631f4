//! Process startup shared by the API binaries.
//!
//! Environment variables are read here, once, and turned into a [`Settings`] value. Nothing
//! below the router reads the environment.

use crate::{router, AppState};
use plant_core::config::store_source_from_env_values;
use plant_core::CoreConfig;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Port used when neither `PORT` nor `PLANT_REST_ADDR` is set.
pub const DEFAULT_PORT: u16 = 5000;

/// Everything needed to start serving.
#[derive(Debug)]
pub struct Settings {
    pub cfg: Arc<CoreConfig>,
    pub addr: String,
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` is honoured; `default_directives` (e.g. `"plant=info"`) are always added.
///
/// # Errors
/// Returns an error if a default directive is not a valid filter directive.
pub fn init_tracing(default_directives: &[&str]) -> anyhow::Result<()> {
    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    for directive in default_directives {
        filter = filter.add_directive(directive.parse()?);
    }

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    Ok(())
}

/// Resolve the REST listen address.
///
/// An explicit address takes precedence; otherwise the server binds `0.0.0.0` on `port`,
/// defaulting to 5000.
///
/// # Errors
/// Returns an error if `port` is not a valid port number.
pub fn rest_addr_from_env_values(
    addr: Option<String>,
    port: Option<String>,
) -> anyhow::Result<String> {
    let non_blank = |v: Option<String>| v.map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    if let Some(addr) = non_blank(addr) {
        return Ok(addr);
    }

    let port = match non_blank(port) {
        Some(p) => p
            .parse::<u16>()
            .map_err(|_| anyhow::anyhow!("PORT is not a valid port: {p}"))?,
        None => DEFAULT_PORT,
    };

    Ok(format!("0.0.0.0:{port}"))
}

/// Read settings from the process environment.
///
/// # Environment Variables
/// - `API_KEY`: shared secret expected in the `x-api-key` header (required)
/// - `MONGO_URI`: MongoDB connection string
/// - `PLANT_DB_NAME`: database name (default: "plantDB")
/// - `PLANT_COLLECTION`: collection name (default: "plants")
/// - `PLANT_DATA_FILE`: JSON seed file, used when `MONGO_URI` is unset
/// - `PORT`: listen port on 0.0.0.0 (default: 5000)
/// - `PLANT_REST_ADDR`: full listen address, overrides `PORT`
///
/// # Errors
/// Returns an error if the API key or store source is missing, or the port is invalid.
pub fn settings_from_env() -> anyhow::Result<Settings> {
    let api_key = std::env::var("API_KEY").unwrap_or_default();
    let store_source = store_source_from_env_values(
        std::env::var("MONGO_URI").ok(),
        std::env::var("PLANT_DATA_FILE").ok(),
        std::env::var("PLANT_DB_NAME").ok(),
        std::env::var("PLANT_COLLECTION").ok(),
    )?;
    let cfg = Arc::new(CoreConfig::new(api_key, store_source)?);

    let addr = rest_addr_from_env_values(
        std::env::var("PLANT_REST_ADDR").ok(),
        std::env::var("PORT").ok(),
    )?;

    Ok(Settings { cfg, addr })
}

/// Open the plant store and serve the REST API until the process is stopped.
///
/// # Errors
/// Returns an error if the store cannot be opened, the address cannot be bound, or the server
/// fails while running.
pub async fn serve(settings: Settings) -> anyhow::Result<()> {
    let store = plant_core::open_store(settings.cfg.store_source()).await?;
    let app = router(AppState::new(settings.cfg, store));

    tracing::info!("++ Starting plant REST API on {}", settings.addr);

    let listener = tokio::net::TcpListener::bind(&settings.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rest_addr_defaults_to_port_5000() {
        assert_eq!(rest_addr_from_env_values(None, None).unwrap(), "0.0.0.0:5000");
    }

    #[test]
    fn rest_addr_uses_port() {
        assert_eq!(
            rest_addr_from_env_values(None, Some("8080".into())).unwrap(),
            "0.0.0.0:8080"
        );
    }

    #[test]
    fn rest_addr_override_wins() {
        assert_eq!(
            rest_addr_from_env_values(Some("127.0.0.1:9000".into()), Some("8080".into())).unwrap(),
            "127.0.0.1:9000"
        );
    }

    #[test]
    fn invalid_port_is_rejected() {
        assert!(rest_addr_from_env_values(None, Some("http".into())).is_err());
    }
}
