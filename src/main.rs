use api_rest::startup;

/// Main entry point for the plant lookup API
///
/// Resolves configuration from the environment (after loading `.env`), opens the plant store
/// and serves the REST API until the process is stopped. See
/// [`startup::settings_from_env`] for the environment variables read.
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - configuration is missing or invalid,
/// - the plant store cannot be opened,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    startup::init_tracing(&["plant=info", "api_rest=info"])?;

    let settings = startup::settings_from_env()?;
    startup::serve(settings).await
}
