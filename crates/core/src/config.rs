//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the store and API
//! layers. Request handlers never read process-wide environment variables, which keeps them
//! deterministic under multi-threaded runtimes and test harnesses.

use crate::constants::{DEFAULT_COLLECTION_NAME, DEFAULT_DB_NAME};
use crate::{PlantError, PlantResult};
use std::path::PathBuf;

/// Where plant documents are read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreSource {
    /// A MongoDB collection.
    Mongo {
        uri: String,
        database: String,
        collection: String,
    },
    /// A JSON array of plant documents loaded into memory at startup.
    DataFile(PathBuf),
}

/// Core configuration resolved at startup.
#[derive(Clone)]
pub struct CoreConfig {
    api_key: String,
    store_source: StoreSource,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    /// Returns `PlantError::Config` if `api_key` is empty or whitespace.
    pub fn new(api_key: String, store_source: StoreSource) -> PlantResult<Self> {
        if api_key.trim().is_empty() {
            return Err(PlantError::Config("API_KEY cannot be empty".into()));
        }

        Ok(Self {
            api_key,
            store_source,
        })
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn store_source(&self) -> &StoreSource {
        &self.store_source
    }
}

// The secret must never end up in logs via `{:?}`.
impl std::fmt::Debug for CoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoreConfig")
            .field("api_key", &"<redacted>")
            .field("store_source", &self.store_source)
            .finish()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Resolve the store source from optional environment values.
///
/// `MONGO_URI` wins over `PLANT_DATA_FILE` when both are present. Database and collection
/// names fall back to `plantDB` / `plants`.
///
/// # Errors
/// Returns `PlantError::Config` if neither a MongoDB URI nor a data file is given.
pub fn store_source_from_env_values(
    mongo_uri: Option<String>,
    data_file: Option<String>,
    database: Option<String>,
    collection: Option<String>,
) -> PlantResult<StoreSource> {
    if let Some(uri) = non_blank(mongo_uri) {
        return Ok(StoreSource::Mongo {
            uri,
            database: non_blank(database).unwrap_or_else(|| DEFAULT_DB_NAME.into()),
            collection: non_blank(collection).unwrap_or_else(|| DEFAULT_COLLECTION_NAME.into()),
        });
    }

    if let Some(path) = non_blank(data_file) {
        return Ok(StoreSource::DataFile(PathBuf::from(path)));
    }

    Err(PlantError::Config(
        "either MONGO_URI or PLANT_DATA_FILE must be set".into(),
    ))
}
