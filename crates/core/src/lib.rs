//! # Plant Core
//!
//! Core data operations for the plant lookup API.
//!
//! This crate contains:
//! - The plant document model
//! - Query construction for name lookups and condition searches
//! - Read-only plant stores (MongoDB and in-memory)
//! - Startup configuration
//!
//! **No API concerns**: authentication and HTTP servers belong in `api-rest` and `api-shared`.

pub mod config;
pub mod constants;
pub mod error;
pub mod plant;
pub mod query;
pub mod service;
pub mod store;

pub use config::{CoreConfig, StoreSource};
pub use error::{PlantError, PlantResult};
pub use plant::Plant;
pub use query::PlantQuery;
pub use service::PlantService;
pub use store::{MemoryPlantStore, MongoPlantStore, PlantStore};

use std::sync::Arc;

/// Open the store described by `source`.
///
/// # Errors
/// Returns an error if the MongoDB deployment cannot be reached or the data file cannot be
/// loaded.
pub async fn open_store(source: &StoreSource) -> PlantResult<Arc<dyn PlantStore>> {
    match source {
        StoreSource::Mongo {
            uri,
            database,
            collection,
        } => Ok(Arc::new(
            MongoPlantStore::connect(uri, database, collection).await?,
        )),
        StoreSource::DataFile(path) => Ok(Arc::new(MemoryPlantStore::from_json_file(path)?)),
    }
}
