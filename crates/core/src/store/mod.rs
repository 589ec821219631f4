//! Plant document stores.
//!
//! Handlers only ever see the [`PlantStore`] trait. The MongoDB store is the production backend;
//! the in-memory store serves JSON seed files and tests.

pub mod memory;
pub mod mongo;

pub use memory::MemoryPlantStore;
pub use mongo::MongoPlantStore;

use crate::plant::Plant;
use crate::query::PlantQuery;
use crate::PlantResult;

/// Read-only access to a collection of plant documents.
///
/// Returned plants never carry the internal identifier field.
#[async_trait::async_trait]
pub trait PlantStore: Send + Sync {
    /// Return the first document matching `query`, if any.
    async fn find_one(&self, query: &PlantQuery) -> PlantResult<Option<Plant>>;

    /// Return every document matching `query`, each at most once.
    async fn find_many(&self, query: &PlantQuery) -> PlantResult<Vec<Plant>>;

    async fn find_all(&self) -> PlantResult<Vec<Plant>> {
        self.find_many(&PlantQuery::All).await
    }
}
