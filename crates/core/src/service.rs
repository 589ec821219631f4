//! Plant lookup operations.
//!
//! Pure data operations over a [`PlantStore`]; authentication and HTTP concerns live in the API
//! crates.

use crate::plant::Plant;
use crate::query::PlantQuery;
use crate::store::PlantStore;
use crate::{PlantError, PlantResult};
use std::sync::Arc;

#[derive(Clone)]
pub struct PlantService {
    store: Arc<dyn PlantStore>,
}

impl PlantService {
    pub fn new(store: Arc<dyn PlantStore>) -> Self {
        Self { store }
    }

    /// Lists every plant in the collection.
    pub async fn list_plants(&self) -> PlantResult<Vec<Plant>> {
        self.store.find_all().await
    }

    /// Fetches the first plant whose common or botanical name equals `name`, ignoring case.
    ///
    /// # Errors
    /// Returns `PlantError::NotFound` if no plant matches.
    pub async fn plant_by_name(&self, name: &str) -> PlantResult<Plant> {
        self.store
            .find_one(&PlantQuery::by_name(name))
            .await?
            .ok_or(PlantError::NotFound)
    }

    /// Searches plants by a comma-separated list of conditions.
    ///
    /// A plant is returned if any term is a case-insensitive substring of any of its medicinal
    /// uses or search tags.
    ///
    /// # Errors
    /// Returns `PlantError::InvalidInput` if `raw_condition` is empty or contains no terms.
    pub async fn search_by_condition(&self, raw_condition: &str) -> PlantResult<Vec<Plant>> {
        let query = PlantQuery::by_conditions(raw_condition)?;
        let plants = self.store.find_many(&query).await?;
        tracing::debug!(?query, matches = plants.len(), "condition search");
        Ok(plants)
    }
}
