//! In-memory plant store.
//!
//! Evaluates queries with [`PlantQuery::matches`], giving the same results as the MongoDB
//! filters. Used for JSON seed files and tests.

use crate::plant::Plant;
use crate::query::PlantQuery;
use crate::store::PlantStore;
use crate::{PlantError, PlantResult};
use serde_json::{Map, Value};
use std::path::Path;
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct MemoryPlantStore {
    plants: Arc<Vec<Plant>>,
}

impl MemoryPlantStore {
    pub fn new(plants: Vec<Plant>) -> Self {
        Self {
            plants: Arc::new(plants),
        }
    }

    /// Load plants from a JSON file holding an array of plant documents.
    ///
    /// Any `_id` attribute present in the file is discarded.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a JSON array of objects.
    pub fn from_json_file(path: &Path) -> PlantResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(PlantError::DataFileRead)?;
        let documents: Vec<Map<String, Value>> =
            serde_json::from_str(&contents).map_err(PlantError::DataFileParse)?;

        let plants: Vec<Plant> = documents.into_iter().map(Plant::from_document).collect();

        tracing::info!("loaded {} plants from {}", plants.len(), path.display());
        Ok(Self::new(plants))
    }
}

#[async_trait::async_trait]
impl PlantStore for MemoryPlantStore {
    async fn find_one(&self, query: &PlantQuery) -> PlantResult<Option<Plant>> {
        Ok(self.plants.iter().find(|p| query.matches(p)).cloned())
    }

    async fn find_many(&self, query: &PlantQuery) -> PlantResult<Vec<Plant>> {
        Ok(self
            .plants
            .iter()
            .filter(|p| query.matches(p))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    fn plant(value: Value) -> Plant {
        match value {
            Value::Object(map) => Plant::from_document(map),
            other => panic!("expected object, got {other}"),
        }
    }

    #[tokio::test]
    async fn loads_seed_file_and_strips_identifiers() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"_id": 1, "common_name": "Lavender", "medicinal_uses": ["anxiety"]}},
                {{"_id": 2, "common_name": "Sage", "search_tags": null}}
            ]"#
        )
        .unwrap();

        let store = MemoryPlantStore::from_json_file(file.path()).unwrap();
        let plants = store.find_all().await.unwrap();
        assert_eq!(
            serde_json::to_value(&plants).unwrap(),
            json!([
                {"common_name": "Lavender", "medicinal_uses": ["anxiety"]},
                {"common_name": "Sage", "search_tags": null}
            ])
        );
    }

    #[test]
    fn non_array_seed_file_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"common_name": "Lavender"}}"#).unwrap();

        assert!(matches!(
            MemoryPlantStore::from_json_file(file.path()),
            Err(PlantError::DataFileParse(_))
        ));
    }

    #[test]
    fn missing_seed_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            MemoryPlantStore::from_json_file(&dir.path().join("absent.json")),
            Err(PlantError::DataFileRead(_))
        ));
    }

    #[tokio::test]
    async fn find_one_returns_first_match() {
        let store = MemoryPlantStore::new(vec![
            plant(json!({"common_name": "Basil", "botanical_name": "Ocimum basilicum"})),
            plant(json!({"common_name": "Holy Basil", "botanical_name": "Ocimum tenuiflorum"})),
        ]);

        let found = store
            .find_one(&PlantQuery::by_name("ocimum tenuiflorum"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.text("common_name"), Some("Holy Basil"));
        assert!(store
            .find_one(&PlantQuery::by_name("basi"))
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn find_all_returns_everything() {
        let store = MemoryPlantStore::new(vec![Plant::default(), Plant::default()]);
        assert_eq!(store.find_all().await.unwrap().len(), 2);
    }
}
