//! MongoDB-backed plant store.

use crate::constants::ID_FIELD;
use crate::plant::Plant;
use crate::query::PlantQuery;
use crate::store::PlantStore;
use crate::{PlantError, PlantResult};
use futures::TryStreamExt;
use mongodb::bson::{doc, Bson, Document};
use mongodb::{Client, Collection};
use serde_json::{Map, Value};

/// Plant store over a MongoDB collection.
///
/// The underlying client pools connections, so clones share one pool.
#[derive(Clone)]
pub struct MongoPlantStore {
    collection: Collection<Document>,
}

impl MongoPlantStore {
    pub fn new(collection: Collection<Document>) -> Self {
        Self { collection }
    }

    /// Connect to `uri` and verify the deployment answers a ping.
    ///
    /// # Errors
    /// Returns `PlantError::Store` if the URI is invalid or the server cannot be reached.
    pub async fn connect(uri: &str, database: &str, collection: &str) -> PlantResult<Self> {
        let client = Client::with_uri_str(uri).await?;
        client.database(database).run_command(doc! { "ping": 1 }).await?;
        tracing::info!("connected to MongoDB collection {}.{}", database, collection);

        Ok(Self::new(client.database(database).collection(collection)))
    }

    fn projection() -> Document {
        doc! { ID_FIELD: 0 }
    }
}

fn decode(document: Document) -> PlantResult<Plant> {
    let value = Bson::Document(document).into_relaxed_extjson();
    let map: Map<String, Value> = serde_json::from_value(value).map_err(PlantError::Decode)?;
    Ok(Plant::from_document(map))
}

#[async_trait::async_trait]
impl PlantStore for MongoPlantStore {
    async fn find_one(&self, query: &PlantQuery) -> PlantResult<Option<Plant>> {
        let filter = query.to_filter();
        tracing::debug!(?filter, "find_one");

        self.collection
            .find_one(filter)
            .projection(Self::projection())
            .await?
            .map(decode)
            .transpose()
    }

    async fn find_many(&self, query: &PlantQuery) -> PlantResult<Vec<Plant>> {
        let filter = query.to_filter();
        tracing::debug!(?filter, "find");

        let documents: Vec<Document> = self
            .collection
            .find(filter)
            .projection(Self::projection())
            .await?
            .try_collect()
            .await?;

        documents.into_iter().map(decode).collect()
    }
}
