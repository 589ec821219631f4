//! Plant documents.
//!
//! A plant is the stored document minus its internal identifier. Nothing else is added, removed
//! or coerced: a field that is missing in the store is missing in the response, and a field with
//! an unexpected type is returned as stored. The well-known lookup fields are only read through
//! lenient accessors, so an oddly shaped document simply fails to match a query.

use crate::constants::ID_FIELD;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// A single plant document as exposed by the API.
///
/// Documents usually carry `common_name`, `botanical_name`, `medicinal_uses` and `search_tags`,
/// plus any further attributes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = Object)]
pub struct Plant(Map<String, Value>);

impl Plant {
    /// Build a plant from a raw document, stripping the internal identifier.
    pub fn from_document(mut document: Map<String, Value>) -> Self {
        document.remove(ID_FIELD);
        Self(document)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// The field as a string, or `None` if it is missing or not a string.
    pub fn text(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Value::as_str)
    }

    /// The string elements of an array field. Missing fields, non-arrays and non-string
    /// elements yield nothing.
    pub fn texts<'a>(&'a self, field: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.0
            .get(field)
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(Value::as_str)
    }

    pub fn into_document(self) -> Map<String, Value> {
        self.0
    }
}
