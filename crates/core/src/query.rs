//! Plant query construction.
//!
//! Every lookup the API performs is described by a [`PlantQuery`]. The same query can be
//! rendered into a MongoDB filter document or evaluated directly against a [`Plant`], so the
//! MongoDB and in-memory stores agree on matching semantics:
//!
//! - name lookups are case-insensitive exact matches on `common_name` or `botanical_name`
//! - condition searches are case-insensitive substring matches on any element of
//!   `medicinal_uses` or `search_tags`, OR-ed across all terms
//!
//! User input is always matched literally; regex metacharacters are escaped before they reach
//! the store.

use crate::constants::{
    BOTANICAL_NAME_FIELD, COMMON_NAME_FIELD, MEDICINAL_USES_FIELD, SEARCH_TAGS_FIELD,
};
use crate::plant::Plant;
use crate::{PlantError, PlantResult};
use mongodb::bson::{doc, Document};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlantQuery {
    /// Every document in the collection.
    All,
    /// Exact, case-insensitive match on common or botanical name.
    ByName(String),
    /// Union of substring matches for each (already normalised) condition term.
    ByConditions(Vec<String>),
}

/// Split a raw `condition` parameter into normalised search terms.
///
/// Terms are separated by commas, trimmed and lowercased; empty terms are discarded.
///
/// # Errors
/// Returns `PlantError::InvalidInput` if `raw` is empty, or if no terms remain after cleaning.
pub fn parse_conditions(raw: &str) -> PlantResult<Vec<String>> {
    if raw.is_empty() {
        return Err(PlantError::InvalidInput(
            "Please provide a condition to search".into(),
        ));
    }

    let terms: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(str::to_lowercase)
        .collect();

    if terms.is_empty() {
        return Err(PlantError::InvalidInput("Invalid search terms".into()));
    }

    Ok(terms)
}

fn regex_condition(pattern: String) -> Document {
    doc! { "$regex": pattern, "$options": "i" }
}

impl PlantQuery {
    /// Build a name lookup. The name is lowercased; matching ignores case anyway.
    pub fn by_name(name: &str) -> Self {
        Self::ByName(name.to_lowercase())
    }

    /// Build a condition search from a raw comma-separated parameter.
    pub fn by_conditions(raw: &str) -> PlantResult<Self> {
        parse_conditions(raw).map(Self::ByConditions)
    }

    /// Render the query as a MongoDB filter document.
    pub fn to_filter(&self) -> Document {
        match self {
            Self::All => Document::new(),
            Self::ByName(name) => {
                let exact = format!("^{}$", regex::escape(name));
                doc! {
                    "$or": [
                        { COMMON_NAME_FIELD: regex_condition(exact.clone()) },
                        { BOTANICAL_NAME_FIELD: regex_condition(exact) },
                    ]
                }
            }
            Self::ByConditions(terms) => {
                let conditions: Vec<Document> = terms
                    .iter()
                    .flat_map(|term| {
                        let pattern = regex::escape(term);
                        [
                            doc! { MEDICINAL_USES_FIELD: { "$elemMatch": regex_condition(pattern.clone()) } },
                            doc! { SEARCH_TAGS_FIELD: { "$elemMatch": regex_condition(pattern) } },
                        ]
                    })
                    .collect();
                doc! { "$or": conditions }
            }
        }
    }

    /// Evaluate the query against a single plant.
    ///
    /// Fields that are missing or have an unexpected type never match.
    pub fn matches(&self, plant: &Plant) -> bool {
        match self {
            Self::All => true,
            Self::ByName(name) => [COMMON_NAME_FIELD, BOTANICAL_NAME_FIELD]
                .iter()
                .filter_map(|field| plant.text(field))
                .any(|value| value.to_lowercase() == *name),
            Self::ByConditions(terms) => terms.iter().any(|term| {
                plant
                    .texts(MEDICINAL_USES_FIELD)
                    .chain(plant.texts(SEARCH_TAGS_FIELD))
                    .any(|value| value.to_lowercase().contains(term.as_str()))
            }),
        }
    }
}
