//! Constants used throughout the plant core crate.

/// Database name used when `PLANT_DB_NAME` is not set.
pub const DEFAULT_DB_NAME: &str = "plantDB";

/// Collection name used when `PLANT_COLLECTION` is not set.
pub const DEFAULT_COLLECTION_NAME: &str = "plants";

/// Internal document identifier, never exposed to API clients.
pub const ID_FIELD: &str = "_id";

pub const COMMON_NAME_FIELD: &str = "common_name";
pub const BOTANICAL_NAME_FIELD: &str = "botanical_name";
pub const MEDICINAL_USES_FIELD: &str = "medicinal_uses";
pub const SEARCH_TAGS_FIELD: &str = "search_tags";

/// Header carrying the shared API secret.
pub const API_KEY_HEADER: &str = "x-api-key";
