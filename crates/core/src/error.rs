#[derive(Debug, thiserror::Error)]
pub enum PlantError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("plant not found")]
    NotFound,
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("plant store error: {0}")]
    Store(#[from] mongodb::error::Error),
    #[error("failed to decode plant document: {0}")]
    Decode(serde_json::Error),
    #[error("failed to read plant data file: {0}")]
    DataFileRead(std::io::Error),
    #[error("failed to parse plant data file: {0}")]
    DataFileParse(serde_json::Error),
}

pub type PlantResult<T> = std::result::Result<T, PlantError>;
