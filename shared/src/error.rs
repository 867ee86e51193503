use thiserror::Error;
use serde_json::Error as JsonError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum SharedError {
    #[error("Data integrity error: variant {variant_id} has best score {best_score} at {num_players} players, above its max score of {max_score}")]
    DataIntegrity {
        variant_id: u32,
        num_players: u8,
        best_score: u32,
        max_score: u32,
    },

    #[error("Missing catalog entry for variant {0}")]
    MissingCatalogEntry(u32),

    #[error("Invalid player count: {0} (expected 2 to 6)")]
    InvalidPlayerCount(u8),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Conversion error: {0}")]
    Conversion(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl SharedError {
    /// Errors that mean the stored data or the catalog cannot be trusted
    pub fn is_integrity_violation(&self) -> bool {
        matches!(
            self,
            SharedError::DataIntegrity { .. } | SharedError::MissingCatalogEntry(_)
        )
    }
}

impl From<JsonError> for SharedError {
    fn from(error: JsonError) -> Self {
        Self::Conversion(error.to_string())
    }
}

impl From<std::io::Error> for SharedError {
    fn from(error: std::io::Error) -> Self {
        Self::Internal(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SharedError>;
