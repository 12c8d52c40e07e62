use serde::Serialize;
use thiserror::Error;

/// Crate-wide result alias; command and query paths return this.
pub type AppResult<T> = Result<T, AppError>;

/// Stable taxonomy of failures surfaced to callers.
///
/// Validation and invariant arms are produced before any state is
/// touched; the storage arms wrap adapter failures and carry the
/// collection they were persisting or loading.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{field} is required")]
    Validation { field: &'static str },
    #[error("unknown species id \"{id}\"")]
    UnknownSpecies { id: String },
    #[error("plant \"{id}\" not found")]
    PlantNotFound { id: String },
    #[error("room \"{id}\" not found")]
    RoomNotFound { id: String },
    #[error("the default room cannot be removed")]
    DefaultRoomUndeletable,
    #[error("room \"{id}\" still holds {plants} plant(s)")]
    RoomOccupied { id: String, plants: usize },
    #[error("failed to persist {collection}")]
    StorageWrite {
        collection: &'static str,
        #[source]
        source: anyhow::Error,
    },
    #[error("failed to load {collection}")]
    StorageRead {
        collection: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    /// Returns the stable machine-readable code string.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "VALIDATION/REQUIRED",
            AppError::UnknownSpecies { .. } => "VALIDATION/UNKNOWN_SPECIES",
            AppError::PlantNotFound { .. } => "PLANT/NOT_FOUND",
            AppError::RoomNotFound { .. } => "ROOM/NOT_FOUND",
            AppError::DefaultRoomUndeletable => "ROOM/DEFAULT_UNDELETABLE",
            AppError::RoomOccupied { .. } => "ROOM/OCCUPIED",
            AppError::StorageWrite { .. } => "STORAGE/WRITE_FAILED",
            AppError::StorageRead { .. } => "STORAGE/READ_FAILED",
        }
    }

    /// Shape handed to presentation hosts for notifications.
    #[must_use]
    pub fn payload(&self) -> ErrorPayload {
        ErrorPayload {
            code: self.code(),
            message: self.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorPayload {
    pub code: &'static str,
    pub message: String,
}
