//! Core engine for a houseplant care tracker: plant and room
//! repositories, append-only check-in and edit logs, and the derived
//! care signals (schedule, status, history feed, issue matching)
//! recomputed from current state on every read.
//!
//! State lives in a [`Nursery`] constructed over a [`StorageHandle`];
//! every mutating command stages its change, writes it through the
//! adapter, and commits in memory only once the write succeeded.

pub mod catalog;
pub mod error;
pub mod history;
pub mod id;
pub mod issues;
pub mod logging;
pub mod model;
pub mod nursery;
pub mod schedule;
pub mod status;
pub mod storage;
pub mod time;

pub use error::{AppError, AppResult, ErrorPayload};
pub use history::HistoryEntry;
pub use model::{
    CareLevel, CheckIn, CheckInAction, CheckInInput, CustomCare, EditRecord, FieldChange,
    HumidityLevel, LeafCondition, LightLevel, Plant, PlantCondition, PlantInput, PlantOrigin,
    PlantSize, PlantStatus, PlantUpdate, Room, RoomInput, RoomTemperature, RoomUpdate,
    SoilMoisture, SoilPreference, WindowDirection,
};
pub use nursery::{Nursery, DEFAULT_ROOM_ID};
pub use storage::{Collection, JsonDirAdapter, MemoryAdapter, StorageAdapter, StorageHandle};
