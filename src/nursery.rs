//! The domain façade. Owns the four collections and delegates derived
//! queries to the pure engines. Every command runs as stage, persist,
//! then commit; nothing derived is cached.

use std::collections::HashSet;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::catalog::{self, CommonIssue};
use crate::error::{AppError, AppResult};
use crate::history::{self, HistoryEntry};
use crate::id::new_uuid_v7;
use crate::issues;
use crate::model::{
    CheckIn, CheckInInput, CustomCare, EditRecord, FieldChange, LightLevel, Plant, PlantInput,
    PlantOrigin, PlantStatus, PlantUpdate, Room, RoomInput, RoomTemperature, RoomUpdate,
};
use crate::schedule;
use crate::status;
use crate::storage::{Collection, StorageHandle};
use crate::time::now_ms;

/// Reserved identifier of the room that always exists and can never be
/// removed.
pub const DEFAULT_ROOM_ID: &str = "default-room";

fn default_room() -> Room {
    Room {
        id: DEFAULT_ROOM_ID.to_string(),
        name: "My Room".to_string(),
        light_level: LightLevel::Medium,
        window_direction: None,
        temperature: RoomTemperature::Moderate,
        humidity: None,
        notes: Some("Default room - you can edit this or add more rooms".to_string()),
    }
}

pub struct Nursery {
    plants: Vec<Plant>,
    rooms: Vec<Room>,
    check_ins: Vec<CheckIn>,
    edit_records: Vec<EditRecord>,
    storage: StorageHandle,
}

impl Nursery {
    /// Loads all collections through the adapter, then repairs what it
    /// finds: the default room is seeded if absent, plants pointing at
    /// dead rooms move to the default room, and orphaned check-ins and
    /// edit records are dropped. Repairs are persisted by the next
    /// successful command, not eagerly.
    pub fn load(storage: StorageHandle) -> AppResult<Self> {
        let plants = load_collection(&storage, Collection::Plants)?;
        let rooms = load_collection(&storage, Collection::Rooms)?;
        let check_ins = load_collection(&storage, Collection::CheckIns)?;
        let edit_records = load_collection(&storage, Collection::EditRecords)?;
        let mut nursery = Self {
            plants,
            rooms,
            check_ins,
            edit_records,
            storage,
        };
        nursery.reconcile();
        Ok(nursery)
    }

    /// Empty state over the in-memory adapter. The default room is
    /// present from the start.
    pub fn in_memory() -> Self {
        Self {
            plants: Vec::new(),
            rooms: vec![default_room()],
            check_ins: Vec::new(),
            edit_records: Vec::new(),
            storage: StorageHandle::in_memory(),
        }
    }

    fn reconcile(&mut self) {
        if !self.rooms.iter().any(|room| room.id == DEFAULT_ROOM_ID) {
            info!(target: "plant_nurse", event = "default_room_seeded");
            self.rooms.insert(0, default_room());
        }

        let room_ids: HashSet<&str> = self.rooms.iter().map(|room| room.id.as_str()).collect();
        for plant in &mut self.plants {
            if !room_ids.contains(plant.room_id.as_str()) {
                warn!(
                    target: "plant_nurse",
                    event = "plant_room_repaired",
                    plant_id = %plant.id,
                    room_id = %plant.room_id
                );
                plant.room_id = DEFAULT_ROOM_ID.to_string();
            }
        }

        let plant_ids: HashSet<&str> = self.plants.iter().map(|plant| plant.id.as_str()).collect();
        let before = self.check_ins.len();
        self.check_ins
            .retain(|check_in| plant_ids.contains(check_in.plant_id.as_str()));
        if self.check_ins.len() < before {
            warn!(
                target: "plant_nurse",
                event = "orphan_check_ins_dropped",
                count = before - self.check_ins.len()
            );
        }

        let before = self.edit_records.len();
        self.edit_records
            .retain(|record| plant_ids.contains(record.plant_id.as_str()));
        if self.edit_records.len() < before {
            warn!(
                target: "plant_nurse",
                event = "orphan_edit_records_dropped",
                count = before - self.edit_records.len()
            );
        }
    }

    fn persist<T: Serialize>(&self, collection: Collection, items: &[T]) -> AppResult<()> {
        let payload =
            serde_json::to_string(items).map_err(|source| AppError::StorageWrite {
                collection: collection.key(),
                source: source.into(),
            })?;
        self.storage.write(collection, &payload)
    }

    // --- plants ---

    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    pub fn plant(&self, id: &str) -> AppResult<&Plant> {
        self.plants
            .iter()
            .find(|plant| plant.id == id)
            .ok_or_else(|| AppError::PlantNotFound { id: id.to_string() })
    }

    fn plant_index(&self, id: &str) -> AppResult<usize> {
        self.plants
            .iter()
            .position(|plant| plant.id == id)
            .ok_or_else(|| AppError::PlantNotFound { id: id.to_string() })
    }

    pub fn add_plant(&mut self, input: PlantInput) -> AppResult<Plant> {
        let PlantInput {
            custom_name,
            room_id,
            size,
            condition,
            origin,
            notes,
            photo_url,
        } = input;
        validate_required("customName", &custom_name)?;
        validate_required("roomId", &room_id)?;
        self.room(&room_id)?;

        let (species_id, is_custom, care) = match origin {
            PlantOrigin::Catalog { species_id } => {
                if catalog::find(&species_id).is_none() {
                    return Err(AppError::UnknownSpecies { id: species_id });
                }
                (Some(species_id), false, CustomCare::default())
            }
            PlantOrigin::Custom(care) => (None, true, care),
        };

        let plant = Plant {
            id: new_uuid_v7(),
            species_id,
            is_custom,
            custom_name,
            room_id,
            size,
            condition,
            date_added: now_ms(),
            custom_scientific_name: care.scientific_name,
            custom_check_frequency: care.check_frequency,
            custom_light_level: care.light_level,
            custom_care_notes: care.care_notes,
            custom_leaf_shape: care.leaf_shape,
            custom_leaf_size: care.leaf_size,
            custom_growth_pattern: care.growth_pattern,
            custom_special_features: care.special_features,
            notes,
            photo_url,
        };

        let mut plants = self.plants.clone();
        plants.push(plant.clone());
        self.persist(Collection::Plants, &plants)?;
        self.plants = plants;
        info!(
            target: "plant_nurse",
            event = "plant_added",
            id = %plant.id,
            name = %plant.custom_name
        );
        Ok(plant)
    }

    /// Applies a partial update. When at least one field actually
    /// changes, one edit record holding every diff is appended in the
    /// same command; a no-op update appends nothing.
    pub fn update_plant(&mut self, id: &str, update: PlantUpdate) -> AppResult<Plant> {
        let index = self.plant_index(id)?;
        if let Some(name) = update.custom_name.as_deref() {
            validate_required("customName", name)?;
        }
        if let Some(room_id) = update.room_id.as_deref() {
            validate_required("roomId", room_id)?;
            self.room(room_id)?;
        }

        let before = self.plants[index].clone();
        let mut after = before.clone();
        apply_plant_update(&mut after, update);
        let changes = diff_plants(&before, &after);
        if changes.is_empty() {
            debug!(target: "plant_nurse", event = "plant_update_noop", id = %before.id);
            return Ok(before);
        }
        let change_count = changes.len();
        let record = EditRecord {
            id: new_uuid_v7(),
            plant_id: before.id.clone(),
            date: now_ms(),
            changes,
        };

        let mut plants = self.plants.clone();
        plants[index] = after.clone();
        let mut edit_records = self.edit_records.clone();
        edit_records.push(record);
        self.persist(Collection::Plants, &plants)?;
        self.persist(Collection::EditRecords, &edit_records)?;
        self.plants = plants;
        self.edit_records = edit_records;
        info!(
            target: "plant_nurse",
            event = "plant_updated",
            id = %after.id,
            changes = change_count
        );
        Ok(after)
    }

    /// Removes a plant and every check-in and edit record that
    /// references it, in one command.
    pub fn remove_plant(&mut self, id: &str) -> AppResult<()> {
        let index = self.plant_index(id)?;

        let mut plants = self.plants.clone();
        plants.remove(index);
        let mut check_ins = self.check_ins.clone();
        check_ins.retain(|check_in| check_in.plant_id != id);
        let mut edit_records = self.edit_records.clone();
        edit_records.retain(|record| record.plant_id != id);

        self.persist(Collection::Plants, &plants)?;
        self.persist(Collection::CheckIns, &check_ins)?;
        self.persist(Collection::EditRecords, &edit_records)?;
        self.plants = plants;
        self.check_ins = check_ins;
        self.edit_records = edit_records;
        info!(target: "plant_nurse", event = "plant_removed", id = %id);
        Ok(())
    }

    /// Replaces the canonical plant order. Unknown ids are dropped,
    /// duplicates keep their first occurrence, and plants missing from
    /// the sequence are appended in their current relative order, so
    /// reordering is idempotent and never loses a plant.
    pub fn reorder_plants(&mut self, id_sequence: &[String]) -> AppResult<()> {
        let mut ordered: Vec<Plant> = Vec::with_capacity(self.plants.len());
        let mut seen: HashSet<&str> = HashSet::new();
        for id in id_sequence {
            if seen.contains(id.as_str()) {
                continue;
            }
            if let Some(plant) = self.plants.iter().find(|plant| plant.id == *id) {
                seen.insert(id.as_str());
                ordered.push(plant.clone());
            }
        }
        for plant in &self.plants {
            if !seen.contains(plant.id.as_str()) {
                ordered.push(plant.clone());
            }
        }

        self.persist(Collection::Plants, &ordered)?;
        self.plants = ordered;
        debug!(
            target: "plant_nurse",
            event = "plants_reordered",
            count = self.plants.len()
        );
        Ok(())
    }

    // --- check-ins ---

    pub fn check_ins(&self) -> &[CheckIn] {
        &self.check_ins
    }

    pub fn add_check_in(&mut self, input: CheckInInput) -> AppResult<CheckIn> {
        validate_required("plantId", &input.plant_id)?;
        self.plant(&input.plant_id)?;

        let check_in = CheckIn {
            id: new_uuid_v7(),
            plant_id: input.plant_id,
            date: now_ms(),
            soil_moisture: input.soil_moisture,
            leaf_condition: input.leaf_condition,
            notes: input.notes,
            actions_taken: input.actions_taken,
            photo_url: input.photo_url,
        };

        let mut check_ins = self.check_ins.clone();
        check_ins.push(check_in.clone());
        self.persist(Collection::CheckIns, &check_ins)?;
        self.check_ins = check_ins;
        info!(
            target: "plant_nurse",
            event = "check_in_added",
            plant_id = %check_in.plant_id
        );
        Ok(check_in)
    }

    // --- rooms ---

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn room(&self, id: &str) -> AppResult<&Room> {
        self.rooms
            .iter()
            .find(|room| room.id == id)
            .ok_or_else(|| AppError::RoomNotFound { id: id.to_string() })
    }

    fn room_index(&self, id: &str) -> AppResult<usize> {
        self.rooms
            .iter()
            .position(|room| room.id == id)
            .ok_or_else(|| AppError::RoomNotFound { id: id.to_string() })
    }

    pub fn add_room(&mut self, input: RoomInput) -> AppResult<Room> {
        validate_required("name", &input.name)?;
        let room = Room {
            id: new_uuid_v7(),
            name: input.name,
            light_level: input.light_level,
            window_direction: input.window_direction,
            temperature: input.temperature,
            humidity: input.humidity,
            notes: input.notes,
        };

        let mut rooms = self.rooms.clone();
        rooms.push(room.clone());
        self.persist(Collection::Rooms, &rooms)?;
        self.rooms = rooms;
        info!(target: "plant_nurse", event = "room_added", id = %room.id, name = %room.name);
        Ok(room)
    }

    /// The default room can be edited like any other; only removal is
    /// guarded.
    pub fn update_room(&mut self, id: &str, update: RoomUpdate) -> AppResult<Room> {
        let index = self.room_index(id)?;
        if let Some(name) = update.name.as_deref() {
            validate_required("name", name)?;
        }

        let mut after = self.rooms[index].clone();
        apply_room_update(&mut after, update);

        let mut rooms = self.rooms.clone();
        rooms[index] = after.clone();
        self.persist(Collection::Rooms, &rooms)?;
        self.rooms = rooms;
        info!(target: "plant_nurse", event = "room_updated", id = %after.id);
        Ok(after)
    }

    pub fn remove_room(&mut self, id: &str) -> AppResult<()> {
        let index = self.room_index(id)?;
        if id == DEFAULT_ROOM_ID {
            warn!(
                target: "plant_nurse",
                event = "room_remove_rejected",
                reason = "default",
                id = %id
            );
            return Err(AppError::DefaultRoomUndeletable);
        }
        let occupants = self
            .plants
            .iter()
            .filter(|plant| plant.room_id == id)
            .count();
        if occupants > 0 {
            warn!(
                target: "plant_nurse",
                event = "room_remove_rejected",
                reason = "occupied",
                id = %id,
                plants = occupants
            );
            return Err(AppError::RoomOccupied {
                id: id.to_string(),
                plants: occupants,
            });
        }

        let mut rooms = self.rooms.clone();
        rooms.remove(index);
        self.persist(Collection::Rooms, &rooms)?;
        self.rooms = rooms;
        info!(target: "plant_nurse", event = "room_removed", id = %id);
        Ok(())
    }

    // --- derived queries ---

    /// Check-ins for one plant, most recent first.
    pub fn plant_check_ins(&self, plant_id: &str) -> AppResult<Vec<CheckIn>> {
        self.plant(plant_id)?;
        Ok(self.check_ins_desc(plant_id))
    }

    fn check_ins_desc(&self, plant_id: &str) -> Vec<CheckIn> {
        let mut list: Vec<CheckIn> = self
            .check_ins
            .iter()
            .filter(|check_in| check_in.plant_id == plant_id)
            .cloned()
            .collect();
        list.sort_by(|a, b| b.date.cmp(&a.date));
        list
    }

    /// Status with an explicit frequency, for callers that already
    /// resolved one.
    pub fn plant_status_with_frequency(
        &self,
        plant_id: &str,
        frequency_days: i64,
    ) -> AppResult<PlantStatus> {
        let plant = self.plant(plant_id)?;
        let check_ins = self.check_ins_desc(plant_id);
        Ok(status::classify(plant, &check_ins, frequency_days, now_ms()))
    }

    /// Status using the plant's effective frequency (custom value or
    /// catalog value, 7 as the fallback).
    pub fn plant_status(&self, plant_id: &str) -> AppResult<PlantStatus> {
        let plant = self.plant(plant_id)?;
        let frequency = schedule::effective_check_frequency(plant);
        let check_ins = self.check_ins_desc(plant_id);
        Ok(status::classify(plant, &check_ins, frequency, now_ms()))
    }

    /// Whole days since the last check-in, or since the plant was
    /// added if it has never been checked.
    pub fn days_since_last_check_in(&self, plant_id: &str) -> AppResult<i64> {
        let plant = self.plant(plant_id)?;
        let check_ins = self.check_ins_desc(plant_id);
        Ok(schedule::days_since_base(plant, &check_ins, now_ms()))
    }

    pub fn next_check_date(&self, plant_id: &str) -> AppResult<i64> {
        let plant = self.plant(plant_id)?;
        let frequency = schedule::effective_check_frequency(plant);
        let check_ins = self.check_ins_desc(plant_id);
        Ok(schedule::next_check_date(plant, &check_ins, frequency))
    }

    pub fn is_due(&self, plant_id: &str) -> AppResult<bool> {
        let plant = self.plant(plant_id)?;
        let frequency = schedule::effective_check_frequency(plant);
        let check_ins = self.check_ins_desc(plant_id);
        Ok(schedule::is_due(plant, &check_ins, frequency, now_ms()))
    }

    /// The merged created/check-in/edit feed, most recent first.
    pub fn plant_history(&self, plant_id: &str) -> AppResult<Vec<HistoryEntry>> {
        let plant = self.plant(plant_id)?;
        let check_ins = self.check_ins_desc(plant_id);
        let edits: Vec<EditRecord> = self
            .edit_records
            .iter()
            .filter(|record| record.plant_id == plant_id)
            .cloned()
            .collect();
        Ok(history::build(plant, &check_ins, &edits))
    }

    /// Catalog issues matching the plant's most recent check-in.
    pub fn relevant_issues(&self, plant_id: &str) -> AppResult<Vec<&'static CommonIssue>> {
        let plant = self.plant(plant_id)?;
        let check_ins = self.check_ins_desc(plant_id);
        Ok(issues::relevant_issues(plant, check_ins.first()))
    }

    pub fn edit_records(&self) -> &[EditRecord] {
        &self.edit_records
    }
}

fn validate_required(field: &'static str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::Validation { field });
    }
    Ok(())
}

fn load_collection<T: DeserializeOwned>(
    storage: &StorageHandle,
    collection: Collection,
) -> AppResult<Vec<T>> {
    let Some(raw) = storage.read(collection)? else {
        return Ok(Vec::new());
    };
    match serde_json::from_str(&raw) {
        Ok(items) => Ok(items),
        Err(err) => {
            warn!(
                target: "plant_nurse",
                event = "collection_parse_failed",
                collection = collection.key(),
                error = %err
            );
            Ok(Vec::new())
        }
    }
}

fn apply_plant_update(plant: &mut Plant, update: PlantUpdate) {
    if let Some(name) = update.custom_name {
        plant.custom_name = name;
    }
    if let Some(room_id) = update.room_id {
        plant.room_id = room_id;
    }
    if let Some(size) = update.size {
        plant.size = size;
    }
    if let Some(condition) = update.condition {
        plant.condition = condition;
    }
    if let Some(value) = update.custom_scientific_name {
        plant.custom_scientific_name = value;
    }
    if let Some(value) = update.custom_check_frequency {
        plant.custom_check_frequency = value;
    }
    if let Some(value) = update.custom_light_level {
        plant.custom_light_level = value;
    }
    if let Some(value) = update.custom_care_notes {
        plant.custom_care_notes = value;
    }
    if let Some(value) = update.custom_leaf_shape {
        plant.custom_leaf_shape = value;
    }
    if let Some(value) = update.custom_leaf_size {
        plant.custom_leaf_size = value;
    }
    if let Some(value) = update.custom_growth_pattern {
        plant.custom_growth_pattern = value;
    }
    if let Some(value) = update.custom_special_features {
        plant.custom_special_features = value;
    }
    if let Some(value) = update.notes {
        plant.notes = value;
    }
    if let Some(value) = update.photo_url {
        plant.photo_url = value;
    }
}

fn apply_room_update(room: &mut Room, update: RoomUpdate) {
    if let Some(name) = update.name {
        room.name = name;
    }
    if let Some(level) = update.light_level {
        room.light_level = level;
    }
    if let Some(temperature) = update.temperature {
        room.temperature = temperature;
    }
    if let Some(value) = update.window_direction {
        room.window_direction = value;
    }
    if let Some(value) = update.humidity {
        room.humidity = value;
    }
    if let Some(value) = update.notes {
        room.notes = value;
    }
}

fn opt_text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn opt_number(value: Option<i64>) -> String {
    value.map(|n| n.to_string()).unwrap_or_default()
}

fn opt_light(value: Option<LightLevel>) -> String {
    value.map(|level| level.as_str().to_string()).unwrap_or_default()
}

/// Field-by-field diff between two plant snapshots, skipping identity
/// fields. Values are rendered as the persisted strings; cleared
/// optionals render empty.
fn diff_plants(before: &Plant, after: &Plant) -> Vec<FieldChange> {
    let pairs = [
        (
            "customName",
            before.custom_name.clone(),
            after.custom_name.clone(),
        ),
        ("roomId", before.room_id.clone(), after.room_id.clone()),
        (
            "size",
            before.size.as_str().to_string(),
            after.size.as_str().to_string(),
        ),
        (
            "condition",
            before.condition.as_str().to_string(),
            after.condition.as_str().to_string(),
        ),
        (
            "customScientificName",
            opt_text(&before.custom_scientific_name),
            opt_text(&after.custom_scientific_name),
        ),
        (
            "customCheckFrequency",
            opt_number(before.custom_check_frequency),
            opt_number(after.custom_check_frequency),
        ),
        (
            "customLightLevel",
            opt_light(before.custom_light_level),
            opt_light(after.custom_light_level),
        ),
        (
            "customCareNotes",
            opt_text(&before.custom_care_notes),
            opt_text(&after.custom_care_notes),
        ),
        (
            "customLeafShape",
            opt_text(&before.custom_leaf_shape),
            opt_text(&after.custom_leaf_shape),
        ),
        (
            "customLeafSize",
            opt_text(&before.custom_leaf_size),
            opt_text(&after.custom_leaf_size),
        ),
        (
            "customGrowthPattern",
            opt_text(&before.custom_growth_pattern),
            opt_text(&after.custom_growth_pattern),
        ),
        (
            "customSpecialFeatures",
            before.custom_special_features.join(", "),
            after.custom_special_features.join(", "),
        ),
        ("notes", opt_text(&before.notes), opt_text(&after.notes)),
        (
            "photoUrl",
            opt_text(&before.photo_url),
            opt_text(&after.photo_url),
        ),
    ];

    pairs
        .into_iter()
        .filter(|(_, old_value, new_value)| old_value != new_value)
        .map(|(field, old_value, new_value)| FieldChange {
            field: field.to_string(),
            old_value,
            new_value,
        })
        .collect()
}
