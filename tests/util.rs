#![allow(dead_code)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use plant_nurse::{
    CheckIn, CheckInInput, Collection, CustomCare, LightLevel, Plant, PlantCondition, PlantInput,
    PlantOrigin, PlantSize, Room, RoomInput, RoomTemperature, StorageHandle,
};

pub fn custom_plant_input(name: &str, room_id: &str) -> PlantInput {
    PlantInput {
        custom_name: name.to_string(),
        room_id: room_id.to_string(),
        size: PlantSize::Small,
        condition: PlantCondition::Healthy,
        origin: PlantOrigin::Custom(CustomCare::default()),
        notes: None,
        photo_url: None,
    }
}

pub fn catalog_plant_input(name: &str, room_id: &str, species_id: &str) -> PlantInput {
    PlantInput {
        custom_name: name.to_string(),
        room_id: room_id.to_string(),
        size: PlantSize::Medium,
        condition: PlantCondition::Healthy,
        origin: PlantOrigin::Catalog {
            species_id: species_id.to_string(),
        },
        notes: None,
        photo_url: None,
    }
}

pub fn room_input(name: &str) -> RoomInput {
    RoomInput {
        name: name.to_string(),
        light_level: LightLevel::Medium,
        temperature: RoomTemperature::Moderate,
        window_direction: None,
        humidity: None,
        notes: None,
    }
}

pub fn check_in_input(plant_id: &str) -> CheckInInput {
    CheckInInput {
        plant_id: plant_id.to_string(),
        ..CheckInInput::default()
    }
}

/// Plant row with explicit `date_added`, for seeding storage directly
/// when a test needs control over the clock. Weekly custom frequency.
pub fn stored_plant(id: &str, name: &str, room_id: &str, date_added: i64) -> Plant {
    Plant {
        id: id.to_string(),
        species_id: None,
        is_custom: true,
        custom_name: name.to_string(),
        room_id: room_id.to_string(),
        size: PlantSize::Small,
        condition: PlantCondition::Healthy,
        date_added,
        custom_scientific_name: None,
        custom_check_frequency: Some(7),
        custom_light_level: None,
        custom_care_notes: None,
        custom_leaf_shape: None,
        custom_leaf_size: None,
        custom_growth_pattern: None,
        custom_special_features: Vec::new(),
        notes: None,
        photo_url: None,
    }
}

pub fn stored_catalog_plant(
    id: &str,
    name: &str,
    room_id: &str,
    species_id: &str,
    date_added: i64,
) -> Plant {
    let mut plant = stored_plant(id, name, room_id, date_added);
    plant.species_id = Some(species_id.to_string());
    plant.is_custom = false;
    plant.custom_check_frequency = None;
    plant
}

pub fn stored_check_in(id: &str, plant_id: &str, date: i64) -> CheckIn {
    CheckIn {
        id: id.to_string(),
        plant_id: plant_id.to_string(),
        date,
        soil_moisture: None,
        leaf_condition: Vec::new(),
        notes: None,
        actions_taken: Vec::new(),
        photo_url: None,
    }
}

pub fn stored_room(id: &str, name: &str) -> Room {
    Room {
        id: id.to_string(),
        name: name.to_string(),
        light_level: LightLevel::Medium,
        window_direction: None,
        temperature: RoomTemperature::Moderate,
        humidity: None,
        notes: None,
    }
}

pub fn seed<T: serde::Serialize>(handle: &StorageHandle, collection: Collection, items: &[T]) {
    let payload = serde_json::to_string(items).expect("serialize seed data");
    handle.write(collection, &payload).expect("seed collection");
}
