use anyhow::Result;
use plant_nurse::{AppError, Nursery, PlantUpdate, DEFAULT_ROOM_ID};

#[path = "util.rs"]
mod util;

#[test]
fn default_room_survives_removal_attempts() {
    let mut nursery = Nursery::in_memory();
    let err = nursery
        .remove_room(DEFAULT_ROOM_ID)
        .expect_err("the default room must stay");
    assert!(matches!(err, AppError::DefaultRoomUndeletable));
    assert_eq!(err.code(), "ROOM/DEFAULT_UNDELETABLE");
    assert_eq!(nursery.rooms().len(), 1);
}

#[test]
fn occupied_room_cannot_be_removed() -> Result<()> {
    let mut nursery = Nursery::in_memory();
    let room = nursery.add_room(util::room_input("Kitchen"))?;
    nursery.add_plant(util::custom_plant_input("Basil", &room.id))?;
    nursery.add_plant(util::custom_plant_input("Mint", &room.id))?;

    let err = nursery
        .remove_room(&room.id)
        .expect_err("occupied rooms are protected");
    assert!(matches!(err, AppError::RoomOccupied { plants: 2, .. }));
    assert_eq!(err.code(), "ROOM/OCCUPIED");
    assert!(nursery.room(&room.id).is_ok());
    Ok(())
}

#[test]
fn empty_room_is_removed() -> Result<()> {
    let mut nursery = Nursery::in_memory();
    let room = nursery.add_room(util::room_input("Kitchen"))?;
    nursery.remove_room(&room.id)?;
    assert_eq!(nursery.rooms().len(), 1);
    assert!(matches!(
        nursery.room(&room.id),
        Err(AppError::RoomNotFound { .. })
    ));
    Ok(())
}

#[test]
fn moving_plants_out_unlocks_removal() -> Result<()> {
    let mut nursery = Nursery::in_memory();
    let room = nursery.add_room(util::room_input("Kitchen"))?;
    let plant = nursery.add_plant(util::custom_plant_input("Basil", &room.id))?;

    assert!(nursery.remove_room(&room.id).is_err());

    nursery.update_plant(
        &plant.id,
        PlantUpdate {
            room_id: Some(DEFAULT_ROOM_ID.into()),
            ..PlantUpdate::default()
        },
    )?;
    nursery.remove_room(&room.id)?;
    assert_eq!(nursery.rooms().len(), 1);
    assert_eq!(nursery.plant(&plant.id)?.room_id, DEFAULT_ROOM_ID);
    Ok(())
}

#[test]
fn removing_unknown_room_fails() {
    let mut nursery = Nursery::in_memory();
    let err = nursery.remove_room("attic").expect_err("unknown room");
    assert!(matches!(err, AppError::RoomNotFound { .. }));
}
