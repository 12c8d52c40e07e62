use anyhow::Result;
use plant_nurse::{AppError, Nursery, PlantUpdate, DEFAULT_ROOM_ID};
use proptest::prelude::*;

#[path = "util.rs"]
mod util;

#[test]
fn add_assigns_id_and_server_timestamp() -> Result<()> {
    let mut nursery = Nursery::in_memory();
    let plant = nursery.add_plant(util::custom_plant_input("Fred", DEFAULT_ROOM_ID))?;
    assert!(!plant.id.is_empty());
    assert!(plant.date_added > 0);
    assert!(plant.is_custom);
    assert_eq!(plant.species_id, None);
    assert_eq!(nursery.plants().len(), 1);
    assert_eq!(nursery.plant(&plant.id)?.custom_name, "Fred");
    Ok(())
}

#[test]
fn catalog_plants_keep_their_species_reference() -> Result<()> {
    let mut nursery = Nursery::in_memory();
    let plant = nursery.add_plant(util::catalog_plant_input("Planty", DEFAULT_ROOM_ID, "pothos"))?;
    assert_eq!(plant.species_id.as_deref(), Some("pothos"));
    assert!(!plant.is_custom);
    Ok(())
}

#[test]
fn blank_name_is_rejected() {
    let mut nursery = Nursery::in_memory();
    let err = nursery
        .add_plant(util::custom_plant_input("   ", DEFAULT_ROOM_ID))
        .expect_err("blank name should fail validation");
    assert!(matches!(err, AppError::Validation { field: "customName" }));
    assert_eq!(err.code(), "VALIDATION/REQUIRED");
    assert!(nursery.plants().is_empty());
}

#[test]
fn blank_room_is_rejected() {
    let mut nursery = Nursery::in_memory();
    let err = nursery
        .add_plant(util::custom_plant_input("Fred", ""))
        .expect_err("blank room should fail validation");
    assert!(matches!(err, AppError::Validation { field: "roomId" }));
}

#[test]
fn unknown_room_is_rejected() {
    let mut nursery = Nursery::in_memory();
    let err = nursery
        .add_plant(util::custom_plant_input("Fred", "attic"))
        .expect_err("plants cannot live in rooms that do not exist");
    assert!(matches!(err, AppError::RoomNotFound { .. }));
    assert!(nursery.plants().is_empty());
}

#[test]
fn unknown_species_is_rejected() {
    let mut nursery = Nursery::in_memory();
    let err = nursery
        .add_plant(util::catalog_plant_input("Audrey", DEFAULT_ROOM_ID, "triffid"))
        .expect_err("species must resolve in the catalog");
    assert!(matches!(err, AppError::UnknownSpecies { .. }));
    assert_eq!(err.code(), "VALIDATION/UNKNOWN_SPECIES");
}

#[test]
fn rename_appends_one_edit_record_with_the_diff() -> Result<()> {
    let mut nursery = Nursery::in_memory();
    let plant = nursery.add_plant(util::custom_plant_input("Fred", DEFAULT_ROOM_ID))?;

    let updated = nursery.update_plant(
        &plant.id,
        PlantUpdate {
            custom_name: Some("Freddy".into()),
            ..PlantUpdate::default()
        },
    )?;
    assert_eq!(updated.custom_name, "Freddy");

    let records = nursery.edit_records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].plant_id, plant.id);
    assert_eq!(records[0].changes.len(), 1);
    let change = &records[0].changes[0];
    assert_eq!(change.field, "customName");
    assert_eq!(change.old_value, "Fred");
    assert_eq!(change.new_value, "Freddy");
    Ok(())
}

#[test]
fn multi_field_update_lands_in_a_single_record() -> Result<()> {
    let mut nursery = Nursery::in_memory();
    let plant = nursery.add_plant(util::custom_plant_input("Fred", DEFAULT_ROOM_ID))?;

    nursery.update_plant(
        &plant.id,
        PlantUpdate {
            custom_name: Some("Freddy".into()),
            notes: Some(Some("repotted".into())),
            ..PlantUpdate::default()
        },
    )?;

    let records = nursery.edit_records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].changes.len(), 2);
    Ok(())
}

#[test]
fn noop_update_appends_nothing() -> Result<()> {
    let mut nursery = Nursery::in_memory();
    let plant = nursery.add_plant(util::custom_plant_input("Fred", DEFAULT_ROOM_ID))?;

    nursery.update_plant(&plant.id, PlantUpdate::default())?;
    nursery.update_plant(
        &plant.id,
        PlantUpdate {
            custom_name: Some("Fred".into()),
            ..PlantUpdate::default()
        },
    )?;

    assert!(nursery.edit_records().is_empty());
    Ok(())
}

#[test]
fn clearing_notes_diffs_to_empty_string() -> Result<()> {
    let mut nursery = Nursery::in_memory();
    let plant = nursery.add_plant(util::custom_plant_input("Fred", DEFAULT_ROOM_ID))?;

    nursery.update_plant(
        &plant.id,
        PlantUpdate {
            notes: Some(Some("droopy lately".into())),
            ..PlantUpdate::default()
        },
    )?;
    nursery.update_plant(
        &plant.id,
        PlantUpdate {
            notes: Some(None),
            ..PlantUpdate::default()
        },
    )?;

    let records = nursery.edit_records();
    assert_eq!(records.len(), 2);
    let change = &records[1].changes[0];
    assert_eq!(change.field, "notes");
    assert_eq!(change.old_value, "droopy lately");
    assert_eq!(change.new_value, "");
    Ok(())
}

#[test]
fn update_validates_the_target_room() -> Result<()> {
    let mut nursery = Nursery::in_memory();
    let plant = nursery.add_plant(util::custom_plant_input("Fred", DEFAULT_ROOM_ID))?;

    let err = nursery
        .update_plant(
            &plant.id,
            PlantUpdate {
                room_id: Some("attic".into()),
                ..PlantUpdate::default()
            },
        )
        .expect_err("moving a plant to a missing room should fail");
    assert!(matches!(err, AppError::RoomNotFound { .. }));
    assert_eq!(nursery.plant(&plant.id)?.room_id, DEFAULT_ROOM_ID);
    assert!(nursery.edit_records().is_empty());
    Ok(())
}

#[test]
fn update_unknown_plant_fails() {
    let mut nursery = Nursery::in_memory();
    let err = nursery
        .update_plant("ghost", PlantUpdate::default())
        .expect_err("unknown plant");
    assert!(matches!(err, AppError::PlantNotFound { .. }));
}

#[test]
fn remove_cascades_check_ins_and_edit_records() -> Result<()> {
    let mut nursery = Nursery::in_memory();
    let doomed = nursery.add_plant(util::custom_plant_input("Doomed", DEFAULT_ROOM_ID))?;
    let keeper = nursery.add_plant(util::custom_plant_input("Keeper", DEFAULT_ROOM_ID))?;
    nursery.add_check_in(util::check_in_input(&doomed.id))?;
    nursery.add_check_in(util::check_in_input(&keeper.id))?;
    for plant in [&doomed, &keeper] {
        nursery.update_plant(
            &plant.id,
            PlantUpdate {
                notes: Some(Some("tagged".into())),
                ..PlantUpdate::default()
            },
        )?;
    }

    nursery.remove_plant(&doomed.id)?;

    assert_eq!(nursery.plants().len(), 1);
    assert!(nursery.check_ins().iter().all(|c| c.plant_id == keeper.id));
    assert_eq!(nursery.check_ins().len(), 1);
    assert!(nursery.edit_records().iter().all(|r| r.plant_id == keeper.id));
    assert_eq!(nursery.edit_records().len(), 1);
    Ok(())
}

#[test]
fn remove_unknown_plant_fails() {
    let mut nursery = Nursery::in_memory();
    let err = nursery.remove_plant("ghost").expect_err("unknown plant");
    assert!(matches!(err, AppError::PlantNotFound { .. }));
    assert_eq!(err.code(), "PLANT/NOT_FOUND");
}

fn three_plants(nursery: &mut Nursery) -> Result<Vec<String>> {
    let mut ids = Vec::new();
    for name in ["A", "B", "C"] {
        ids.push(
            nursery
                .add_plant(util::custom_plant_input(name, DEFAULT_ROOM_ID))?
                .id,
        );
    }
    Ok(ids)
}

fn names(nursery: &Nursery) -> Vec<String> {
    nursery
        .plants()
        .iter()
        .map(|p| p.custom_name.clone())
        .collect()
}

#[test]
fn reorder_applies_the_requested_sequence() -> Result<()> {
    let mut nursery = Nursery::in_memory();
    let ids = three_plants(&mut nursery)?;

    nursery.reorder_plants(&[ids[2].clone(), ids[0].clone(), ids[1].clone()])?;
    assert_eq!(names(&nursery), vec!["C", "A", "B"]);
    Ok(())
}

#[test]
fn reorder_ignores_unknown_ids_and_keeps_stragglers() -> Result<()> {
    let mut nursery = Nursery::in_memory();
    let ids = three_plants(&mut nursery)?;

    // Only B is named; A and C keep their current relative order.
    nursery.reorder_plants(&[ids[1].clone(), "ghost".into()])?;
    assert_eq!(names(&nursery), vec!["B", "A", "C"]);
    Ok(())
}

#[test]
fn reorder_keeps_first_occurrence_of_duplicates() -> Result<()> {
    let mut nursery = Nursery::in_memory();
    let ids = three_plants(&mut nursery)?;

    nursery.reorder_plants(&[ids[1].clone(), ids[1].clone(), ids[0].clone()])?;
    assert_eq!(names(&nursery), vec!["B", "A", "C"]);
    Ok(())
}

proptest! {
    #[test]
    fn reorder_never_loses_or_duplicates_plants(
        raw in proptest::collection::vec(0usize..8, 0..12),
    ) {
        let mut nursery = Nursery::in_memory();
        let mut ids = Vec::new();
        for i in 0..5 {
            let plant = nursery
                .add_plant(util::custom_plant_input(&format!("Plant {i}"), DEFAULT_ROOM_ID))
                .unwrap();
            ids.push(plant.id);
        }
        // Indexes past the real range stand in for unknown ids.
        let sequence: Vec<String> = raw
            .iter()
            .map(|&i| ids.get(i).cloned().unwrap_or_else(|| format!("ghost-{i}")))
            .collect();

        nursery.reorder_plants(&sequence).unwrap();
        let after: Vec<String> = nursery.plants().iter().map(|p| p.id.clone()).collect();
        prop_assert_eq!(after.len(), ids.len());
        let mut sorted_after = after.clone();
        sorted_after.sort();
        let mut sorted_ids = ids.clone();
        sorted_ids.sort();
        prop_assert_eq!(sorted_after, sorted_ids);

        // Replaying the same sequence is a no-op.
        nursery.reorder_plants(&sequence).unwrap();
        let again: Vec<String> = nursery.plants().iter().map(|p| p.id.clone()).collect();
        prop_assert_eq!(again, after);
    }
}
