//! Creation of warehouses, categories, rooms, shelves and boxes.

use crate::commands::helpers::require_current_warehouse;
use crate::commands::{CmdMessage, CmdResult};
use crate::database::Database;
use crate::error::{Result, ShelfwiseError};
use crate::model::{Bin, Room, Shelf};
use crate::prompt::Prompt;
use crate::resolve::select;

pub fn warehouse(db: &mut Database, name: &str) -> Result<CmdResult> {
    if db.warehouses.exact_one(name).is_some() {
        return Err(ShelfwiseError::Api(format!(
            "The warehouse \"{}\" already exists",
            name
        )));
    }
    let id = db.warehouses.add_simple(&mut db.ids, name)?;
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Added warehouse \"{}\" with ID {}",
            name, id
        )))
        .changed())
}

pub fn category(db: &mut Database, name: &str) -> Result<CmdResult> {
    if db.categories.exact_one(name).is_some() {
        return Err(ShelfwiseError::Api(format!(
            "The category \"{}\" already exists",
            name
        )));
    }
    let id = db.categories.add_simple(&mut db.ids, name)?;
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Added category \"{}\" with ID {}",
            name, id
        )))
        .changed())
}

/// Adds a room to the active warehouse. Names only need to be unique per warehouse.
pub fn room(db: &mut Database, name: &str) -> Result<CmdResult> {
    let (warehouse_id, warehouse_name) = {
        let wh = require_current_warehouse(db)?;
        (wh.id, wh.name.clone())
    };
    let duplicate = db
        .rooms
        .live()
        .any(|r| r.name == name && r.data.warehouse_id == warehouse_id);
    if duplicate {
        return Err(ShelfwiseError::Api(format!(
            "The room \"{}\" already exists in warehouse \"{}\"",
            name, warehouse_name
        )));
    }

    let id = db.rooms.create(
        &mut db.ids,
        name,
        Room {
            warehouse_id,
            ..Room::default()
        },
    )?;
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Added room \"{}\" with ID {} to warehouse \"{}\"",
            name, id, warehouse_name
        )))
        .changed())
}

pub fn shelf<U: Prompt>(db: &mut Database, ui: &mut U, name: &str, room: &str) -> Result<CmdResult> {
    require_current_warehouse(db)?;
    let idx = select::<Room, U>(db, ui, room, "add")?;
    let (room_id, room_name) = (db.rooms[idx].id, db.rooms[idx].name.clone());

    let id = db.shelves.create(
        &mut db.ids,
        name,
        Shelf {
            room_id,
            ..Shelf::default()
        },
    )?;
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Added shelf \"{}\" with ID {} to room \"{}\"",
            name, id, room_name
        )))
        .changed())
}

pub fn bin<U: Prompt>(db: &mut Database, ui: &mut U, name: &str, shelf: &str) -> Result<CmdResult> {
    require_current_warehouse(db)?;
    let idx = select::<Shelf, U>(db, ui, shelf, "add")?;
    let (shelf_id, shelf_name) = (db.shelves[idx].id, db.shelves[idx].name.clone());

    let id = db.boxes.create(
        &mut db.ids,
        name,
        Bin {
            shelf_id,
            ..Bin::default()
        },
    )?;
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Added box \"{}\" with ID {} to shelf \"{}\"",
            name, id, shelf_name
        )))
        .changed())
}
