//! Re-parenting of items and boxes.

use crate::commands::helpers::parse_id;
use crate::commands::{CmdMessage, CmdResult};
use crate::database::Database;
use crate::error::{Result, ShelfwiseError};
use crate::model::{Bin, Kind, Shelf};
use crate::prompt::Prompt;
use crate::resolve::select;

/// Moves the item with ID `item` into the box resolved from `target`.
pub fn item<U: Prompt>(db: &mut Database, ui: &mut U, item: &str, target: &str) -> Result<CmdResult> {
    let item_id = parse_id(item)?;
    let item_idx = db
        .items
        .index_of(item_id)
        .ok_or_else(|| ShelfwiseError::not_found(Kind::Item, item))?;
    let box_idx = select::<Bin, U>(db, ui, target, "move")?;

    let (box_id, box_name) = (db.boxes[box_idx].id, db.boxes[box_idx].name.clone());
    let record = &mut db.items[item_idx];
    record.data.box_id = box_id;
    record.touch();
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Moved item \"{}\" to \"{}\"",
            record.name, box_name
        )))
        .changed())
}

/// Moves the box with ID `bin` onto the shelf resolved from `target`.
pub fn bin<U: Prompt>(db: &mut Database, ui: &mut U, bin: &str, target: &str) -> Result<CmdResult> {
    let box_id = parse_id(bin)?;
    let box_idx = db
        .boxes
        .index_of(box_id)
        .ok_or_else(|| ShelfwiseError::not_found(Kind::Box, bin))?;
    let shelf_idx = select::<Shelf, U>(db, ui, target, "move")?;

    let (shelf_id, shelf_name) = (db.shelves[shelf_idx].id, db.shelves[shelf_idx].name.clone());
    let record = &mut db.boxes[box_idx];
    record.data.shelf_id = shelf_id;
    record.touch();
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Moved box \"{}\" to \"{}\"",
            record.name, shelf_name
        )))
        .changed())
}
