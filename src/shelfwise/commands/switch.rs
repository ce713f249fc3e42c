use crate::commands::{CmdMessage, CmdResult};
use crate::database::Database;
use crate::error::{Result, ShelfwiseError};
use crate::model::Kind;

/// Makes the warehouse named exactly `name` the active one.
pub fn run(db: &mut Database, name: &str) -> Result<CmdResult> {
    let (_, id) = db
        .warehouses
        .exact_one(name)
        .ok_or_else(|| ShelfwiseError::not_found(Kind::Warehouse, name))?;
    if db.current_warehouse == id {
        return Ok(CmdResult::default().with_message(CmdMessage::info(format!(
            "Warehouse \"{}\" is already active",
            name
        ))));
    }
    db.current_warehouse = id;
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Warehouse \"{}\" is now active",
            name
        )))
        .changed())
}
