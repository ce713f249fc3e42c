use crate::database::Database;
use crate::dispatch::{with_payload, Location};
use crate::error::{Result, ShelfwiseError};
use crate::model::{Kind, Record, Warehouse};
use crate::prompt::Prompt;
use crate::resolve::select;

/// Parses a bare record ID as typed by the user.
pub fn parse_id(token: &str) -> Result<u32> {
    token
        .trim()
        .parse()
        .map_err(|_| ShelfwiseError::Api(format!("\"{}\" is not a valid ID", token)))
}

/// Finds the record a command operates on.
///
/// With a kind the token goes through the name/ID resolver of that table.
/// Without one it must be a bare ID and is dispatched across tables.
pub fn resolve_target<U: Prompt>(
    db: &Database,
    ui: &mut U,
    token: &str,
    kind: Option<Kind>,
    action: &str,
) -> Result<Location> {
    match kind {
        Some(kind) => {
            let index = with_payload!(kind, P => select::<P, U>(db, ui, token, action))?;
            Ok(Location { kind, index })
        }
        None => {
            let id = parse_id(token)?;
            db.locate(id).ok_or(ShelfwiseError::UnknownId(id))
        }
    }
}

/// The active warehouse, or an error telling the user to switch first.
pub fn require_current_warehouse(db: &Database) -> Result<&Record<Warehouse>> {
    db.current_warehouse()
        .ok_or_else(|| ShelfwiseError::Api("Switch to a valid warehouse first".to_string()))
}
