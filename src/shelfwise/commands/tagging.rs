use crate::commands::helpers::parse_id;
use crate::commands::{CmdMessage, CmdResult};
use crate::database::Database;
use crate::dispatch::{with_table, with_table_mut, Location};
use crate::error::{Result, ShelfwiseError};
use crate::model::Kind;
use crate::tags::{self, TagOutcome};

fn locate(db: &Database, token: &str) -> Result<Location> {
    let id = parse_id(token)?;
    db.locate(id).ok_or(ShelfwiseError::UnknownId(id))
}

fn outcome_result(db: &Database, loc: Location, tag_name: &str, outcome: TagOutcome) -> CmdResult {
    let record_name = with_table!(db, loc.kind, |table| table[loc.index].name.clone());
    let text = outcome.describe(loc.kind, &record_name, tag_name);
    if outcome.changed() {
        CmdResult::default()
            .with_message(CmdMessage::success(text))
            .changed()
    } else {
        CmdResult::default().with_message(CmdMessage::info(text))
    }
}

/// Attaches the tag `tag_name` to the record with ID `token`, creating the
/// tag if it does not exist yet.
pub fn add(db: &mut Database, tag_name: &str, token: &str) -> Result<CmdResult> {
    let loc = locate(db, token)?;
    let tag_count = db.tags.len();
    let tag_id = db.resolve_or_create_tag(tag_name)?;
    let outcome = with_table_mut!(db, loc.kind, |table| tags::attach(table, loc.index, tag_id));

    let mut result = outcome_result(db, loc, tag_name, outcome);
    result.changed |= db.tags.len() != tag_count;
    Ok(result)
}

/// Detaches the tag `tag_name` from the record with ID `token`.
pub fn remove(db: &mut Database, tag_name: &str, token: &str) -> Result<CmdResult> {
    let loc = locate(db, token)?;
    let tag_id = db
        .tags
        .first_by_name_ci(tag_name)
        .ok_or_else(|| ShelfwiseError::not_found(Kind::Tag, tag_name))?;
    let outcome = with_table_mut!(db, loc.kind, |table| tags::detach(table, loc.index, tag_id));
    Ok(outcome_result(db, loc, tag_name, outcome))
}
