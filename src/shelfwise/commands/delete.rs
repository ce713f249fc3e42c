use crate::commands::helpers::resolve_target;
use crate::commands::{CmdMessage, CmdResult};
use crate::database::Database;
use crate::dispatch::{with_table, with_table_mut};
use crate::error::Result;
use crate::model::Kind;
use crate::prompt::Prompt;

/// Soft-deletes the record named by `token` after confirmation. `assume_yes`
/// skips the question.
pub fn run<U: Prompt>(
    db: &mut Database,
    ui: &mut U,
    token: &str,
    kind: Option<Kind>,
    assume_yes: bool,
) -> Result<CmdResult> {
    let loc = resolve_target(db, ui, token, kind, "delete")?;
    let (id, name) = with_table!(db, loc.kind, |table| (
        table[loc.index].id,
        table[loc.index].name.clone()
    ));

    let question = format!("Do you really want to delete {} \"{}\"?", loc.kind, name);
    if !assume_yes && !ui.confirm(&question) {
        return Ok(CmdResult::default().with_message(CmdMessage::info("Nothing deleted")));
    }

    with_table_mut!(db, loc.kind, |table| table.soft_delete(id));
    tracing::debug!(kind = %loc.kind, id, "soft-deleted record");

    let mut result = CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "{} \"{}\" deleted",
            loc.kind.label(),
            name
        )))
        .changed();
    if loc.kind == Kind::Warehouse && db.current_warehouse == id {
        result.add_message(CmdMessage::warning(
            "The active warehouse was deleted; switch to another one",
        ));
    }
    Ok(result)
}
