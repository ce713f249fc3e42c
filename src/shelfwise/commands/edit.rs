use crate::commands::helpers::resolve_target;
use crate::commands::{CmdMessage, CmdResult};
use crate::database::Database;
use crate::dispatch::with_payload;
use crate::error::Result;
use crate::form::RecordForm;
use crate::model::{Kind, Payload};
use crate::prompt::Prompt;

/// Opens the edit form for the record named by `token` and writes back a saved form.
pub fn run<U: Prompt>(
    db: &mut Database,
    ui: &mut U,
    token: &str,
    kind: Option<Kind>,
) -> Result<CmdResult> {
    let loc = resolve_target(db, ui, token, kind, "edit")?;
    with_payload!(loc.kind, P => edit_at::<P, U>(db, ui, loc.index))
}

fn edit_at<P: Payload, U: Prompt>(db: &mut Database, ui: &mut U, idx: usize) -> Result<CmdResult> {
    let mut record = P::table(db)[idx].clone();
    let form = RecordForm::from_record(db, &record, " Edit ");

    let Some(edited) = ui.edit_record(form)? else {
        return Ok(CmdResult::default().with_message(CmdMessage::info(format!(
            "{} \"{}\" not changed",
            P::KIND.label(),
            record.name
        ))));
    };
    edited.apply(db, &mut record)?;
    let message = format!("{} \"{}\" updated", P::KIND.label(), record.name);
    P::table_mut(db)[idx] = record;
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(message))
        .changed())
}
