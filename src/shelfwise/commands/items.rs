use crate::commands::{CmdMessage, CmdResult};
use crate::database::Database;
use crate::error::Result;
use crate::form::RecordForm;
use crate::model::{now, Bin, Item, Record};
use crate::prompt::Prompt;
use crate::resolve::select;

/// Adds items to the box resolved from `bin`, one edit form per item, until
/// the user does not save a form.
///
/// Each new form starts with amount 1 and the previous item's category and
/// location. `commit` runs after every added item so that a later failure or
/// interruption keeps the items already entered.
pub fn run<U, F>(db: &mut Database, ui: &mut U, bin: &str, mut commit: F) -> Result<CmdResult>
where
    U: Prompt,
    F: FnMut(&Database) -> Result<()>,
{
    let idx = select::<Bin, U>(db, ui, bin, "add")?;
    let box_id = db.boxes[idx].id;
    let mut template = Item {
        box_id,
        amount: 1,
        ..Item::default()
    };
    let mut result = CmdResult::default();

    loop {
        let mut record = Record::new(0, "", template.clone());
        let form = RecordForm::from_record(db, &record, " Add ");
        let Some(edited) = ui.edit_record(form)? else {
            break;
        };
        edited.apply(db, &mut record)?;

        template = Item {
            location: record.data.location.clone(),
            category_id: record.data.category_id,
            ..template
        };

        record.id = db.ids.next_id()?;
        let stamp = now();
        record.created = stamp;
        record.updated = stamp;
        let message = format!("Added item \"{}\" with ID {}", record.name, record.id);
        db.items.add(record);
        commit(db)?;
        result.add_message(CmdMessage::success(message));
    }

    if result.messages.is_empty() {
        result.add_message(CmdMessage::info("No items added"));
    }
    Ok(result)
}
