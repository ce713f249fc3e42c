use crate::commands::helpers::parse_id;
use crate::commands::CmdResult;
use crate::database::Database;
use crate::dispatch::with_payload;
use crate::error::{Result, ShelfwiseError};
use crate::model::{Kind, Payload};
use crate::view::DetailView;

/// Shows one record by bare ID, or every record of `kind` named `token`.
pub fn run(db: &Database, token: &str, kind: Option<Kind>) -> Result<CmdResult> {
    let details = match kind {
        Some(kind) => with_payload!(kind, P => by_name::<P>(db, token))?,
        None => {
            let id = parse_id(token)?;
            let loc = db.locate(id).ok_or(ShelfwiseError::UnknownId(id))?;
            with_payload!(loc.kind, P => vec![DetailView::of(db, &P::table(db)[loc.index])])
        }
    };
    Ok(CmdResult::default().with_details(details))
}

/// All exact-name matches; the token is tried as an ID only when there are none.
fn by_name<P: Payload>(db: &Database, token: &str) -> Result<Vec<DetailView>> {
    let table = P::table(db);
    let matches = table.all_by_name_exact(token);
    if !matches.is_empty() {
        return Ok(matches.into_iter().map(|r| DetailView::of(db, r)).collect());
    }
    token
        .parse::<u32>()
        .ok()
        .and_then(|id| table.get(id))
        .map(|r| vec![DetailView::of(db, r)])
        .ok_or_else(|| ShelfwiseError::not_found(P::KIND, token))
}
