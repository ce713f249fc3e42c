//! Name/ID resolution.
//!
//! Users refer to records by name or by numeric ID. [`select`] turns such a
//! token into exactly one table position:
//!
//! 1. every live record whose name equals the token exactly is collected;
//! 2. none: the token is tried as a numeric ID;
//! 3. one: that record;
//! 4. several: the user picks through [`Prompt::choose`].
//!
//! The numeric fallback only runs when no name matched, so a record named
//! `"12"` shadows the record with ID 12.

use crate::database::Database;
use crate::error::{Result, ShelfwiseError};
use crate::model::Payload;
use crate::prompt::{Candidate, Prompt};

/// Resolves `token` against the table of `P`. Fails with `NotFound` or, if
/// the user backs out of the choice, `Cancelled`.
pub fn select<P: Payload, U: Prompt>(
    db: &Database,
    ui: &mut U,
    token: &str,
    action: &str,
) -> Result<usize> {
    let table = P::table(db);
    let matches = table.all_by_name_exact(token);

    let id = match matches.as_slice() {
        [] => token
            .parse::<u32>()
            .ok()
            .filter(|id| table.index_of(*id).is_some())
            .ok_or_else(|| ShelfwiseError::not_found(P::KIND, token))?,
        [only] => only.id,
        several => {
            let candidates: Vec<Candidate> = several
                .iter()
                .map(|r| Candidate::from_record(db, r))
                .collect();
            let choice = ui
                .choose(P::KIND, &candidates, action)
                .and_then(|i| candidates.get(i))
                .ok_or(ShelfwiseError::Cancelled)?;
            choice.id
        }
    };

    table
        .index_of(id)
        .ok_or_else(|| ShelfwiseError::not_found(P::KIND, token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::RecordForm;
    use crate::model::{Bin, Kind};

    /// Records every `choose` call and answers with a fixed choice.
    struct Chooser {
        answer: Option<usize>,
        calls: Vec<(Kind, usize, String)>,
    }

    impl Chooser {
        fn answering(answer: Option<usize>) -> Self {
            Self {
                answer,
                calls: Vec::new(),
            }
        }
    }

    impl Prompt for Chooser {
        fn choose(&mut self, kind: Kind, candidates: &[Candidate], action: &str) -> Option<usize> {
            self.calls.push((kind, candidates.len(), action.to_string()));
            self.answer
        }

        fn confirm(&mut self, _message: &str) -> bool {
            true
        }

        fn edit_record(&mut self, _form: RecordForm) -> Result<Option<RecordForm>> {
            Ok(None)
        }
    }

    fn boxes() -> (Database, u32, u32, u32, u32) {
        let mut db = Database::new();
        let a = db.boxes.create(&mut db.ids, "A", Bin::default()).unwrap();
        let b1 = db.boxes.create(&mut db.ids, "B", Bin::default()).unwrap();
        let b2 = db.boxes.create(&mut db.ids, "B", Bin::default()).unwrap();
        let c = db.boxes.create(&mut db.ids, "C", Bin::default()).unwrap();
        (db, a, b1, b2, c)
    }

    #[test]
    fn unique_name_resolves_without_prompting() {
        let (db, a, ..) = boxes();
        let mut ui = Chooser::answering(Some(0));
        let idx = select::<Bin, _>(&db, &mut ui, "A", "show").unwrap();
        assert_eq!(db.boxes[idx].id, a);
        assert!(ui.calls.is_empty());
    }

    #[test]
    fn ambiguous_name_asks_the_user() {
        let (db, _, _, b2, _) = boxes();
        let mut ui = Chooser::answering(Some(1));
        let idx = select::<Bin, _>(&db, &mut ui, "B", "move").unwrap();
        assert_eq!(db.boxes[idx].id, b2);
        assert_eq!(ui.calls, vec![(Kind::Box, 2, "move".to_string())]);
    }

    #[test]
    fn cancelled_choice_fails() {
        let (db, ..) = boxes();
        let mut ui = Chooser::answering(None);
        let err = select::<Bin, _>(&db, &mut ui, "B", "edit").unwrap_err();
        assert!(matches!(err, ShelfwiseError::Cancelled));
    }

    #[test]
    fn numeric_token_falls_back_to_id() {
        let (db, _, _, _, c) = boxes();
        let mut ui = Chooser::answering(None);
        let idx = select::<Bin, _>(&db, &mut ui, &c.to_string(), "show").unwrap();
        assert_eq!(db.boxes[idx].id, c);
        assert!(ui.calls.is_empty());
    }

    #[test]
    fn name_shadows_numeric_id() {
        let (mut db, a, ..) = boxes();
        let named = db.boxes.create(&mut db.ids, a.to_string(), Bin::default()).unwrap();
        let mut ui = Chooser::answering(None);
        let idx = select::<Bin, _>(&db, &mut ui, &a.to_string(), "show").unwrap();
        assert_eq!(db.boxes[idx].id, named);
    }

    #[test]
    fn name_match_is_case_sensitive() {
        let (db, ..) = boxes();
        let mut ui = Chooser::answering(None);
        let err = select::<Bin, _>(&db, &mut ui, "a", "show").unwrap_err();
        assert_eq!(err.to_string(), "No box with name/ID \"a\" found.");
    }

    #[test]
    fn unknown_or_deleted_ids_fail() {
        let (mut db, a, ..) = boxes();
        let mut ui = Chooser::answering(None);
        assert!(select::<Bin, _>(&db, &mut ui, "999", "show").is_err());

        db.boxes.soft_delete(a);
        assert!(select::<Bin, _>(&db, &mut ui, &a.to_string(), "show").is_err());
        assert!(select::<Bin, _>(&db, &mut ui, "A", "show").is_err());
    }

    #[test]
    fn ids_of_other_kinds_do_not_resolve() {
        let (mut db, ..) = boxes();
        let wh = db.warehouses.add_simple(&mut db.ids, "WH1").unwrap();
        let mut ui = Chooser::answering(None);
        assert!(select::<Bin, _>(&db, &mut ui, &wh.to_string(), "show").is_err());
    }
}
