//! Listings and item search.

use crate::commands::CmdResult;
use crate::database::Database;
use crate::dispatch::with_payload;
use crate::error::{Result, ShelfwiseError};
use crate::model::{Bin, Category, Item, Kind, Payload, Record};
use crate::prompt::Prompt;
use crate::resolve::select;
use crate::view::Listing;

/// Narrowing options for [`run`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    /// Only records carrying this tag (matched ignoring case).
    pub tag: Option<String>,
    /// Only items in this box. Items only.
    pub bin: Option<String>,
    /// Only items of this category. Items only.
    pub category: Option<String>,
}

pub fn run<U: Prompt>(
    db: &Database,
    ui: &mut U,
    kind: Kind,
    filter: &ListFilter,
    sort_by_name: bool,
) -> Result<CmdResult> {
    let tag_id = match &filter.tag {
        Some(name) => Some(
            db.tags
                .first_by_name_ci(name)
                .ok_or_else(|| ShelfwiseError::not_found(Kind::Tag, name.as_str()))?,
        ),
        None => None,
    };

    if kind != Kind::Item && (filter.bin.is_some() || filter.category.is_some()) {
        return Err(ShelfwiseError::Api(
            "--box and --category only apply to items".to_string(),
        ));
    }

    let listing = if kind == Kind::Item {
        let box_id = match &filter.bin {
            Some(token) => Some(db.boxes[select::<Bin, U>(db, ui, token, "show")?].id),
            None => None,
        };
        let category_id = match &filter.category {
            Some(token) => Some(db.categories[select::<Category, U>(db, ui, token, "show")?].id),
            None => None,
        };
        let records = db.items.listing(
            |r| {
                tag_id.map_or(true, |t| r.has_tag(t))
                    && box_id.map_or(true, |b| r.data.box_id == b)
                    && category_id.map_or(true, |c| r.data.category_id == c)
            },
            sort_by_name,
        );
        Listing::of(db, &records)
    } else {
        with_payload!(kind, P => tagged::<P>(db, tag_id, sort_by_name))
    };

    Ok(CmdResult::default().with_listing(listing))
}

fn tagged<P: Payload>(db: &Database, tag_id: Option<u32>, sort_by_name: bool) -> Listing {
    let records = P::table(db).listing(|r| tag_id.map_or(true, |t| r.has_tag(t)), sort_by_name);
    Listing::of(db, &records)
}

/// Items whose name, description or location contain `term`, ignoring case.
pub fn find(db: &Database, term: &str, sort_by_name: bool) -> Result<CmdResult> {
    let needle = term.to_lowercase();
    let records = db
        .items
        .listing(|r| item_matches(r, &needle), sort_by_name);
    Ok(CmdResult::default().with_listing(Listing::of(db, &records)))
}

fn item_matches(record: &Record<Item>, needle: &str) -> bool {
    [
        &record.name,
        &record.description,
        &record.data.location,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}
