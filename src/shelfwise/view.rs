//! Display-ready projections of records.
//!
//! Commands return these instead of records so the CLI never needs the
//! database to render output. Cells are untruncated; width handling is the
//! printer's job.

use crate::database::Database;
use crate::model::{Column, Kind, Payload, Record};
use chrono::{Local, TimeZone};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRow {
    pub id: u32,
    /// Display name (with `*` / `(deleted)` markers).
    pub name: String,
    pub cells: Vec<String>,
    pub updated: i64,
}

/// One table's worth of rows with the payload's column layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub kind: Kind,
    pub columns: &'static [Column],
    pub rows: Vec<ListingRow>,
}

impl Listing {
    pub fn of<P: Payload>(db: &Database, records: &[&Record<P>]) -> Self {
        let rows = records
            .iter()
            .map(|r| ListingRow {
                id: r.id,
                name: db.display_name(r),
                cells: r.data.row(r.id, db),
                updated: r.updated,
            })
            .collect();
        Self {
            kind: P::KIND,
            columns: P::columns(),
            rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Everything shown for a single record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub kind: Kind,
    pub id: u32,
    pub name: String,
    pub description: String,
    pub tags: String,
    pub created: i64,
    pub updated: i64,
    pub fields: Vec<(&'static str, String)>,
}

impl DetailView {
    pub fn of<P: Payload>(db: &Database, record: &Record<P>) -> Self {
        Self {
            kind: P::KIND,
            id: record.id,
            name: db.display_name(record),
            description: record.description.clone(),
            tags: db.render_tag_list(&record.tags),
            created: record.created,
            updated: record.updated,
            fields: record.data.details(db),
        }
    }
}

/// Local `YYYY-MM-DD HH:MM:SS`, or an empty string for out-of-range stamps.
pub fn format_timestamp(secs: i64) -> String {
    Local
        .timestamp_opt(secs, 0)
        .single()
        .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn listing_renders_hierarchy_columns() {
        let fixture = StoreFixture::new().with_hierarchy();
        let db = &fixture.db;
        let records: Vec<_> = db.items.listing(|_| true, false);
        let listing = Listing::of(db, &records);

        assert_eq!(listing.kind, Kind::Item);
        assert_eq!(listing.columns.len(), 6);
        assert_eq!(listing.rows.len(), 1);
        assert_eq!(
            listing.rows[0].cells,
            vec!["1", "not found", "B1", "S1", "R1", "WH1*"]
        );
    }

    #[test]
    fn detail_view_collects_tags_and_fields() {
        let mut db = StoreFixture::new().with_hierarchy().db;
        let tag = db.resolve_or_create_tag("heavy").unwrap();
        db.items[0].tags.push(tag);
        db.items[0].description = "claw".into();

        let view = DetailView::of(&db, &db.items[0]);
        assert_eq!(view.name, "Hammer");
        assert_eq!(view.tags, "heavy");
        assert_eq!(view.description, "claw");
        assert!(view.fields.contains(&("Box", "B1".to_string())));
    }

    #[test]
    fn timestamps_have_fixed_shape() {
        let formatted = format_timestamp(1_700_000_000);
        assert_eq!(formatted.len(), 19);
        assert_eq!(&formatted[4..5], "-");
        assert_eq!(&formatted[13..14], ":");
    }
}
