//! # Tag Index
//!
//! Tags are ordinary records in the tag table; other records refer to them by
//! ID in their `tags` list. Tags are created on first use: any name handed
//! to [`Database::resolve_or_create_tag`] that does not match an existing tag
//! (ignoring case) becomes a new tag. This includes free-text tag fields in
//! edit forms, see [`Database::resolve_tag_list`].
//!
//! Usage counting deliberately scans raw table contents, so soft-deleted
//! records keep counting towards a tag's uses even though they can no longer
//! be looked up.

use crate::database::Database;
use crate::error::{Result, ShelfwiseError};
use crate::model::{Kind, Payload};
use crate::table::Table;

/// Result of an attach or detach request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagOutcome {
    Attached,
    AlreadyTagged,
    Detached,
    NotTagged,
}

impl TagOutcome {
    /// Whether the record was modified.
    pub fn changed(&self) -> bool {
        matches!(self, TagOutcome::Attached | TagOutcome::Detached)
    }

    pub fn describe(&self, kind: Kind, record_name: &str, tag_name: &str) -> String {
        match self {
            TagOutcome::Attached => format!(
                "Added tag \"{}\" to {} \"{}\"",
                tag_name,
                kind.label(),
                record_name
            ),
            TagOutcome::AlreadyTagged => format!(
                "{} \"{}\" is already tagged with \"{}\"",
                kind.label(),
                record_name,
                tag_name
            ),
            TagOutcome::Detached => format!(
                "Removed tag \"{}\" from {} \"{}\"",
                tag_name,
                kind.label(),
                record_name
            ),
            TagOutcome::NotTagged => format!(
                "{} \"{}\" is not tagged with \"{}\"",
                kind.label(),
                record_name,
                tag_name
            ),
        }
    }
}

/// Appends `tag_id` to the record at `idx` unless it is already there.
pub fn attach<P: Payload>(table: &mut Table<P>, idx: usize, tag_id: u32) -> TagOutcome {
    if table.attach_tag(idx, tag_id) {
        TagOutcome::Attached
    } else {
        TagOutcome::AlreadyTagged
    }
}

/// Removes `tag_id` from the record at `idx`, keeping the order of the others.
pub fn detach<P: Payload>(table: &mut Table<P>, idx: usize, tag_id: u32) -> TagOutcome {
    if table.detach_tag(idx, tag_id) {
        TagOutcome::Detached
    } else {
        TagOutcome::NotTagged
    }
}

impl Database {
    /// ID of the tag named `name` (ignoring case), creating the tag if needed.
    /// A blank name is rejected.
    pub fn resolve_or_create_tag(&mut self, name: &str) -> Result<u32> {
        if name.trim().is_empty() {
            return Err(ShelfwiseError::Api("Tag names cannot be empty".to_string()));
        }
        if let Some(id) = self.tags.first_by_name_ci(name) {
            return Ok(id);
        }
        let id = self.tags.add_simple(&mut self.ids, name)?;
        tracing::debug!(tag = name, id, "created tag");
        Ok(id)
    }

    /// Number of records carrying `tag_id`, soft-deleted ones included.
    pub fn count_tag_uses(&self, tag_id: u32) -> usize {
        count_in(&self.categories, tag_id)
            + count_in(&self.warehouses, tag_id)
            + count_in(&self.rooms, tag_id)
            + count_in(&self.shelves, tag_id)
            + count_in(&self.boxes, tag_id)
            + count_in(&self.items, tag_id)
    }

    /// Comma-separated names of the live tags among `tag_ids`.
    pub fn render_tag_list(&self, tag_ids: &[u32]) -> String {
        tag_ids
            .iter()
            .filter_map(|id| self.tags.get(*id))
            .map(|t| t.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Resolves comma-separated tag names to IDs, creating unknown tags.
    pub fn resolve_tag_list(&mut self, names: &str) -> Result<Vec<u32>> {
        names
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(|name| self.resolve_or_create_tag(name))
            .collect()
    }
}

fn count_in<P: Payload>(table: &Table<P>, tag_id: u32) -> usize {
    table.iter().filter(|r| r.has_tag(tag_id)).count()
}
