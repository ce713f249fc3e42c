//! # The Database Aggregate
//!
//! [`Database`] holds one [`Table`] per entity kind, the active warehouse,
//! and the [`IdRegistry`] all tables draw IDs from. It is an ordinary value:
//! the API layer owns one, loads it through a [`crate::store::DataStore`] at
//! startup and hands it back to the store after every mutation.
//!
//! Behaviour that spans several tables lives in sibling modules as further
//! `impl Database` blocks:
//! - [`crate::hierarchy`]: parent-reference chasing
//! - [`crate::tags`]: tag attachment and usage counting
//! - [`crate::dispatch`]: finding the table that owns a bare ID

use crate::id::IdRegistry;
use crate::model::{Bin, Category, Item, Payload, Record, Room, Shelf, Tag, Warehouse};
use crate::table::Table;
use serde::{Deserialize, Serialize};

/// Rendered in place of a reference that does not resolve.
pub const NOT_FOUND: &str = "not found";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Database {
    /// Active warehouse, `0` when none is selected. May point at a deleted
    /// or missing warehouse; see [`Database::current_warehouse`].
    #[serde(rename = "currentWarehouseid", default)]
    pub current_warehouse: u32,
    #[serde(default)]
    pub warehouses: Table<Warehouse>,
    #[serde(default)]
    pub rooms: Table<Room>,
    #[serde(default)]
    pub shelves: Table<Shelf>,
    #[serde(default)]
    pub boxes: Table<Bin>,
    #[serde(default)]
    pub items: Table<Item>,
    #[serde(default)]
    pub categories: Table<Category>,
    #[serde(default)]
    pub tags: Table<Tag>,
    #[serde(skip)]
    pub ids: IdRegistry,
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }

    /// Highest record ID across every table, deleted records included.
    pub fn last_id(&self) -> u32 {
        [
            self.tags.max_id(),
            self.categories.max_id(),
            self.warehouses.max_id(),
            self.rooms.max_id(),
            self.shelves.max_id(),
            self.boxes.max_id(),
            self.items.max_id(),
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
    }

    /// Re-derives the ID counter from the stored records. Called after every load.
    pub fn restore_ids(&mut self) {
        let last = self.last_id();
        tracing::debug!(last_id = last, "id registry reset");
        self.ids.reset(last);
    }

    /// The active warehouse, if it is set and still live.
    pub fn current_warehouse(&self) -> Option<&Record<Warehouse>> {
        if self.current_warehouse == 0 {
            return None;
        }
        self.warehouses.get(self.current_warehouse)
    }

    /// Name decorated with `*` for the active warehouse and `(deleted)` for
    /// soft-deleted records.
    pub fn display_name<P: Payload>(&self, record: &Record<P>) -> String {
        let selected = if record.id == self.current_warehouse {
            "*"
        } else {
            ""
        };
        let deleted = if record.deleted { "(deleted)" } else { "" };
        format!("{}{}{}", record.name, selected, deleted)
    }

    /// Display name of the live record `id` in `table`, or `"not found"`.
    pub fn name_of<P: Payload>(&self, table: &Table<P>, id: u32) -> String {
        table
            .get(id)
            .map(|r| self.display_name(r))
            .unwrap_or_else(|| NOT_FOUND.to_string())
    }
}
