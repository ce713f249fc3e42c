//! Parent-reference chasing along Warehouse ← Room ← Shelf ← Box ← Item.
//!
//! Every step is a single live lookup. A missing or soft-deleted link yields
//! `0` and every later step short-circuits on it, so callers never see an
//! error, only "unknown". The referenced parent itself is not re-checked:
//! a room pointing at a deleted warehouse still reports that warehouse's ID.

use crate::database::Database;
use crate::model::{ListEntry, Payload, Record};
use crate::table::Table;

impl Database {
    pub fn warehouse_of_room(&self, room_id: u32) -> u32 {
        self.rooms.get(room_id).map_or(0, |r| r.data.warehouse_id)
    }

    pub fn room_of_shelf(&self, shelf_id: u32) -> u32 {
        self.shelves.get(shelf_id).map_or(0, |s| s.data.room_id)
    }

    pub fn shelf_of_box(&self, box_id: u32) -> u32 {
        self.boxes.get(box_id).map_or(0, |b| b.data.shelf_id)
    }

    pub fn box_of_item(&self, item_id: u32) -> u32 {
        self.items.get(item_id).map_or(0, |i| i.data.box_id)
    }

    pub fn room_of_box(&self, box_id: u32) -> u32 {
        self.room_of_shelf(self.shelf_of_box(box_id))
    }

    pub fn warehouse_of_shelf(&self, shelf_id: u32) -> u32 {
        self.warehouse_of_room(self.room_of_shelf(shelf_id))
    }

    pub fn shelf_of_item(&self, item_id: u32) -> u32 {
        self.shelf_of_box(self.box_of_item(item_id))
    }

    /// Live rooms of a warehouse, in table order.
    pub fn rooms_of_warehouse(&self, warehouse_id: u32) -> Vec<ListEntry> {
        children(&self.rooms, |r| r.data.warehouse_id == warehouse_id)
    }

    /// Live shelves of a room, in table order.
    pub fn shelves_of_room(&self, room_id: u32) -> Vec<ListEntry> {
        children(&self.shelves, |s| s.data.room_id == room_id)
    }

    /// Live boxes on a shelf, sorted by name.
    pub fn boxes_of_shelf(&self, shelf_id: u32) -> Vec<ListEntry> {
        let mut boxes = children(&self.boxes, |b| b.data.shelf_id == shelf_id);
        boxes.sort_by(|a, b| a.name.cmp(&b.name));
        boxes
    }
}

fn children<P, F>(table: &Table<P>, is_child: F) -> Vec<ListEntry>
where
    P: Payload,
    F: Fn(&Record<P>) -> bool,
{
    table
        .live()
        .filter(|r| is_child(r))
        .map(|r| ListEntry::new(r.id, r.name.clone()))
        .collect()
}
