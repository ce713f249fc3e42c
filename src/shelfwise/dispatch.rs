//! Cross-table dispatch.
//!
//! IDs are unique across every table (see [`crate::id`]), so a bare ID is
//! enough to find both a record and its kind. [`Database::locate`] probes the
//! tables in a fixed order; the order only matters if the uniqueness
//! invariant has been broken by hand-editing, in which case categories win.
//!
//! Tags are not probed: they are addressed by name, never by bare ID.

use crate::database::Database;
use crate::model::Kind;

/// Kind and table position of a located record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub kind: Kind,
    pub index: usize,
}

impl Database {
    /// Finds the live record with `id` in any table except tags.
    pub fn locate(&self, id: u32) -> Option<Location> {
        let probes = [
            (Kind::Category, self.categories.index_of(id)),
            (Kind::Warehouse, self.warehouses.index_of(id)),
            (Kind::Room, self.rooms.index_of(id)),
            (Kind::Shelf, self.shelves.index_of(id)),
            (Kind::Box, self.boxes.index_of(id)),
            (Kind::Item, self.items.index_of(id)),
        ];
        probes
            .into_iter()
            .find_map(|(kind, index)| index.map(|index| Location { kind, index }))
    }
}

/// Runs `$body` with `$table` bound to the shared table of `$kind`.
macro_rules! with_table {
    ($db:expr, $kind:expr, |$table:ident| $body:expr) => {
        match $kind {
            $crate::model::Kind::Warehouse => {
                let $table = &$db.warehouses;
                $body
            }
            $crate::model::Kind::Room => {
                let $table = &$db.rooms;
                $body
            }
            $crate::model::Kind::Shelf => {
                let $table = &$db.shelves;
                $body
            }
            $crate::model::Kind::Box => {
                let $table = &$db.boxes;
                $body
            }
            $crate::model::Kind::Item => {
                let $table = &$db.items;
                $body
            }
            $crate::model::Kind::Category => {
                let $table = &$db.categories;
                $body
            }
            $crate::model::Kind::Tag => {
                let $table = &$db.tags;
                $body
            }
        }
    };
}

/// Like [`with_table!`] with a mutable table binding.
macro_rules! with_table_mut {
    ($db:expr, $kind:expr, |$table:ident| $body:expr) => {
        match $kind {
            $crate::model::Kind::Warehouse => {
                let $table = &mut $db.warehouses;
                $body
            }
            $crate::model::Kind::Room => {
                let $table = &mut $db.rooms;
                $body
            }
            $crate::model::Kind::Shelf => {
                let $table = &mut $db.shelves;
                $body
            }
            $crate::model::Kind::Box => {
                let $table = &mut $db.boxes;
                $body
            }
            $crate::model::Kind::Item => {
                let $table = &mut $db.items;
                $body
            }
            $crate::model::Kind::Category => {
                let $table = &mut $db.categories;
                $body
            }
            $crate::model::Kind::Tag => {
                let $table = &mut $db.tags;
                $body
            }
        }
    };
}

/// Runs `$body` with `$p` naming the payload type of `$kind`, for calling
/// generic code from a runtime kind.
macro_rules! with_payload {
    ($kind:expr, $p:ident => $body:expr) => {
        match $kind {
            $crate::model::Kind::Warehouse => {
                type $p = $crate::model::Warehouse;
                $body
            }
            $crate::model::Kind::Room => {
                type $p = $crate::model::Room;
                $body
            }
            $crate::model::Kind::Shelf => {
                type $p = $crate::model::Shelf;
                $body
            }
            $crate::model::Kind::Box => {
                type $p = $crate::model::Bin;
                $body
            }
            $crate::model::Kind::Item => {
                type $p = $crate::model::Item;
                $body
            }
            $crate::model::Kind::Category => {
                type $p = $crate::model::Category;
                $body
            }
            $crate::model::Kind::Tag => {
                type $p = $crate::model::Tag;
                $body
            }
        }
    };
}

pub(crate) use with_payload;
pub(crate) use with_table;
pub(crate) use with_table_mut;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Bin, Item, Payload};

    #[test]
    fn locates_records_of_every_probed_kind() {
        let mut db = Database::new();
        let wh = db.warehouses.add_simple(&mut db.ids, "WH1").unwrap();
        let cat = db.categories.add_simple(&mut db.ids, "Tools").unwrap();
        let bin = db.boxes.create(&mut db.ids, "B1", Bin::default()).unwrap();
        let item = db.items.create(&mut db.ids, "Hammer", Item::default()).unwrap();

        assert_eq!(db.locate(wh).unwrap().kind, Kind::Warehouse);
        assert_eq!(db.locate(cat).unwrap().kind, Kind::Category);
        assert_eq!(db.locate(bin).unwrap().kind, Kind::Box);
        let found = db.locate(item).unwrap();
        assert_eq!(found.kind, Kind::Item);
        assert_eq!(found.index, 0);
    }

    #[test]
    fn unused_and_deleted_ids_are_unknown() {
        let mut db = Database::new();
        let item = db.items.add_simple(&mut db.ids, "Hammer").unwrap();
        assert!(db.locate(db.ids.last() + 1).is_none());
        assert!(db.locate(0).is_none());

        db.items.soft_delete(item);
        assert!(db.locate(item).is_none());
    }

    #[test]
    fn tags_are_not_located() {
        let mut db = Database::new();
        let tag = db.tags.add_simple(&mut db.ids, "fragile").unwrap();
        assert!(db.locate(tag).is_none());
    }

    #[test]
    fn category_wins_when_ids_collide() {
        let mut db = Database::new();
        db.items.add_simple(&mut db.ids, "Hammer").unwrap();
        db.ids.reset(0);
        db.categories.add_simple(&mut db.ids, "Tools").unwrap();

        assert_eq!(db.locate(1).unwrap().kind, Kind::Category);
    }

    #[test]
    fn with_table_binds_the_right_table() {
        let mut db = Database::new();
        let bin = db.boxes.add_simple(&mut db.ids, "B1").unwrap();
        let loc = db.locate(bin).unwrap();
        let name = with_table!(db, loc.kind, |table| table[loc.index].name.clone());
        assert_eq!(name, "B1");

        with_table_mut!(db, loc.kind, |table| table[loc.index].name = "B2".into());
        assert_eq!(db.boxes[0].name, "B2");
    }

    #[test]
    fn with_payload_names_the_payload_type() {
        fn kind_of<P: Payload>() -> Kind {
            P::KIND
        }
        for kind in [Kind::Warehouse, Kind::Box, Kind::Tag] {
            assert_eq!(with_payload!(kind, P => kind_of::<P>()), kind);
        }
    }
}
