use super::{parse_document, DataStore};
use crate::database::Database;
use crate::error::{Result, ShelfwiseError};
use std::path::Path;

const MEMORY_LOCATION: &str = "<memory>";

/// In-memory storage for testing and development.
///
/// Keeps the serialized document rather than the value, so loads go through
/// the same JSON round trip and ID recovery as [`super::fs::FileStore`].
#[derive(Debug, Default)]
pub struct InMemoryStore {
    document: Option<String>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from a raw JSON document.
    pub fn from_json(document: impl Into<String>) -> Self {
        Self {
            document: Some(document.into()),
            saves: 0,
        }
    }

    /// Number of completed saves.
    pub fn saves(&self) -> usize {
        self.saves
    }

    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Database> {
        let Some(document) = &self.document else {
            return Ok(Database::new());
        };
        parse_document(document, Path::new(MEMORY_LOCATION))
    }

    fn save(&mut self, db: &Database) -> Result<()> {
        self.document = Some(serde_json::to_string(db).map_err(ShelfwiseError::Serialization)?);
        self.saves += 1;
        Ok(())
    }

    fn location(&self) -> String {
        MEMORY_LOCATION.to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Bin, Item, Room, Shelf};

    /// IDs of the records created by [`StoreFixture::with_hierarchy`].
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct HierarchyIds {
        pub warehouse: u32,
        pub room: u32,
        pub shelf: u32,
        pub bin: u32,
        pub item: u32,
    }

    /// Builds a database and saves it into an [`InMemoryStore`].
    pub struct StoreFixture {
        pub db: Database,
        pub ids: HierarchyIds,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                db: Database::new(),
                ids: HierarchyIds::default(),
            }
        }

        /// Warehouse "WH1" (current) → room "R1" → shelf "S1" → box "B1" → item "Hammer".
        pub fn with_hierarchy(mut self) -> Self {
            let db = &mut self.db;
            let warehouse = db.warehouses.add_simple(&mut db.ids, "WH1").unwrap();
            db.current_warehouse = warehouse;
            let room = db
                .rooms
                .create(
                    &mut db.ids,
                    "R1",
                    Room {
                        warehouse_id: warehouse,
                        ..Room::default()
                    },
                )
                .unwrap();
            let shelf = db
                .shelves
                .create(
                    &mut db.ids,
                    "S1",
                    Shelf {
                        room_id: room,
                        ..Shelf::default()
                    },
                )
                .unwrap();
            let bin = db
                .boxes
                .create(
                    &mut db.ids,
                    "B1",
                    Bin {
                        shelf_id: shelf,
                        ..Bin::default()
                    },
                )
                .unwrap();
            let item = db
                .items
                .create(
                    &mut db.ids,
                    "Hammer",
                    Item {
                        box_id: bin,
                        amount: 1,
                        ..Item::default()
                    },
                )
                .unwrap();
            self.ids = HierarchyIds {
                warehouse,
                room,
                shelf,
                bin,
                item,
            };
            self
        }

        pub fn with_categories(mut self, names: &[&str]) -> Self {
            for name in names {
                self.db.categories.add_simple(&mut self.db.ids, *name).unwrap();
            }
            self
        }

        pub fn build(self) -> InMemoryStore {
            let mut store = InMemoryStore::new();
            store
                .save(&self.db)
                .expect("in-memory save cannot fail for a valid database");
            store.saves = 0;
            store
        }
    }
}
