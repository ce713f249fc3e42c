//! # Storage Layer
//!
//! The whole inventory is one JSON document. The [`DataStore`] trait hides
//! where that document lives so the API layer can run against a file in
//! production and against memory in tests.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: a JSON file in the shelfwise home directory
//!   - an absent file loads as an empty [`Database`]
//!   - a malformed file is fatal ([`crate::error::ShelfwiseError::Corrupt`])
//!   - writes go to a sibling temp file that is then renamed over the target
//!
//! - [`memory::InMemoryStore`]: keeps the serialized document in memory
//!   - same JSON round trip as the file store, no filesystem
//!
//! ## Document Format
//!
//! ```text
//! {
//!   "currentWarehouseid": 1,
//!   "warehouses": [ { "id": 1, "name": "Home", ..., "data": { "location": "" } } ],
//!   "rooms": [...], "shelves": [...], "boxes": [...], "items": [...],
//!   "categories": [...], "tags": [...]
//! }
//! ```
//!
//! Both implementations reset the ID counter from the loaded records
//! ([`Database::restore_ids`]), so the counter is never trusted from disk.

use crate::database::Database;
use crate::error::{Result, ShelfwiseError};
use serde::de::Error as _;
use std::path::Path;

pub mod fs;
pub mod memory;

/// Whole-document persistence for a [`Database`].
pub trait DataStore {
    /// Loads the database. A store that has never been saved yields an empty one.
    fn load(&self) -> Result<Database>;

    /// Replaces the stored document with `db`.
    fn save(&mut self, db: &Database) -> Result<()>;

    /// Human-readable location of the document.
    fn location(&self) -> String;
}

/// Parses a stored document and resets the ID counter.
///
/// The top level must be a JSON object; anything else is [`ShelfwiseError::Corrupt`].
pub(crate) fn parse_document(content: &str, location: &Path) -> Result<Database> {
    let corrupt = |e| ShelfwiseError::Corrupt(location.to_path_buf(), e);
    let value: serde_json::Value = serde_json::from_str(content).map_err(corrupt)?;
    if !value.is_object() {
        return Err(corrupt(serde_json::Error::custom(
            "expected an object at the top level",
        )));
    }
    let mut db: Database = serde_json::from_value(value).map_err(corrupt)?;
    db.restore_ids();
    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_level_must_be_an_object() {
        for content in ["[]", "null", "3", "\"inventory\""] {
            let err = parse_document(content, Path::new("inventory.json")).unwrap_err();
            assert!(matches!(err, ShelfwiseError::Corrupt(..)), "{content}");
        }
    }

    #[test]
    fn test_empty_object_is_an_empty_database() {
        let db = parse_document("{}", Path::new("inventory.json")).unwrap();
        assert_eq!(db, Database::new());
    }
}
