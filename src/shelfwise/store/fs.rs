use super::{parse_document, DataStore};
use crate::database::Database;
use crate::error::{Result, ShelfwiseError};
use std::fs;
use std::path::{Path, PathBuf};

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(ShelfwiseError::Io)?;
            }
        }
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Database> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no data file, starting empty");
            return Ok(Database::new());
        }
        let content = fs::read_to_string(&self.path).map_err(ShelfwiseError::Io)?;
        let db = parse_document(&content, &self.path)?;
        tracing::debug!(path = %self.path.display(), "loaded database");
        Ok(db)
    }

    fn save(&mut self, db: &Database) -> Result<()> {
        self.ensure_parent()?;
        let content = serde_json::to_string_pretty(db).map_err(ShelfwiseError::Serialization)?;

        let temp = self.temp_path();
        fs::write(&temp, content).map_err(ShelfwiseError::Io)?;
        fs::rename(&temp, &self.path).map_err(ShelfwiseError::Io)?;
        tracing::debug!(path = %self.path.display(), "saved database");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Bin, Item};
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("inventory.json"));
        let db = store.load().unwrap();
        assert_eq!(db, Database::new());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested").join("inventory.json"));

        let mut db = Database::new();
        let wh = db.warehouses.add_simple(&mut db.ids, "Home").unwrap();
        db.current_warehouse = wh;
        let bin = db
            .boxes
            .create(
                &mut db.ids,
                "Crate",
                Bin {
                    kind: "wood".into(),
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
        db.items.soft_delete(item);
        store.save(&db).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, db);
        assert_eq!(loaded.ids.last(), item);
        assert!(!store.temp_path().exists());
    }

    #[test]
    fn test_load_resets_counter_from_records() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        fs::write(
            &path,
            r#"{"currentWarehouseid":0,"lastId":2,
               "items":[{"id":40,"name":"x","description":"","created":0,"updated":0,
                         "deleted":true,"tags":null,"data":{"boxId":0}}]}"#,
        )
        .unwrap();

        let mut db = FileStore::new(&path).load().unwrap();
        assert_eq!(db.categories.add_simple(&mut db.ids, "Tools").unwrap(), 41);
    }

    #[test]
    fn test_malformed_file_is_corrupt() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        fs::write(&path, "{\"warehouses\": [").unwrap();

        let err = FileStore::new(&path).load().unwrap_err();
        assert!(matches!(err, ShelfwiseError::Corrupt(p, _) if p == path));
    }

    #[test]
    fn test_array_document_is_corrupt() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        fs::write(&path, "[]").unwrap();

        let err = FileStore::new(&path).load().unwrap_err();
        assert!(matches!(err, ShelfwiseError::Corrupt(p, _) if p == path));
    }

    #[test]
    fn test_save_replaces_previous_document() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("inventory.json"));
        let mut db = Database::new();
        db.warehouses.add_simple(&mut db.ids, "Old").unwrap();
        store.save(&db).unwrap();

        db.warehouses[0].name = "New".into();
        store.save(&db).unwrap();
        let content = fs::read_to_string(store.path()).unwrap();
        assert!(content.contains("New"));
        assert!(!content.contains("Old"));
    }
}
