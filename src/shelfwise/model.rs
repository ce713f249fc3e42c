//! Core data types.
//!
//! Every stored object is a [`Record`]: a uniform envelope (id, name,
//! description, timestamps, deleted flag, tags) around a kind-specific
//! payload. The payload types are plain structs implementing [`Payload`],
//! which is the only place kind-specific knowledge lives: how a kind is
//! listed, shown, and edited.

use crate::database::Database;
use crate::error::{Result, ShelfwiseError};
use crate::table::Table;
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Name given to records created without one.
pub const UNNAMED: &str = "Unnamed";

/// The seven entity kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Warehouse,
    Room,
    Shelf,
    Box,
    Item,
    Category,
    Tag,
}

impl Kind {
    /// Capitalized form used in headings and messages that start a sentence.
    pub fn label(&self) -> &'static str {
        match self {
            Kind::Warehouse => "Warehouse",
            Kind::Room => "Room",
            Kind::Shelf => "Shelf",
            Kind::Box => "Box",
            Kind::Item => "Item",
            Kind::Category => "Category",
            Kind::Tag => "Tag",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label().to_lowercase())
    }
}

/// Seconds since the epoch, the resolution records are stamped with.
pub fn now() -> i64 {
    Utc::now().timestamp()
}

/// A listing column: header text and display width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub header: &'static str,
    pub width: usize,
}

const fn col(header: &'static str, width: usize) -> Column {
    Column { header, width }
}

/// Kind-specific part of a record.
///
/// Rendering hooks receive the whole [`Database`] so references to other
/// records can be shown by name.
pub trait Payload: Clone + Default + fmt::Debug + Serialize + DeserializeOwned {
    const KIND: Kind;

    /// The table holding records of this kind.
    fn table(db: &Database) -> &Table<Self>;

    fn table_mut(db: &mut Database) -> &mut Table<Self>;

    /// Parent reference, `0` for kinds without a parent or when unset.
    fn parent_id(&self) -> u32 {
        0
    }

    /// Extra listing columns after ID and name.
    fn columns() -> &'static [Column] {
        &[]
    }

    /// Cell values for [`Payload::columns`], untruncated.
    fn row(&self, _own_id: u32, _db: &Database) -> Vec<String> {
        Vec::new()
    }

    /// Labelled values for the detail view.
    fn details(&self, _db: &Database) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    /// Editable fields as `(key, value)` pairs, in form order.
    fn form_fields(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    /// Writes one form field back. Unknown keys and unparsable values fail.
    fn set_form_field(&mut self, key: &str, _value: &str) -> Result<()> {
        Err(unknown_field(Self::KIND, key))
    }

    /// Form key holding the parent reference, if the kind has a parent.
    fn parent_field() -> Option<&'static str> {
        None
    }
}

fn unknown_field(kind: Kind, key: &str) -> ShelfwiseError {
    ShelfwiseError::Api(format!("{} has no field \"{}\"", kind.label(), key))
}

fn parse_ref(key: &str, value: &str) -> Result<u32> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(0);
    }
    value
        .parse()
        .map_err(|_| ShelfwiseError::Api(format!("{}: \"{}\" is not an ID", key, value)))
}

/// The uniform envelope around every stored object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record<P> {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub created: i64,
    pub updated: i64,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<u32>,
    pub data: P,
}

impl<P: Payload> Record<P> {
    /// Creates a record with the given ID, stamping both timestamps.
    pub fn new(id: u32, name: impl Into<String>, data: P) -> Self {
        let now = now();
        Self {
            id,
            name: name.into(),
            description: String::new(),
            created: now,
            updated: now,
            deleted: false,
            tags: Vec::new(),
            data,
        }
    }

    pub fn touch(&mut self) {
        self.updated = now();
    }

    pub fn has_tag(&self, tag_id: u32) -> bool {
        self.tags.contains(&tag_id)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<u32>>::deserialize(deserializer)?.unwrap_or_default())
}

/// An `(id, name)` pair, used for sorted name lists and form options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListEntry {
    pub id: u32,
    pub name: String,
}

impl ListEntry {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warehouse {
    #[serde(default)]
    pub location: String,
}

impl Payload for Warehouse {
    const KIND: Kind = Kind::Warehouse;

    fn table(db: &Database) -> &Table<Self> {
        &db.warehouses
    }

    fn table_mut(db: &mut Database) -> &mut Table<Self> {
        &mut db.warehouses
    }

    fn details(&self, _db: &Database) -> Vec<(&'static str, String)> {
        vec![("Location", self.location.clone())]
    }

    fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![("location", self.location.clone())]
    }

    fn set_form_field(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "location" => self.location = value.to_string(),
            _ => return Err(unknown_field(Self::KIND, key)),
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    #[serde(default)]
    pub location: String,
    #[serde(rename = "warehouseId", default)]
    pub warehouse_id: u32,
}

impl Payload for Room {
    const KIND: Kind = Kind::Room;

    fn table(db: &Database) -> &Table<Self> {
        &db.rooms
    }

    fn table_mut(db: &mut Database) -> &mut Table<Self> {
        &mut db.rooms
    }

    fn parent_id(&self) -> u32 {
        self.warehouse_id
    }

    fn columns() -> &'static [Column] {
        const COLUMNS: &[Column] = &[col("Warehouse", 20)];
        COLUMNS
    }

    fn row(&self, _own_id: u32, db: &Database) -> Vec<String> {
        vec![db.name_of(&db.warehouses, self.warehouse_id)]
    }

    fn details(&self, db: &Database) -> Vec<(&'static str, String)> {
        vec![
            ("Location", self.location.clone()),
            ("Warehouse", db.name_of(&db.warehouses, self.warehouse_id)),
        ]
    }

    fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("location", self.location.clone()),
            ("warehouse", self.warehouse_id.to_string()),
        ]
    }

    fn set_form_field(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "location" => self.location = value.to_string(),
            "warehouse" => self.warehouse_id = parse_ref(key, value)?,
            _ => return Err(unknown_field(Self::KIND, key)),
        }
        Ok(())
    }

    fn parent_field() -> Option<&'static str> {
        Some("warehouse")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shelf {
    #[serde(default)]
    pub location: String,
    #[serde(rename = "roomId", default)]
    pub room_id: u32,
}

impl Payload for Shelf {
    const KIND: Kind = Kind::Shelf;

    fn table(db: &Database) -> &Table<Self> {
        &db.shelves
    }

    fn table_mut(db: &mut Database) -> &mut Table<Self> {
        &mut db.shelves
    }

    fn parent_id(&self) -> u32 {
        self.room_id
    }

    fn columns() -> &'static [Column] {
        const COLUMNS: &[Column] = &[col("Room", 20), col("Warehouse", 20)];
        COLUMNS
    }

    fn row(&self, _own_id: u32, db: &Database) -> Vec<String> {
        vec![
            db.name_of(&db.rooms, self.room_id),
            db.name_of(&db.warehouses, db.warehouse_of_room(self.room_id)),
        ]
    }

    fn details(&self, db: &Database) -> Vec<(&'static str, String)> {
        vec![
            ("Location", self.location.clone()),
            ("Room", db.name_of(&db.rooms, self.room_id)),
        ]
    }

    fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("location", self.location.clone()),
            ("room", self.room_id.to_string()),
        ]
    }

    fn set_form_field(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "location" => self.location = value.to_string(),
            "room" => self.room_id = parse_ref(key, value)?,
            _ => return Err(unknown_field(Self::KIND, key)),
        }
        Ok(())
    }

    fn parent_field() -> Option<&'static str> {
        Some("room")
    }
}

/// A box standing on a shelf.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bin {
    #[serde(default)]
    pub location: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(rename = "shelfId", default)]
    pub shelf_id: u32,
}

impl Payload for Bin {
    const KIND: Kind = Kind::Box;

    fn table(db: &Database) -> &Table<Self> {
        &db.boxes
    }

    fn table_mut(db: &mut Database) -> &mut Table<Self> {
        &mut db.boxes
    }

    fn parent_id(&self) -> u32 {
        self.shelf_id
    }

    fn columns() -> &'static [Column] {
        const COLUMNS: &[Column] = &[col("Shelf", 20), col("Room", 20), col("Warehouse", 20)];
        COLUMNS
    }

    fn row(&self, _own_id: u32, db: &Database) -> Vec<String> {
        let room_id = db.room_of_shelf(self.shelf_id);
        vec![
            db.name_of(&db.shelves, self.shelf_id),
            db.name_of(&db.rooms, room_id),
            db.name_of(&db.warehouses, db.warehouse_of_room(room_id)),
        ]
    }

    fn details(&self, db: &Database) -> Vec<(&'static str, String)> {
        vec![
            ("Location", self.location.clone()),
            ("Type", self.kind.clone()),
            ("Shelf", db.name_of(&db.shelves, self.shelf_id)),
        ]
    }

    fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("location", self.location.clone()),
            ("type", self.kind.clone()),
            ("shelf", self.shelf_id.to_string()),
        ]
    }

    fn set_form_field(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "location" => self.location = value.to_string(),
            "type" => self.kind = value.to_string(),
            "shelf" => self.shelf_id = parse_ref(key, value)?,
            _ => return Err(unknown_field(Self::KIND, key)),
        }
        Ok(())
    }

    fn parent_field() -> Option<&'static str> {
        Some("shelf")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub condition: String,
    #[serde(default)]
    pub amount: i64,
    #[serde(rename = "boxId", default)]
    pub box_id: u32,
    #[serde(rename = "categoryId", default)]
    pub category_id: u32,
}

impl Payload for Item {
    const KIND: Kind = Kind::Item;

    fn table(db: &Database) -> &Table<Self> {
        &db.items
    }

    fn table_mut(db: &mut Database) -> &mut Table<Self> {
        &mut db.items
    }

    fn parent_id(&self) -> u32 {
        self.box_id
    }

    fn columns() -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            col("Amnt", 5),
            col("Category", 15),
            col("Box", 15),
            col("Shelf", 20),
            col("Room", 20),
            col("Warehouse", 20),
        ];
        COLUMNS
    }

    fn row(&self, _own_id: u32, db: &Database) -> Vec<String> {
        let shelf_id = db.shelf_of_box(self.box_id);
        let room_id = db.room_of_shelf(shelf_id);
        vec![
            self.amount.to_string(),
            db.name_of(&db.categories, self.category_id),
            db.name_of(&db.boxes, self.box_id),
            db.name_of(&db.shelves, shelf_id),
            db.name_of(&db.rooms, room_id),
            db.name_of(&db.warehouses, db.warehouse_of_room(room_id)),
        ]
    }

    fn details(&self, db: &Database) -> Vec<(&'static str, String)> {
        vec![
            ("Location", self.location.clone()),
            ("Condition", self.condition.clone()),
            ("Amount", self.amount.to_string()),
            ("Box", db.name_of(&db.boxes, self.box_id)),
            ("Category", db.name_of(&db.categories, self.category_id)),
        ]
    }

    fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("location", self.location.clone()),
            ("condition", self.condition.clone()),
            ("amount", self.amount.to_string()),
            ("box", self.box_id.to_string()),
            ("category", self.category_id.to_string()),
        ]
    }

    fn set_form_field(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "location" => self.location = value.to_string(),
            "condition" => self.condition = value.to_string(),
            "amount" => {
                self.amount = value.trim().parse().map_err(|_| {
                    ShelfwiseError::Api(format!("amount: \"{}\" is not a number", value.trim()))
                })?
            }
            "box" => self.box_id = parse_ref(key, value)?,
            "category" => self.category_id = parse_ref(key, value)?,
            _ => return Err(unknown_field(Self::KIND, key)),
        }
        Ok(())
    }

    fn parent_field() -> Option<&'static str> {
        Some("box")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {}

impl Payload for Category {
    const KIND: Kind = Kind::Category;

    fn table(db: &Database) -> &Table<Self> {
        &db.categories
    }

    fn table_mut(db: &mut Database) -> &mut Table<Self> {
        &mut db.categories
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {}

impl Payload for Tag {
    const KIND: Kind = Kind::Tag;

    fn table(db: &Database) -> &Table<Self> {
        &db.tags
    }

    fn table_mut(db: &mut Database) -> &mut Table<Self> {
        &mut db.tags
    }

    fn columns() -> &'static [Column] {
        const COLUMNS: &[Column] = &[col("Uses", 4)];
        COLUMNS
    }

    fn row(&self, own_id: u32, db: &Database) -> Vec<String> {
        vec![db.count_tag_uses(own_id).to_string()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serializes_with_document_keys() {
        let record = Record::new(
            7,
            "Crate",
            Bin {
                location: "attic".into(),
                kind: "plastic".into(),
                shelf_id: 3,
            },
        );
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["data"]["shelfId"], 3);
        assert_eq!(json["data"]["type"], "plastic");
        assert_eq!(json["tags"], serde_json::json!([]));
    }

    #[test]
    fn null_tags_load_as_empty() {
        let json = r#"{"id":1,"name":"fragile","description":"","created":0,"updated":0,
            "deleted":false,"tags":null,"data":{}}"#;
        let record: Record<Tag> = serde_json::from_str(json).unwrap();
        assert!(record.tags.is_empty());
    }

    #[test]
    fn item_form_fields_round_trip_through_setters() {
        let mut item = Item::default();
        item.set_form_field("amount", " 12 ").unwrap();
        item.set_form_field("box", "4").unwrap();
        item.set_form_field("category", "").unwrap();
        assert_eq!(item.amount, 12);
        assert_eq!(item.box_id, 4);
        assert_eq!(item.category_id, 0);
    }

    #[test]
    fn bad_reference_is_rejected() {
        let mut room = Room::default();
        assert!(room.set_form_field("warehouse", "main").is_err());
        assert!(room.set_form_field("colour", "red").is_err());
    }

    #[test]
    fn kind_display_is_lowercase() {
        assert_eq!(Kind::Box.to_string(), "box");
        assert_eq!(Kind::Box.label(), "Box");
    }
}
