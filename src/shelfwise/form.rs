//! Editable projection of a record.
//!
//! A [`RecordForm`] carries everything an edit dialog needs: the common
//! fields, the tags as free text, and the payload fields. Reference fields
//! (the parent and, for items, the category) come with the list of valid
//! choices so the UI can offer them.

use crate::database::Database;
use crate::error::Result;
use crate::model::{Kind, ListEntry, Payload, Record, UNNAMED};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub key: String,
    pub value: String,
    /// Valid IDs for reference fields, empty for plain text fields.
    pub options: Vec<ListEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordForm {
    pub caption: String,
    pub kind: Kind,
    pub id: u32,
    pub name: String,
    pub description: String,
    /// Comma-separated tag names.
    pub tags: String,
    pub fields: Vec<FormField>,
}

impl RecordForm {
    pub fn from_record<P: Payload>(db: &Database, record: &Record<P>, caption: &str) -> Self {
        let parent_key = P::parent_field();
        let fields = record
            .data
            .form_fields()
            .into_iter()
            .map(|(key, value)| {
                let options = if Some(key) == parent_key {
                    db.parent_options(P::KIND, record.data.parent_id())
                } else if key == "category" {
                    db.categories.names_sorted()
                } else {
                    Vec::new()
                };
                FormField {
                    key: key.to_string(),
                    value,
                    options,
                }
            })
            .collect();

        Self {
            caption: caption.to_string(),
            kind: P::KIND,
            id: record.id,
            name: record.name.clone(),
            description: record.description.clone(),
            tags: db.render_tag_list(&record.tags),
            fields,
        }
    }

    pub fn field(&self, key: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.key == key)
    }

    /// Writes the form back into `record`. Unknown tag names become new tags.
    pub fn apply<P: Payload>(&self, db: &mut Database, record: &mut Record<P>) -> Result<()> {
        let mut data = record.data.clone();
        for field in &self.fields {
            data.set_form_field(&field.key, &field.value)?;
        }
        record.data = data;
        record.name = if self.name.trim().is_empty() {
            UNNAMED.to_string()
        } else {
            self.name.trim().to_string()
        };
        record.description = self.description.clone();
        record.tags = db.resolve_tag_list(&self.tags)?;
        record.touch();
        Ok(())
    }
}

impl Database {
    /// Valid parent choices for a record of `kind` whose parent is currently
    /// `parent_id`: the siblings of that parent within the grandparent.
    pub fn parent_options(&self, kind: Kind, parent_id: u32) -> Vec<ListEntry> {
        match kind {
            Kind::Room => self.warehouses.names_sorted(),
            Kind::Shelf => self.rooms_of_warehouse(self.warehouse_of_room(parent_id)),
            Kind::Box => self.shelves_of_room(self.room_of_shelf(parent_id)),
            Kind::Item => self.boxes_of_shelf(self.shelf_of_box(parent_id)),
            Kind::Warehouse | Kind::Category | Kind::Tag => Vec::new(),
        }
    }
}
