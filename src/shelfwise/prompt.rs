//! # Interaction Contracts
//!
//! The core never talks to a terminal. Whenever a command needs the user, it
//! goes through [`Prompt`]:
//! - [`Prompt::choose`] when a name matches several records,
//! - [`Prompt::confirm`] before every delete,
//! - [`Prompt::edit_record`] to edit a [`RecordForm`].
//!
//! The binary implements it on top of stdin and `$EDITOR`; tests use
//! scripted doubles.

use crate::database::Database;
use crate::error::Result;
use crate::form::RecordForm;
use crate::model::{Kind, Payload, Record};

/// One entry offered by [`Prompt::choose`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub id: u32,
    pub name: String,
    /// Payload columns, already rendered (e.g. the shelf/room/warehouse of a box).
    pub summary: Vec<String>,
}

impl Candidate {
    pub fn from_record<P: Payload>(db: &Database, record: &Record<P>) -> Self {
        Self {
            id: record.id,
            name: db.display_name(record),
            summary: record.data.row(record.id, db),
        }
    }
}

pub trait Prompt {
    /// Lets the user pick one of `candidates` for `action`. `None` means cancelled.
    fn choose(&mut self, kind: Kind, candidates: &[Candidate], action: &str) -> Option<usize>;

    /// Asks a yes/no question.
    fn confirm(&mut self, message: &str) -> bool;

    /// Presents `form` for editing. `Ok(None)` means the user did not save.
    fn edit_record(&mut self, form: RecordForm) -> Result<Option<RecordForm>>;
}

#[cfg(any(test, feature = "test_utils"))]
pub mod scripted {
    use super::*;
    use std::collections::VecDeque;

    /// A [`Prompt`] answering from queues. Empty queues answer "cancel" / "no".
    #[derive(Debug, Default)]
    pub struct ScriptedPrompt {
        choices: VecDeque<Option<usize>>,
        confirms: VecDeque<bool>,
        edits: VecDeque<Option<Vec<(String, String)>>>,
        /// Every question asked, in order.
        pub asked: Vec<String>,
        /// Every form presented, as received.
        pub forms: Vec<RecordForm>,
    }

    impl ScriptedPrompt {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn choosing(mut self, choice: Option<usize>) -> Self {
            self.choices.push_back(choice);
            self
        }

        pub fn confirming(mut self, answer: bool) -> Self {
            self.confirms.push_back(answer);
            self
        }

        /// Queues a saved edit setting `key` to `value` for each pair. Keys
        /// are `name`, `description`, `tags` or a payload field.
        pub fn editing(mut self, changes: &[(&str, &str)]) -> Self {
            self.edits.push_back(Some(
                changes
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            ));
            self
        }

        /// Queues an edit the user does not save.
        pub fn discarding(mut self) -> Self {
            self.edits.push_back(None);
            self
        }
    }

    impl Prompt for ScriptedPrompt {
        fn choose(&mut self, kind: Kind, candidates: &[Candidate], action: &str) -> Option<usize> {
            self.asked
                .push(format!("choose {} of {} to {}", kind, candidates.len(), action));
            self.choices.pop_front().flatten()
        }

        fn confirm(&mut self, message: &str) -> bool {
            self.asked.push(message.to_string());
            self.confirms.pop_front().unwrap_or(false)
        }

        fn edit_record(&mut self, form: RecordForm) -> Result<Option<RecordForm>> {
            self.forms.push(form.clone());
            let Some(Some(changes)) = self.edits.pop_front() else {
                return Ok(None);
            };
            let mut form = form;
            for (key, value) in changes {
                match key.as_str() {
                    "name" => form.name = value,
                    "description" => form.description = value,
                    "tags" => form.tags = value,
                    _ => {
                        if let Some(field) = form.fields.iter_mut().find(|f| f.key == key) {
                            field.value = value;
                        }
                    }
                }
            }
            Ok(Some(form))
        }
    }
}
