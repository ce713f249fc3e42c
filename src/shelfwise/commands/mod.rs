//! # Commands
//!
//! One module per user-facing operation. Every command is a plain function
//! over a `&mut Database` (plus a [`Prompt`](crate::prompt::Prompt) when it
//! may need the user) returning a [`CmdResult`]. Commands never persist and
//! never print: the API layer saves when [`CmdResult::changed`] is set, and
//! the CLI renders messages, listings and detail views.
//!
//! Failures that abort a command (unknown name, cancelled choice, missing
//! active warehouse) are `Err`. Requests that are already satisfied, such as
//! attaching a tag twice, are `Ok` with an info message and no change.

use crate::config::ShelfwiseConfig;
use crate::view::{DetailView, Listing};

pub mod config;
pub mod create;
pub mod delete;
pub mod edit;
pub mod helpers;
pub mod items;
pub mod list;
pub mod moving;
pub mod show;
pub mod switch;
pub mod tagging;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub messages: Vec<CmdMessage>,
    pub listing: Option<Listing>,
    pub details: Vec<DetailView>,
    pub path: Option<String>,
    pub config: Option<ShelfwiseConfig>,
    /// The database was modified and must be saved.
    pub changed: bool,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_listing(mut self, listing: Listing) -> Self {
        self.listing = Some(listing);
        self
    }

    pub fn with_details(mut self, details: Vec<DetailView>) -> Self {
        self.details = details;
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_config(mut self, config: ShelfwiseConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn changed(mut self) -> Self {
        self.changed = true;
        self
    }
}
