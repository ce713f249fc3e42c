//! # Shelfwise Architecture
//!
//! Shelfwise is an **inventory tracking library** with a CLI client. Everything
//! you own lives in a fixed hierarchy (warehouse → room → shelf → box → item),
//! items can carry a category, and any record can carry tags.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints results, owns the terminal      │
//! │  - Implements Prompt on stdin and $EDITOR                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the Database, saves it after every change           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One function per operation over &mut Database            │
//! │  - Returns CmdResult (messages, listings, detail views)     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (database, table, model, resolve, tags, hierarchy,    │
//! │  dispatch, id)                                              │
//! │  - Record envelope, soft-deleting tables, lookups           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait: whole-document load/save                │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Records and IDs
//!
//! Every stored object is a [`model::Record`] around a kind-specific payload.
//! IDs come from one counter shared by all kinds ([`id::IdRegistry`]), so a
//! bare ID identifies both the record and its kind ([`dispatch`]). Records are
//! never removed, only flagged deleted; see [`table`].
//!
//! ## No I/O in the Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never reads
//! stdin. Whenever the user has to pick, confirm or edit something, commands
//! call the [`prompt::Prompt`] they were given. Diagnostics go through
//! `tracing`; the binary decides where they end up.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`database`]: The aggregate of all tables plus the active warehouse
//! - [`table`]: Ordered, soft-deleting record collection
//! - [`model`]: Record envelope, kinds and payloads
//! - [`resolve`]: Name/ID resolution with interactive disambiguation
//! - [`tags`]: Tag attachment and usage counting
//! - [`hierarchy`]: Parent-reference chasing
//! - [`dispatch`]: Finding the table that owns an ID
//! - [`id`]: The shared ID counter
//! - [`form`]: Editable projection of a record
//! - [`prompt`]: Interaction contracts
//! - [`view`]: Display-ready listings and detail views
//! - [`editor`]: External editor integration
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing, printing and the terminal prompt (binary only)

pub mod api;
pub mod commands;
pub mod config;
pub mod database;
pub mod dispatch;
pub mod editor;
pub mod error;
pub mod form;
pub mod hierarchy;
pub mod id;
pub mod model;
pub mod prompt;
pub mod resolve;
pub mod store;
pub mod table;
pub mod tags;
pub mod view;
