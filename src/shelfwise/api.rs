//! # API Facade
//!
//! [`InventoryApi`] is the single entry point for every inventory operation.
//! It owns the loaded [`Database`] and the [`DataStore`] it came from, calls
//! into `commands/*.rs`, and saves the whole database whenever a command
//! reports a change. Nothing here prints or reads the terminal; interactive
//! steps go through the [`Prompt`] passed in by the caller.
//!
//! `InventoryApi<S: DataStore>` is generic over the storage backend:
//! - Production: `InventoryApi<FileStore>`
//! - Testing: `InventoryApi<InMemoryStore>`
//!
//! API tests check dispatch and persistence (was the store written or not);
//! command behaviour is tested in the command modules.

use crate::commands;
use crate::config::{ShelfwiseConfig, ShelfwisePaths};
use crate::database::Database;
use crate::error::Result;
use crate::model::Kind;
use crate::prompt::Prompt;
use crate::store::DataStore;

pub use crate::commands::config::ConfigAction;
pub use crate::commands::list::ListFilter;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

pub struct InventoryApi<S: DataStore> {
    store: S,
    db: Database,
    paths: ShelfwisePaths,
    config: ShelfwiseConfig,
}

impl<S: DataStore> InventoryApi<S> {
    /// Loads the database from `store`. A corrupt document is an error.
    pub fn open(store: S, paths: ShelfwisePaths, config: ShelfwiseConfig) -> Result<Self> {
        let db = store.load()?;
        Ok(Self {
            store,
            db,
            paths,
            config,
        })
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &ShelfwiseConfig {
        &self.config
    }

    fn persist(&mut self, result: CmdResult) -> Result<CmdResult> {
        if result.changed {
            self.store.save(&self.db)?;
        }
        Ok(result)
    }

    fn sort(&self, requested: bool) -> bool {
        requested || self.config.sort_by_name
    }

    pub fn add_warehouse(&mut self, name: &str) -> Result<CmdResult> {
        let result = commands::create::warehouse(&mut self.db, name)?;
        self.persist(result)
    }

    pub fn add_category(&mut self, name: &str) -> Result<CmdResult> {
        let result = commands::create::category(&mut self.db, name)?;
        self.persist(result)
    }

    pub fn switch_warehouse(&mut self, name: &str) -> Result<CmdResult> {
        let result = commands::switch::run(&mut self.db, name)?;
        self.persist(result)
    }

    pub fn add_room(&mut self, name: &str) -> Result<CmdResult> {
        let result = commands::create::room(&mut self.db, name)?;
        self.persist(result)
    }

    pub fn add_shelf<U: Prompt>(&mut self, ui: &mut U, name: &str, room: &str) -> Result<CmdResult> {
        let result = commands::create::shelf(&mut self.db, ui, name, room)?;
        self.persist(result)
    }

    pub fn add_box<U: Prompt>(&mut self, ui: &mut U, name: &str, shelf: &str) -> Result<CmdResult> {
        let result = commands::create::bin(&mut self.db, ui, name, shelf)?;
        self.persist(result)
    }

    /// Saves after every item, see [`commands::items::run`].
    pub fn add_items<U: Prompt>(&mut self, ui: &mut U, bin: &str) -> Result<CmdResult> {
        let store = &mut self.store;
        commands::items::run(&mut self.db, ui, bin, |db| store.save(db))
    }

    pub fn move_item<U: Prompt>(&mut self, ui: &mut U, item: &str, bin: &str) -> Result<CmdResult> {
        let result = commands::moving::item(&mut self.db, ui, item, bin)?;
        self.persist(result)
    }

    pub fn move_box<U: Prompt>(&mut self, ui: &mut U, bin: &str, shelf: &str) -> Result<CmdResult> {
        let result = commands::moving::bin(&mut self.db, ui, bin, shelf)?;
        self.persist(result)
    }

    pub fn list<U: Prompt>(
        &self,
        ui: &mut U,
        kind: Kind,
        filter: &ListFilter,
        sort_by_name: bool,
    ) -> Result<CmdResult> {
        commands::list::run(&self.db, ui, kind, filter, self.sort(sort_by_name))
    }

    pub fn find(&self, term: &str, sort_by_name: bool) -> Result<CmdResult> {
        commands::list::find(&self.db, term, self.sort(sort_by_name))
    }

    pub fn show(&self, token: &str, kind: Option<Kind>) -> Result<CmdResult> {
        commands::show::run(&self.db, token, kind)
    }

    pub fn edit<U: Prompt>(&mut self, ui: &mut U, token: &str, kind: Option<Kind>) -> Result<CmdResult> {
        let result = commands::edit::run(&mut self.db, ui, token, kind)?;
        self.persist(result)
    }

    pub fn delete<U: Prompt>(
        &mut self,
        ui: &mut U,
        token: &str,
        kind: Option<Kind>,
        assume_yes: bool,
    ) -> Result<CmdResult> {
        let result = commands::delete::run(&mut self.db, ui, token, kind, assume_yes)?;
        self.persist(result)
    }

    pub fn tag(&mut self, tag: &str, id: &str) -> Result<CmdResult> {
        let result = commands::tagging::add(&mut self.db, tag, id)?;
        self.persist(result)
    }

    pub fn untag(&mut self, tag: &str, id: &str) -> Result<CmdResult> {
        let result = commands::tagging::remove(&mut self.db, tag, id)?;
        self.persist(result)
    }

    pub fn path(&self) -> Result<CmdResult> {
        Ok(CmdResult::default().with_path(self.store.location()))
    }

    pub fn config_action(&mut self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&mut self.config, &self.paths, action)
    }
}
