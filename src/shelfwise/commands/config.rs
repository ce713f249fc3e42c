//! `config` command: show or change settings in `config.json`.

use crate::commands::{CmdMessage, CmdResult};
use crate::config::{ShelfwiseConfig, ShelfwisePaths};
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Runs `action` against the live `config`. A successful `Set` is written to
/// the home directory before `config` is updated.
pub fn run(
    config: &mut ShelfwiseConfig,
    paths: &ShelfwisePaths,
    action: ConfigAction,
) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => Ok(CmdResult::default().with_config(config.clone())),
        ConfigAction::ShowKey(key) => {
            let value = config.value(&key)?;
            Ok(CmdResult::default().with_message(CmdMessage::info(value)))
        }
        ConfigAction::Set(key, value) => {
            let mut updated = config.clone();
            updated.set(&key, &value)?;
            updated.save(&paths.home)?;
            tracing::debug!(key = %key, "config updated");

            let message = format!("{} set to {}", key, updated.value(&key)?);
            *config = updated;
            Ok(CmdResult::default()
                .with_message(CmdMessage::success(message))
                .with_config(config.clone()))
        }
    }
}
