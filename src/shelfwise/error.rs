use crate::model::Kind;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShelfwiseError {
    #[error("No {kind} with name/ID \"{token}\" found.")]
    NotFound { kind: Kind, token: String },

    #[error("No record with ID {0} found.")]
    UnknownId(u32),

    #[error("Cancelled")]
    Cancelled,

    #[error("No IDs left to issue")]
    IdsExhausted,

    #[error("Data file {} is corrupted: {}", .0.display(), .1)]
    Corrupt(PathBuf, serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("{0}")]
    Api(String),
}

impl ShelfwiseError {
    pub fn not_found(kind: Kind, token: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            token: token.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ShelfwiseError>;
