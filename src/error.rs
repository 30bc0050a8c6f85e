//! Error types for itemlist

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ItemListError {
    #[error("IO error")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ItemListError>;
