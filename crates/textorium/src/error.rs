use thiserror::Error;

use crate::validation::ValidationError;

#[derive(Error, Debug)]
pub enum TextoriumError {
    #[error("Snippet not found: {0}")]
    SnippetNotFound(String),

    #[error("Invalid snippet: {0}")]
    Validation(#[from] ValidationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("{0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, TextoriumError>;
