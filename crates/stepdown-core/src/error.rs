use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Directory not found: {0}")]
    DirectoryNotFound(String),

    #[error("Invalid section selector {0:?}: expected \"Difficulty:Steps\" (e.g. \"Beginner:2\")")]
    InvalidSelector(String),

    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
