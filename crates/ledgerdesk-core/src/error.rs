use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerdeskError {
    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Mutation error: {0}")]
    Mutation(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
