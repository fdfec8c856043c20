use thiserror::Error;

#[derive(Debug, Error)]
pub enum TypeaheadError {
    #[error("Invalid items: {0}")]
    InvalidItems(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
