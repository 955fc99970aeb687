use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("unknown municipality code: {0}")]
    CodeNotFound(String),
    #[error("unknown county code: {0}")]
    CountyNotFound(String),
}

pub type Result<T> = std::result::Result<T, DirectoryError>;
