use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuleError {
    #[error("reference code set is empty")]
    EmptyCodeSet,
    #[error("column not found: {0}")]
    MissingColumn(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, RuleError>;
