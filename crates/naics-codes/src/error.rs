use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CodesError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{path}: missing required '{column}' column")]
    MissingColumn { path: PathBuf, column: &'static str },
}

pub type Result<T> = std::result::Result<T, CodesError>;
