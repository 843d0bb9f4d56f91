use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("Invalid distribution parameter for {field}: {reason}")]
    Distribution { field: &'static str, reason: String },

    #[error("Cannot write {path}: {source}")]
    Output {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl GenError {
    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig { reason: reason.into() }
    }
}

pub type GenResult<T> = Result<T, GenError>;
