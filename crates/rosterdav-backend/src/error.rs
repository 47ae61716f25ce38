use thiserror::Error;

/// Backend layer errors - the protocol-visible failure taxonomy
#[derive(Error, Debug)]
pub enum DavError {
    #[error(transparent)]
    Store(#[from] rosterdav_store::error::StoreError),

    #[error(transparent)]
    Core(#[from] rosterdav_core::error::CoreError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Not supported: {0}")]
    NotSupported(&'static str),

    #[error("Unmappable participation status: {0}")]
    UnmappableStatus(String),

    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Parse error: {0}")]
    ParseError(String),
}

pub type DavResult<T> = std::result::Result<T, DavError>;
