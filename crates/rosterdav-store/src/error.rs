use thiserror::Error;

/// Failures surfaced by the external query and visibility services.
///
/// Implementations map their driver errors into these variants; the adapter
/// propagates them unchanged, without retry or partial-result suppression.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Query failed: {0}")]
    Query(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
