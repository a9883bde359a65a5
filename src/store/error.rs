use thiserror::Error;

/// Failure of a store to answer at all.
///
/// "No record with this id" is never an error; lookups return `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("store lock poisoned during {0}")]
    LockPoisoned(&'static str),
    #[error("record serialization error: {0}")]
    Serde(String),
    #[error("record {collection}:{id} already exists")]
    Duplicate { collection: String, id: i64 },
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serde(err.to_string())
    }
}
