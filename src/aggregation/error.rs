use thiserror::Error;

use crate::store::StoreError;

/// Failure of a purchase query.
///
/// Missing records are not failures: an invalid product id yields an empty
/// result and dangling references are skipped. Only a store that cannot
/// answer makes the whole query fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoughtProductsError {
    #[error("repository unavailable: {0}")]
    RepositoryUnavailable(#[from] StoreError),
}
