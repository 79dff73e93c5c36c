use crate::domain::errors::{CommerceError, RepositoryError};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog.not_found")]
    NotFound,
    #[error("catalog.invalid_category")]
    InvalidCategory,
    #[error("catalog.remote_call_failed")]
    RemoteCallFailed(#[from] CommerceError),
    #[error("catalog.unavailable")]
    Unavailable(#[from] RepositoryError),
}
