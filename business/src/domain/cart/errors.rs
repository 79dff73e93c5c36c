use crate::domain::errors::{CommerceError, RepositoryError};

#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.invalid_quantity")]
    InvalidQuantity,
    #[error("cart.invalid_session")]
    InvalidSession,
    #[error("cart.busy")]
    Busy,
    #[error("cart.product_not_found")]
    ProductNotFound,
    #[error("cart.variant_unavailable")]
    VariantUnavailable,
    #[error("cart.checkout_unavailable")]
    CheckoutUnavailable,
    #[error("cart.remote_call_failed")]
    RemoteCallFailed(#[from] CommerceError),
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}

impl CartError {
    /// Code plus whatever the platform reported, for logs.
    pub fn details(&self) -> String {
        match self {
            CartError::RemoteCallFailed(err) => err.details(),
            other => other.to_string(),
        }
    }
}
