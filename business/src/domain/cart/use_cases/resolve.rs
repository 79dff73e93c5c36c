use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::shared::value_objects::SessionKey;

pub struct ResolveCartParams {
    pub session: SessionKey,
}

/// Returns the session's remote cart, creating and remembering a new one
/// when none is cached or the cached id no longer resolves.
#[async_trait]
pub trait ResolveCartUseCase: Send + Sync {
    async fn execute(&self, params: ResolveCartParams) -> Result<Cart, CartError>;
}
