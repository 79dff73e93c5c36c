use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::shared::value_objects::SessionKey;

pub struct AddCatalogProductParams {
    pub session: SessionKey,
    pub slug: String,
    pub quantity: i64,
}

/// Adds a catalog product by slug, using the first purchasable variant of
/// its storefront counterpart.
#[async_trait]
pub trait AddCatalogProductUseCase: Send + Sync {
    async fn execute(&self, params: AddCatalogProductParams) -> Result<Cart, CartError>;
}
