use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, VariantId};
use crate::domain::shared::value_objects::SessionKey;

pub struct AddCartItemParams {
    pub session: SessionKey,
    pub variant_id: VariantId,
    pub quantity: i64,
}

#[async_trait]
pub trait AddCartItemUseCase: Send + Sync {
    async fn execute(&self, params: AddCartItemParams) -> Result<Cart, CartError>;
}
