use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, LineItemId};
use crate::domain::shared::value_objects::SessionKey;

pub struct UpdateCartItemQuantityParams {
    pub session: SessionKey,
    pub line_id: LineItemId,
    /// Zero or negative removes the line.
    pub quantity: i64,
}

#[async_trait]
pub trait UpdateCartItemQuantityUseCase: Send + Sync {
    async fn execute(&self, params: UpdateCartItemQuantityParams) -> Result<Cart, CartError>;
}
