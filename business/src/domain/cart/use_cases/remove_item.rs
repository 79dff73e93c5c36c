use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, LineItemId};
use crate::domain::shared::value_objects::SessionKey;

pub struct RemoveCartItemParams {
    pub session: SessionKey,
    pub line_id: LineItemId,
}

#[async_trait]
pub trait RemoveCartItemUseCase: Send + Sync {
    async fn execute(&self, params: RemoveCartItemParams) -> Result<Cart, CartError>;
}
