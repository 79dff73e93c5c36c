use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::services::CartGateway;
use crate::domain::cart::use_cases::remove_item::{RemoveCartItemParams, RemoveCartItemUseCase};
use crate::domain::cart::use_cases::resolve::{ResolveCartParams, ResolveCartUseCase};
use crate::domain::logger::Logger;

pub struct RemoveCartItemUseCaseImpl {
    pub resolver: Arc<dyn ResolveCartUseCase>,
    pub gateway: Arc<dyn CartGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveCartItemUseCase for RemoveCartItemUseCaseImpl {
    async fn execute(&self, params: RemoveCartItemParams) -> Result<Cart, CartError> {
        self.logger
            .info(&format!("Removing line {} from cart", params.line_id));

        let cart = self
            .resolver
            .execute(ResolveCartParams {
                session: params.session,
            })
            .await?;

        let updated = self
            .gateway
            .remove_lines(&cart.id, &[params.line_id])
            .await?;

        self.logger.info(&format!(
            "Cart {} now holds {} items",
            updated.id,
            updated.item_count()
        ));
        Ok(updated)
    }
}
