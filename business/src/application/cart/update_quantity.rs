use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::add_item::positive_quantity;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, CartLineUpdate};
use crate::domain::cart::services::CartGateway;
use crate::domain::cart::use_cases::remove_item::{RemoveCartItemParams, RemoveCartItemUseCase};
use crate::domain::cart::use_cases::resolve::{ResolveCartParams, ResolveCartUseCase};
use crate::domain::cart::use_cases::update_quantity::{
    UpdateCartItemQuantityParams, UpdateCartItemQuantityUseCase,
};
use crate::domain::logger::Logger;

pub struct UpdateCartItemQuantityUseCaseImpl {
    pub resolver: Arc<dyn ResolveCartUseCase>,
    pub remover: Arc<dyn RemoveCartItemUseCase>,
    pub gateway: Arc<dyn CartGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateCartItemQuantityUseCase for UpdateCartItemQuantityUseCaseImpl {
    async fn execute(&self, params: UpdateCartItemQuantityParams) -> Result<Cart, CartError> {
        if params.quantity <= 0 {
            self.logger.info(&format!(
                "Quantity {} for line {} means removal",
                params.quantity, params.line_id
            ));
            return self
                .remover
                .execute(RemoveCartItemParams {
                    session: params.session,
                    line_id: params.line_id,
                })
                .await;
        }

        let quantity = positive_quantity(params.quantity).ok_or(CartError::InvalidQuantity)?;

        self.logger.info(&format!(
            "Updating line {} to quantity {}",
            params.line_id, quantity
        ));

        let cart = self
            .resolver
            .execute(ResolveCartParams {
                session: params.session,
            })
            .await?;

        let lines = [CartLineUpdate {
            id: params.line_id,
            quantity,
        }];
        let updated = self.gateway.update_lines(&cart.id, &lines).await?;

        self.logger.info(&format!(
            "Cart {} now holds {} items",
            updated.id,
            updated.item_count()
        ));
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::mocks::{
        MockGateway, MockRemoveItem, mock_logger, resolving_to, test_session,
    };
    use crate::domain::cart::model::LineItemId;
    use crate::domain::cart::model::fixtures::{cart, line};
    use crate::domain::errors::CommerceError;
    use proptest::prelude::*;

    fn params(quantity: i64) -> UpdateCartItemQuantityParams {
        UpdateCartItemQuantityParams {
            session: test_session(),
            line_id: LineItemId::new("l1"),
            quantity,
        }
    }

    #[tokio::test]
    async fn should_update_line_quantity() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_update_lines()
            .withf(|id, lines| {
                id.as_str() == "c1"
                    && lines.len() == 1
                    && lines[0].id.as_str() == "l1"
                    && lines[0].quantity == 3
            })
            .times(1)
            .returning(|_, _| Ok(cart("c1", vec![line("l1", "39.00", 3)])));

        let mut remover = MockRemoveItem::new();
        remover.expect_execute().never();

        let use_case = UpdateCartItemQuantityUseCaseImpl {
            resolver: resolving_to(cart("c1", vec![line("l1", "39.00", 1)])),
            remover: Arc::new(remover),
            gateway: Arc::new(gateway),
            logger: mock_logger(),
        };

        let updated = use_case.execute(params(3)).await.unwrap();

        assert_eq!(updated.item_count(), 3);
        assert_eq!(updated.subtotal().formatted_amount(), "117.00");
    }

    #[tokio::test]
    async fn should_remove_line_when_quantity_drops_to_zero() {
        let mut gateway = MockGateway::new();
        gateway.expect_update_lines().never();

        let mut remover = MockRemoveItem::new();
        remover
            .expect_execute()
            .withf(|p| p.line_id.as_str() == "l1")
            .times(1)
            .returning(|_| Ok(cart("c1", vec![])));

        let use_case = UpdateCartItemQuantityUseCaseImpl {
            resolver: resolving_to(cart("c1", vec![line("l1", "39.00", 1)])),
            remover: Arc::new(remover),
            gateway: Arc::new(gateway),
            logger: mock_logger(),
        };

        let updated = use_case.execute(params(0)).await.unwrap();

        assert!(updated.lines.is_empty());
        assert_eq!(updated.item_count(), 0);
    }

    #[tokio::test]
    async fn should_propagate_remote_failure() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_update_lines()
            .returning(|_, _| Err(CommerceError::Transport("connection refused".to_string())));

        let use_case = UpdateCartItemQuantityUseCaseImpl {
            resolver: resolving_to(cart("c1", vec![line("l1", "39.00", 1)])),
            remover: Arc::new(MockRemoveItem::new()),
            gateway: Arc::new(gateway),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(2)).await;

        assert!(matches!(result.unwrap_err(), CartError::RemoteCallFailed(_)));
    }

    proptest! {
        #[test]
        fn should_never_send_non_positive_update(quantity in i64::MIN..=0) {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .build()
                .unwrap();

            let mut gateway = MockGateway::new();
            gateway.expect_update_lines().never();

            let mut remover = MockRemoveItem::new();
            remover
                .expect_execute()
                .times(1)
                .returning(|_| Ok(cart("c1", vec![])));

            let use_case = UpdateCartItemQuantityUseCaseImpl {
                resolver: resolving_to(cart("c1", vec![line("l1", "39.00", 1)])),
                remover: Arc::new(remover),
                gateway: Arc::new(gateway),
                logger: mock_logger(),
            };

            let result = runtime.block_on(use_case.execute(params(quantity)));

            prop_assert!(result.is_ok());
        }
    }
}
