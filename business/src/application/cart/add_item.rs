use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, CartLineInput};
use crate::domain::cart::services::CartGateway;
use crate::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use crate::domain::cart::use_cases::resolve::{ResolveCartParams, ResolveCartUseCase};
use crate::domain::logger::Logger;

pub struct AddCartItemUseCaseImpl {
    pub resolver: Arc<dyn ResolveCartUseCase>,
    pub gateway: Arc<dyn CartGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddCartItemUseCase for AddCartItemUseCaseImpl {
    async fn execute(&self, params: AddCartItemParams) -> Result<Cart, CartError> {
        let quantity = positive_quantity(params.quantity).ok_or(CartError::InvalidQuantity)?;

        self.logger.info(&format!(
            "Adding {} x {} to cart",
            quantity, params.variant_id
        ));

        let cart = self
            .resolver
            .execute(ResolveCartParams {
                session: params.session,
            })
            .await?;

        let lines = [CartLineInput {
            merchandise_id: params.variant_id,
            quantity,
        }];
        let updated = self.gateway.add_lines(&cart.id, &lines).await?;

        self.logger.info(&format!(
            "Cart {} now holds {} items",
            updated.id,
            updated.item_count()
        ));
        Ok(updated)
    }
}

/// Quantities accepted by the platform: strictly positive and fitting a `u32`.
pub(crate) fn positive_quantity(quantity: i64) -> Option<u32> {
    if quantity <= 0 {
        return None;
    }
    u32::try_from(quantity).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::mocks::{
        MockGateway, failing_resolver, mock_logger, resolving_to, test_session,
    };
    use crate::domain::cart::model::VariantId;
    use crate::domain::cart::model::fixtures::{cart, line};
    use crate::domain::errors::CommerceError;

    fn params(quantity: i64) -> AddCartItemParams {
        AddCartItemParams {
            session: test_session(),
            variant_id: VariantId::new("gid://shopify/ProductVariant/1"),
            quantity,
        }
    }

    #[tokio::test]
    async fn should_return_remote_snapshot_after_adding_line() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_add_lines()
            .withf(|id, lines| {
                id.as_str() == "c1"
                    && lines.len() == 1
                    && lines[0].quantity == 1
                    && lines[0].merchandise_id.as_str() == "gid://shopify/ProductVariant/1"
            })
            .times(1)
            .returning(|_, _| Ok(cart("c1", vec![line("l1", "1535.00", 1)])));

        let use_case = AddCartItemUseCaseImpl {
            resolver: resolving_to(cart("c1", vec![])),
            gateway: Arc::new(gateway),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(1)).await;

        let updated = result.unwrap();
        assert_eq!(updated.item_count(), 1);
        assert_eq!(updated.subtotal().formatted_amount(), "1535.00");
    }

    #[tokio::test]
    async fn should_reject_non_positive_quantity_without_remote_call() {
        let mut gateway = MockGateway::new();
        gateway.expect_add_lines().never();

        let use_case = AddCartItemUseCaseImpl {
            resolver: resolving_to(cart("c1", vec![])),
            gateway: Arc::new(gateway),
            logger: mock_logger(),
        };

        let zero = use_case.execute(params(0)).await;
        let negative = use_case.execute(params(-3)).await;

        assert!(matches!(zero.unwrap_err(), CartError::InvalidQuantity));
        assert!(matches!(negative.unwrap_err(), CartError::InvalidQuantity));
    }

    #[tokio::test]
    async fn should_propagate_remote_failure() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_add_lines()
            .returning(|_, _| Err(CommerceError::UserErrors(vec!["Sold out".to_string()])));

        let use_case = AddCartItemUseCaseImpl {
            resolver: resolving_to(cart("c1", vec![])),
            gateway: Arc::new(gateway),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(2)).await;

        assert!(matches!(
            result.unwrap_err(),
            CartError::RemoteCallFailed(CommerceError::UserErrors(_))
        ));
    }

    #[tokio::test]
    async fn should_not_mutate_when_cart_cannot_be_resolved() {
        let mut gateway = MockGateway::new();
        gateway.expect_add_lines().never();

        let use_case = AddCartItemUseCaseImpl {
            resolver: failing_resolver(),
            gateway: Arc::new(gateway),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(1)).await;

        assert!(matches!(result.unwrap_err(), CartError::RemoteCallFailed(_)));
    }

    #[test]
    fn should_only_accept_quantities_fitting_the_platform() {
        assert_eq!(positive_quantity(1), Some(1));
        assert_eq!(positive_quantity(0), None);
        assert_eq!(positive_quantity(-1), None);
        assert_eq!(positive_quantity(i64::from(u32::MAX) + 1), None);
    }
}
