use std::sync::Arc;

use async_trait::async_trait;
use url::Url;

use crate::domain::cart::use_cases::get_checkout_url::{
    GetCheckoutUrlParams, GetCheckoutUrlUseCase,
};
use crate::domain::cart::use_cases::resolve::{ResolveCartParams, ResolveCartUseCase};
use crate::domain::logger::Logger;

pub struct GetCheckoutUrlUseCaseImpl {
    pub resolver: Arc<dyn ResolveCartUseCase>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCheckoutUrlUseCase for GetCheckoutUrlUseCaseImpl {
    async fn execute(&self, params: GetCheckoutUrlParams) -> Option<Url> {
        match self
            .resolver
            .execute(ResolveCartParams {
                session: params.session,
            })
            .await
        {
            Ok(cart) => Some(cart.checkout_url),
            Err(err) => {
                self.logger
                    .error(&format!("Unable to resolve cart for checkout: {}", err.details()));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::mocks::{failing_resolver, mock_logger, resolving_to, test_session};
    use crate::domain::cart::model::fixtures::cart;

    #[tokio::test]
    async fn should_return_remote_checkout_url() {
        let use_case = GetCheckoutUrlUseCaseImpl {
            resolver: resolving_to(cart("c1", vec![])),
            logger: mock_logger(),
        };

        let url = use_case
            .execute(GetCheckoutUrlParams {
                session: test_session(),
            })
            .await;

        assert_eq!(
            url.unwrap().as_str(),
            "https://the-bottom-feeder.myshopify.com/cart/c/c1"
        );
    }

    #[tokio::test]
    async fn should_return_none_when_cart_cannot_be_resolved() {
        let use_case = GetCheckoutUrlUseCaseImpl {
            resolver: failing_resolver(),
            logger: mock_logger(),
        };

        let url = use_case
            .execute(GetCheckoutUrlParams {
                session: test_session(),
            })
            .await;

        assert!(url.is_none());
    }
}
