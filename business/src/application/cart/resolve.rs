use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartSessionRepository;
use crate::domain::cart::services::CartGateway;
use crate::domain::cart::use_cases::resolve::{ResolveCartParams, ResolveCartUseCase};
use crate::domain::logger::Logger;

pub struct ResolveCartUseCaseImpl {
    pub gateway: Arc<dyn CartGateway>,
    pub sessions: Arc<dyn CartSessionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ResolveCartUseCase for ResolveCartUseCaseImpl {
    async fn execute(&self, params: ResolveCartParams) -> Result<Cart, CartError> {
        if let Some(cart_id) = self.sessions.find_cart_id(&params.session).await? {
            match self.gateway.get_cart(&cart_id).await {
                Ok(Some(cart)) => {
                    self.logger.debug(&format!("Resolved cached cart {}", cart.id));
                    return Ok(cart);
                }
                Ok(None) => {
                    self.logger
                        .info(&format!("Cart {} not found, creating new one", cart_id));
                }
                Err(err) => {
                    self.logger.warn(&format!(
                        "Fetching cart {} failed ({}), creating new one",
                        cart_id,
                        err.details()
                    ));
                }
            }
        }

        let cart = self.gateway.create_cart().await?;
        self.sessions.save_cart_id(&params.session, &cart.id).await?;

        self.logger.info(&format!("Cart created: {}", cart.id));
        Ok(cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::mocks::{MockGateway, MockSessionRepo, mock_logger, test_session};
    use crate::domain::cart::model::CartId;
    use crate::domain::cart::model::fixtures::{cart, line};
    use crate::domain::errors::{CommerceError, RepositoryError};

    fn use_case(gateway: MockGateway, sessions: MockSessionRepo) -> ResolveCartUseCaseImpl {
        ResolveCartUseCaseImpl {
            gateway: Arc::new(gateway),
            sessions: Arc::new(sessions),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_return_cached_cart_when_it_still_resolves() {
        let mut sessions = MockSessionRepo::new();
        sessions
            .expect_find_cart_id()
            .returning(|_| Ok(Some(CartId::new("cached"))));
        sessions.expect_save_cart_id().never();

        let mut gateway = MockGateway::new();
        gateway
            .expect_get_cart()
            .withf(|id| id.as_str() == "cached")
            .returning(|_| Ok(Some(cart("cached", vec![line("a", "10.00", 1)]))));
        gateway.expect_create_cart().never();

        let result = use_case(gateway, sessions)
            .execute(ResolveCartParams {
                session: test_session(),
            })
            .await;

        assert!(result.is_ok());
        let resolved = result.unwrap();
        assert_eq!(resolved.id.as_str(), "cached");
        assert_eq!(resolved.item_count(), 1);
    }

    #[tokio::test]
    async fn should_create_and_cache_cart_when_none_cached() {
        let mut sessions = MockSessionRepo::new();
        sessions.expect_find_cart_id().returning(|_| Ok(None));
        sessions
            .expect_save_cart_id()
            .withf(|session, id| session.as_str() == "test-session" && id.as_str() == "fresh")
            .times(1)
            .returning(|_, _| Ok(()));

        let mut gateway = MockGateway::new();
        gateway.expect_get_cart().never();
        gateway
            .expect_create_cart()
            .times(1)
            .returning(|| Ok(cart("fresh", vec![])));

        let result = use_case(gateway, sessions)
            .execute(ResolveCartParams {
                session: test_session(),
            })
            .await;

        assert_eq!(result.unwrap().id.as_str(), "fresh");
    }

    #[tokio::test]
    async fn should_replace_stale_id_with_exactly_one_new_cart() {
        let mut sessions = MockSessionRepo::new();
        sessions
            .expect_find_cart_id()
            .returning(|_| Ok(Some(CartId::new("stale"))));
        sessions
            .expect_save_cart_id()
            .withf(|_, id| id.as_str() == "replacement")
            .times(1)
            .returning(|_, _| Ok(()));

        let mut gateway = MockGateway::new();
        gateway.expect_get_cart().times(1).returning(|_| Ok(None));
        gateway
            .expect_create_cart()
            .times(1)
            .returning(|| Ok(cart("replacement", vec![])));

        let result = use_case(gateway, sessions)
            .execute(ResolveCartParams {
                session: test_session(),
            })
            .await;

        assert_eq!(result.unwrap().id.as_str(), "replacement");
    }

    #[tokio::test]
    async fn should_fall_back_to_creation_when_fetch_fails() {
        let mut sessions = MockSessionRepo::new();
        sessions
            .expect_find_cart_id()
            .returning(|_| Ok(Some(CartId::new("broken"))));
        sessions
            .expect_save_cart_id()
            .times(1)
            .returning(|_, _| Ok(()));

        let mut gateway = MockGateway::new();
        gateway
            .expect_get_cart()
            .returning(|_| Err(CommerceError::Transport("connection refused".to_string())));
        gateway
            .expect_create_cart()
            .times(1)
            .returning(|| Ok(cart("new", vec![])));

        let result = use_case(gateway, sessions)
            .execute(ResolveCartParams {
                session: test_session(),
            })
            .await;

        assert_eq!(result.unwrap().id.as_str(), "new");
    }

    #[tokio::test]
    async fn should_propagate_error_when_fallback_creation_fails() {
        let mut sessions = MockSessionRepo::new();
        sessions
            .expect_find_cart_id()
            .returning(|_| Ok(Some(CartId::new("stale"))));
        sessions.expect_save_cart_id().never();

        let mut gateway = MockGateway::new();
        gateway.expect_get_cart().returning(|_| Ok(None));
        gateway
            .expect_create_cart()
            .times(1)
            .returning(|| Err(CommerceError::GraphQl(vec!["Throttled".to_string()])));

        let result = use_case(gateway, sessions)
            .execute(ResolveCartParams {
                session: test_session(),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            CartError::RemoteCallFailed(CommerceError::GraphQl(_))
        ));
    }

    #[tokio::test]
    async fn should_propagate_session_store_failure() {
        let mut sessions = MockSessionRepo::new();
        sessions
            .expect_find_cart_id()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let mut gateway = MockGateway::new();
        gateway.expect_create_cart().never();

        let result = use_case(gateway, sessions)
            .execute(ResolveCartParams {
                session: test_session(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::Repository(_)));
    }
}
