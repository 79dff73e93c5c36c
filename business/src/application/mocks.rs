//! Mockall doubles for the ports, shared by the use case tests.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;
use url::Url;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, CartId, CartLineInput, CartLineUpdate, LineItemId};
use crate::domain::cart::repository::CartSessionRepository;
use crate::domain::cart::services::CartGateway;
use crate::domain::cart::use_cases::add_catalog_product::{
    AddCatalogProductParams, AddCatalogProductUseCase,
};
use crate::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use crate::domain::cart::use_cases::get_checkout_url::{
    GetCheckoutUrlParams, GetCheckoutUrlUseCase,
};
use crate::domain::cart::use_cases::remove_item::{RemoveCartItemParams, RemoveCartItemUseCase};
use crate::domain::cart::use_cases::resolve::{ResolveCartParams, ResolveCartUseCase};
use crate::domain::cart::use_cases::update_quantity::{
    UpdateCartItemQuantityParams, UpdateCartItemQuantityUseCase,
};
use crate::domain::catalog::model::{CatalogProduct, ProductCategory, StorefrontProduct};
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::catalog::services::StorefrontProductGateway;
use crate::domain::errors::{CommerceError, RepositoryError};
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::SessionKey;

mock! {
    pub Gateway {}

    #[async_trait]
    impl CartGateway for Gateway {
        async fn create_cart(&self) -> Result<Cart, CommerceError>;
        async fn get_cart(&self, id: &CartId) -> Result<Option<Cart>, CommerceError>;
        async fn add_lines(&self, id: &CartId, lines: &[CartLineInput]) -> Result<Cart, CommerceError>;
        async fn update_lines(&self, id: &CartId, lines: &[CartLineUpdate]) -> Result<Cart, CommerceError>;
        async fn remove_lines(&self, id: &CartId, line_ids: &[LineItemId]) -> Result<Cart, CommerceError>;
    }
}

mock! {
    pub SessionRepo {}

    #[async_trait]
    impl CartSessionRepository for SessionRepo {
        async fn find_cart_id(&self, session: &SessionKey) -> Result<Option<CartId>, RepositoryError>;
        async fn save_cart_id(&self, session: &SessionKey, cart_id: &CartId) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub CatalogRepo {}

    #[async_trait]
    impl CatalogRepository for CatalogRepo {
        async fn get_all(&self) -> Result<Vec<CatalogProduct>, RepositoryError>;
        async fn get_by_slug(&self, slug: &str) -> Result<Option<CatalogProduct>, RepositoryError>;
        async fn get_by_id(&self, id: &str) -> Result<Option<CatalogProduct>, RepositoryError>;
        async fn get_by_category(&self, category: &ProductCategory) -> Result<Vec<CatalogProduct>, RepositoryError>;
    }
}

mock! {
    pub ProductGateway {}

    #[async_trait]
    impl StorefrontProductGateway for ProductGateway {
        async fn product_by_handle(&self, handle: &str) -> Result<Option<StorefrontProduct>, CommerceError>;
        async fn all_products(&self) -> Result<Vec<StorefrontProduct>, CommerceError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn test_session() -> SessionKey {
    SessionKey::new("test-session")
}

mock! {
    pub Resolver {}

    #[async_trait]
    impl ResolveCartUseCase for Resolver {
        async fn execute(&self, params: ResolveCartParams) -> Result<Cart, CartError>;
    }
}

mock! {
    pub AddItem {}

    #[async_trait]
    impl AddCartItemUseCase for AddItem {
        async fn execute(&self, params: AddCartItemParams) -> Result<Cart, CartError>;
    }
}

mock! {
    pub RemoveItem {}

    #[async_trait]
    impl RemoveCartItemUseCase for RemoveItem {
        async fn execute(&self, params: RemoveCartItemParams) -> Result<Cart, CartError>;
    }
}

/// Resolver that always hands back `cart`.
pub fn resolving_to(cart: Cart) -> Arc<dyn ResolveCartUseCase> {
    let mut resolver = MockResolver::new();
    resolver
        .expect_execute()
        .returning(move |_| Ok(cart.clone()));
    Arc::new(resolver)
}

/// Resolver whose cart creation keeps failing.
pub fn failing_resolver() -> Arc<dyn ResolveCartUseCase> {
    let mut resolver = MockResolver::new();
    resolver
        .expect_execute()
        .returning(|_| Err(CartError::RemoteCallFailed(CommerceError::Transport("connection refused".to_string()))));
    Arc::new(resolver)
}

mock! {
    pub UpdateQuantity {}

    #[async_trait]
    impl UpdateCartItemQuantityUseCase for UpdateQuantity {
        async fn execute(&self, params: UpdateCartItemQuantityParams) -> Result<Cart, CartError>;
    }
}

mock! {
    pub AddCatalogProduct {}

    #[async_trait]
    impl AddCatalogProductUseCase for AddCatalogProduct {
        async fn execute(&self, params: AddCatalogProductParams) -> Result<Cart, CartError>;
    }
}

mock! {
    pub CheckoutUrl {}

    #[async_trait]
    impl GetCheckoutUrlUseCase for CheckoutUrl {
        async fn execute(&self, params: GetCheckoutUrlParams) -> Option<Url>;
    }
}
