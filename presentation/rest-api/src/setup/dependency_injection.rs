use std::sync::Arc;

use anyhow::Context;

use logger::TracingLogger;
use persistence::cart_session::repository::CartSessionRepositoryPostgres;
use persistence::catalog::repository::StaticCatalogRepository;

use storefront::cart_gateway::CartGatewayShopify;
use storefront::client::StorefrontClient;
use storefront::product_gateway::ProductGatewayShopify;

use business::application::cart::add_catalog_product::AddCatalogProductUseCaseImpl;
use business::application::cart::add_item::AddCartItemUseCaseImpl;
use business::application::cart::client::{CartClient, CartUseCases};
use business::application::cart::get_checkout_url::GetCheckoutUrlUseCaseImpl;
use business::application::cart::remove_item::RemoveCartItemUseCaseImpl;
use business::application::cart::resolve::ResolveCartUseCaseImpl;
use business::application::cart::update_quantity::UpdateCartItemQuantityUseCaseImpl;
use business::application::catalog::get_all::GetCatalogProductsUseCaseImpl;
use business::application::catalog::get_by_slug::GetCatalogProductBySlugUseCaseImpl;
use business::application::catalog::get_featured::GetFeaturedProductsUseCaseImpl;
use business::application::catalog::get_storefront_product::GetStorefrontProductUseCaseImpl;
use business::application::catalog::list_storefront_products::ListStorefrontProductsUseCaseImpl;

use crate::config::cart_config::CartConfig;
use crate::config::storefront_config::StorefrontConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub catalog_api: crate::api::catalog::routes::CatalogApi,
    pub storefront_api: crate::api::storefront::routes::StorefrontApi,
    pub cart_api: crate::api::cart::routes::CartApi,
}

impl DependencyContainer {
    pub async fn new(
        pool: sqlx::PgPool,
        storefront_config: &StorefrontConfig,
        cart_config: &CartConfig,
    ) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        if !storefront_config.has_access_token() {
            tracing::warn!(
                "SHOPIFY_STOREFRONT_TOKEN is not set. Shopify integration will not work."
            );
        }

        // Infrastructure adapters
        let session_repository = Arc::new(CartSessionRepositoryPostgres::new(pool));
        let catalog_repository =
            Arc::new(StaticCatalogRepository::new().context("loading product catalog")?);

        let storefront_client = StorefrontClient::new(
            &storefront_config.domain,
            storefront_config.access_token.clone(),
            &storefront_config.api_version,
        );
        let cart_gateway = Arc::new(CartGatewayShopify::new(storefront_client.clone()));
        let product_gateway = Arc::new(ProductGatewayShopify::new(storefront_client));

        // Catalog use cases
        let get_all_use_case = Arc::new(GetCatalogProductsUseCaseImpl {
            repository: catalog_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_slug_use_case = Arc::new(GetCatalogProductBySlugUseCaseImpl {
            repository: catalog_repository.clone(),
            logger: logger.clone(),
        });
        let get_featured_use_case = Arc::new(GetFeaturedProductsUseCaseImpl {
            repository: catalog_repository.clone(),
            logger: logger.clone(),
        });
        let get_storefront_product_use_case = Arc::new(GetStorefrontProductUseCaseImpl {
            gateway: product_gateway.clone(),
            logger: logger.clone(),
        });
        let list_storefront_products_use_case = Arc::new(ListStorefrontProductsUseCaseImpl {
            gateway: product_gateway.clone(),
            logger: logger.clone(),
        });

        // Cart use cases
        let resolve_use_case = Arc::new(ResolveCartUseCaseImpl {
            gateway: cart_gateway.clone(),
            sessions: session_repository,
            logger: logger.clone(),
        });
        let add_item_use_case = Arc::new(AddCartItemUseCaseImpl {
            resolver: resolve_use_case.clone(),
            gateway: cart_gateway.clone(),
            logger: logger.clone(),
        });
        let remove_item_use_case = Arc::new(RemoveCartItemUseCaseImpl {
            resolver: resolve_use_case.clone(),
            gateway: cart_gateway.clone(),
            logger: logger.clone(),
        });
        let update_quantity_use_case = Arc::new(UpdateCartItemQuantityUseCaseImpl {
            resolver: resolve_use_case.clone(),
            remover: remove_item_use_case.clone(),
            gateway: cart_gateway,
            logger: logger.clone(),
        });
        let add_catalog_product_use_case = Arc::new(AddCatalogProductUseCaseImpl {
            catalog: catalog_repository,
            products: product_gateway,
            add_item: add_item_use_case.clone(),
            logger: logger.clone(),
        });
        let checkout_url_use_case = Arc::new(GetCheckoutUrlUseCaseImpl {
            resolver: resolve_use_case.clone(),
            logger: logger.clone(),
        });

        let cart_client = Arc::new(CartClient::new(
            CartUseCases {
                resolve: resolve_use_case,
                add_item: add_item_use_case,
                add_catalog_product: add_catalog_product_use_case,
                update_quantity: update_quantity_use_case,
                remove_item: remove_item_use_case,
                checkout_url: checkout_url_use_case,
            },
            logger,
            cart_config.limits,
        ));

        let catalog_api = crate::api::catalog::routes::CatalogApi::new(
            get_all_use_case,
            get_by_slug_use_case,
            get_featured_use_case,
        );

        let storefront_api = crate::api::storefront::routes::StorefrontApi::new(
            get_storefront_product_use_case,
            list_storefront_products_use_case,
        );

        let cart_api = crate::api::cart::routes::CartApi::new(cart_client);

        Ok(Self {
            health_api,
            catalog_api,
            storefront_api,
            cart_api,
        })
    }
}
