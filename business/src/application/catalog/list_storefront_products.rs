use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::StorefrontProduct;
use crate::domain::catalog::services::StorefrontProductGateway;
use crate::domain::catalog::use_cases::list_storefront_products::ListStorefrontProductsUseCase;
use crate::domain::logger::Logger;

pub struct ListStorefrontProductsUseCaseImpl {
    pub gateway: Arc<dyn StorefrontProductGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListStorefrontProductsUseCase for ListStorefrontProductsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<StorefrontProduct>, CatalogError> {
        self.logger.info("Fetching storefront products");

        let products = self.gateway.all_products().await.inspect_err(|err| {
            self.logger
                .error(&format!("Error fetching products: {}", err.details()))
        })?;

        self.logger
            .info(&format!("Found {} storefront products", products.len()));
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::mocks::{MockProductGateway, mock_logger};
    use crate::domain::catalog::model::fixtures::storefront_product;
    use crate::domain::errors::CommerceError;

    #[tokio::test]
    async fn should_list_published_products() {
        let mut gateway = MockProductGateway::new();
        gateway.expect_all_products().returning(|| {
            Ok(vec![
                storefront_product("the-bottom-feeder", vec![("v1", true)]),
                storefront_product("wheels", vec![("v2", true)]),
            ])
        });

        let use_case = ListStorefrontProductsUseCaseImpl {
            gateway: Arc::new(gateway),
            logger: mock_logger(),
        };

        let products = use_case.execute().await.unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[1].handle, "wheels");
    }

    #[tokio::test]
    async fn should_surface_graphql_errors() {
        let mut gateway = MockProductGateway::new();
        gateway
            .expect_all_products()
            .returning(|| Err(CommerceError::GraphQl(vec!["Access denied".to_string()])));

        let use_case = ListStorefrontProductsUseCaseImpl {
            gateway: Arc::new(gateway),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(matches!(
            result.unwrap_err(),
            CatalogError::RemoteCallFailed(CommerceError::GraphQl(_))
        ));
    }
}
