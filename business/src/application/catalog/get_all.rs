use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::{CatalogProduct, ProductCategory};
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::catalog::use_cases::get_all::{
    GetCatalogProductsParams, GetCatalogProductsUseCase,
};
use crate::domain::logger::Logger;

pub struct GetCatalogProductsUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCatalogProductsUseCase for GetCatalogProductsUseCaseImpl {
    async fn execute(
        &self,
        params: GetCatalogProductsParams,
    ) -> Result<Vec<CatalogProduct>, CatalogError> {
        let products = match params.category {
            Some(raw) => {
                let category = raw
                    .parse::<ProductCategory>()
                    .map_err(|_| CatalogError::InvalidCategory)?;
                self.logger
                    .debug(&format!("Listing catalog products in {}", category));
                self.repository.get_by_category(&category).await?
            }
            None => self.repository.get_all().await?,
        };

        self.logger
            .debug(&format!("Retrieved {} catalog products", products.len()));
        Ok(products)
    }
}
