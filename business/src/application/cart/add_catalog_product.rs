use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::use_cases::add_catalog_product::{
    AddCatalogProductParams, AddCatalogProductUseCase,
};
use crate::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::catalog::services::StorefrontProductGateway;
use crate::domain::logger::Logger;

pub struct AddCatalogProductUseCaseImpl {
    pub catalog: Arc<dyn CatalogRepository>,
    pub products: Arc<dyn StorefrontProductGateway>,
    pub add_item: Arc<dyn AddCartItemUseCase>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddCatalogProductUseCase for AddCatalogProductUseCaseImpl {
    async fn execute(&self, params: AddCatalogProductParams) -> Result<Cart, CartError> {
        let product = self
            .catalog
            .get_by_slug(&params.slug)
            .await?
            .ok_or(CartError::ProductNotFound)?;

        let storefront_product = self
            .products
            .product_by_handle(&product.shopify_handle)
            .await?
            .ok_or(CartError::VariantUnavailable)?;

        let variant = storefront_product
            .first_purchasable_variant()
            .ok_or(CartError::VariantUnavailable)?;

        self.logger.info(&format!(
            "Catalog product {} maps to variant {}",
            product.slug, variant.id
        ));

        self.add_item
            .execute(AddCartItemParams {
                session: params.session,
                variant_id: variant.id.clone(),
                quantity: params.quantity,
            })
            .await
    }
}
