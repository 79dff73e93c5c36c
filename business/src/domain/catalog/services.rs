use async_trait::async_trait;

use crate::domain::errors::CommerceError;

use super::model::StorefrontProduct;

/// Service port for reading products published on the commerce platform.
#[async_trait]
pub trait StorefrontProductGateway: Send + Sync {
    async fn product_by_handle(
        &self,
        handle: &str,
    ) -> Result<Option<StorefrontProduct>, CommerceError>;

    async fn all_products(&self) -> Result<Vec<StorefrontProduct>, CommerceError>;
}
