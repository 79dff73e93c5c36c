use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use business::domain::cart::model::VariantId;
use business::domain::catalog::model::{StorefrontProduct, StorefrontVariant};
use business::domain::catalog::services::StorefrontProductGateway;
use business::domain::errors::CommerceError;

use crate::client::StorefrontClient;
use crate::queries;
use crate::types::{Connection, MoneyV2};

#[derive(Debug, Deserialize)]
struct ProductNode {
    id: String,
    title: String,
    handle: String,
    #[serde(default)]
    description: String,
    images: Connection<ImageNode>,
    variants: Connection<VariantNode>,
}

#[derive(Debug, Deserialize)]
struct ImageNode {
    src: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VariantNode {
    id: String,
    title: String,
    price: MoneyV2,
    available_for_sale: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductByHandleData {
    product_by_handle: Option<ProductNode>,
}

#[derive(Debug, Deserialize)]
struct ProductsData {
    products: Connection<ProductNode>,
}

impl ProductNode {
    fn into_domain(self) -> Result<StorefrontProduct, CommerceError> {
        let variants = self
            .variants
            .into_nodes()
            .map(|variant| -> Result<StorefrontVariant, CommerceError> {
                Ok(StorefrontVariant {
                    id: VariantId::new(variant.id),
                    title: variant.title,
                    price: variant.price.into_domain()?,
                    available_for_sale: variant.available_for_sale,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(StorefrontProduct {
            id: self.id,
            title: self.title,
            handle: self.handle,
            description: self.description,
            images: self.images.into_nodes().map(|image| image.src).collect(),
            variants,
        })
    }
}

pub struct ProductGatewayShopify {
    client: StorefrontClient,
}

impl ProductGatewayShopify {
    pub fn new(client: StorefrontClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StorefrontProductGateway for ProductGatewayShopify {
    async fn product_by_handle(
        &self,
        handle: &str,
    ) -> Result<Option<StorefrontProduct>, CommerceError> {
        let data: ProductByHandleData = self
            .client
            .execute(queries::PRODUCT_BY_HANDLE, json!({ "handle": handle }))
            .await?;

        data.product_by_handle
            .map(ProductNode::into_domain)
            .transpose()
    }

    async fn all_products(&self) -> Result<Vec<StorefrontProduct>, CommerceError> {
        let data: ProductsData = self
            .client
            .execute(queries::ALL_PRODUCTS, json!({}))
            .await?;

        data.products
            .into_nodes()
            .map(ProductNode::into_domain)
            .collect()
    }
}
