use poem_openapi::Object;

use business::domain::catalog::model::{StorefrontProduct, StorefrontVariant};

#[derive(Debug, Clone, Object)]
pub struct StorefrontVariantResponse {
    /// Variant id to pass when adding to the cart
    pub id: String,
    pub title: String,
    pub price: String,
    pub currency_code: String,
    pub available_for_sale: bool,
}

impl From<StorefrontVariant> for StorefrontVariantResponse {
    fn from(variant: StorefrontVariant) -> Self {
        Self {
            id: variant.id.to_string(),
            title: variant.title,
            price: variant.price.formatted_amount(),
            currency_code: variant.price.currency_code,
            available_for_sale: variant.available_for_sale,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct StorefrontProductResponse {
    pub id: String,
    pub title: String,
    pub handle: String,
    pub description: String,
    pub images: Vec<String>,
    pub variants: Vec<StorefrontVariantResponse>,
}

impl From<StorefrontProduct> for StorefrontProductResponse {
    fn from(product: StorefrontProduct) -> Self {
        Self {
            id: product.id,
            title: product.title,
            handle: product.handle,
            description: product.description,
            images: product.images,
            variants: product.variants.into_iter().map(Into::into).collect(),
        }
    }
}
