use poem_openapi::Object;

use business::domain::catalog::model::{CatalogProduct, CategoryInfo};

#[derive(Debug, Clone, Object)]
pub struct CatalogVariantResponse {
    pub name: String,
    /// Decimal amount with two places, e.g. "39.00"
    pub price: String,
}

#[derive(Debug, Clone, Object)]
pub struct CatalogProductResponse {
    pub id: String,
    pub name: String,
    pub slug: String,
    /// List price
    pub price: String,
    /// Discounted price when the product is on sale
    #[oai(skip_serializing_if_is_none)]
    pub sale_price: Option<String>,
    /// Price the visitor pays
    pub effective_price: String,
    pub currency_code: String,
    pub on_sale: bool,
    pub sku: String,
    pub category: String,
    pub description: String,
    pub features: Vec<String>,
    pub image: String,
    /// Handle of the product on the commerce platform
    pub shopify_handle: String,
    pub variants: Vec<CatalogVariantResponse>,
    pub in_stock: bool,
    #[oai(skip_serializing_if_is_none)]
    pub rating: Option<f32>,
}

impl From<CatalogProduct> for CatalogProductResponse {
    fn from(product: CatalogProduct) -> Self {
        Self {
            effective_price: product.effective_price().formatted_amount(),
            currency_code: product.effective_price().currency_code.clone(),
            on_sale: product.is_on_sale(),
            price: product.price.formatted_amount(),
            sale_price: product.sale_price.as_ref().map(|p| p.formatted_amount()),
            category: product.category.to_string(),
            id: product.id,
            name: product.name,
            slug: product.slug,
            sku: product.sku,
            description: product.description,
            features: product.features,
            image: product.image,
            shopify_handle: product.shopify_handle,
            variants: product
                .variants
                .into_iter()
                .map(|v| CatalogVariantResponse {
                    price: v.price.formatted_amount(),
                    name: v.name,
                })
                .collect(),
            in_stock: product.in_stock,
            rating: product.rating,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CategoryResponse {
    /// Value accepted by the `category` filter
    pub slug: String,
    pub name: String,
    pub description: String,
}

impl From<CategoryInfo> for CategoryResponse {
    fn from(info: CategoryInfo) -> Self {
        Self {
            slug: info.category.to_string(),
            name: info.name.to_string(),
            description: info.description.to_string(),
        }
    }
}
