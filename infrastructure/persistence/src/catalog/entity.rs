use serde::Deserialize;

use business::domain::catalog::model::{CatalogProduct, CatalogVariant, ProductCategory};
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::Money;

/// Catalog prices are quoted in the store currency.
const CATALOG_CURRENCY: &str = "USD";

#[derive(Debug, Deserialize)]
pub struct CatalogVariantEntity {
    pub name: String,
    pub price: String,
}

#[derive(Debug, Deserialize)]
pub struct CatalogProductEntity {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub price: String,
    pub sale_price: Option<String>,
    pub sku: String,
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub image: String,
    pub shopify_handle: String,
    #[serde(default)]
    pub variants: Vec<CatalogVariantEntity>,
    pub in_stock: bool,
    pub rating: Option<f32>,
}

fn price(amount: &str) -> Result<Money, RepositoryError> {
    Money::parse(amount, CATALOG_CURRENCY).ok_or(RepositoryError::CorruptedData)
}

impl CatalogProductEntity {
    pub fn into_domain(self) -> Result<CatalogProduct, RepositoryError> {
        let category = self
            .category
            .parse::<ProductCategory>()
            .map_err(|_| RepositoryError::CorruptedData)?;

        let variants = self
            .variants
            .into_iter()
            .map(|v| -> Result<CatalogVariant, RepositoryError> {
                Ok(CatalogVariant {
                    price: price(&v.price)?,
                    name: v.name,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CatalogProduct {
            price: price(&self.price)?,
            sale_price: self.sale_price.as_deref().map(price).transpose()?,
            id: self.id,
            name: self.name,
            slug: self.slug,
            sku: self.sku,
            category,
            description: self.description,
            features: self.features,
            image: self.image,
            shopify_handle: self.shopify_handle,
            variants,
            in_stock: self.in_stock,
            rating: self.rating,
        })
    }
}
