use serde::{Deserialize, Serialize};

use crate::domain::cart::model::VariantId;
use crate::domain::shared::value_objects::Money;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    Vacuums,
    Batteries,
    Filters,
    Parts,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 4] = [
        ProductCategory::Vacuums,
        ProductCategory::Batteries,
        ProductCategory::Filters,
        ProductCategory::Parts,
    ];

    pub fn info(&self) -> CategoryInfo {
        match self {
            ProductCategory::Vacuums => CategoryInfo {
                category: *self,
                name: "Pool Vacuums",
                description: "Cordless battery-powered pool cleaning units for effortless pool maintenance",
            },
            ProductCategory::Batteries => CategoryInfo {
                category: *self,
                name: "Batteries & Power",
                description: "Battery packs, chargers, and power accessories to keep you cleaning",
            },
            ProductCategory::Filters => CategoryInfo {
                category: *self,
                name: "Debris Bags & Filters",
                description: "Filtration systems and debris collection bags for optimal performance",
            },
            ProductCategory::Parts => CategoryInfo {
                category: *self,
                name: "Replacement Parts",
                description: "Maintenance and repair components to keep your vacuum running like new",
            },
        }
    }
}

impl std::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductCategory::Vacuums => write!(f, "vacuums"),
            ProductCategory::Batteries => write!(f, "batteries"),
            ProductCategory::Filters => write!(f, "filters"),
            ProductCategory::Parts => write!(f, "parts"),
        }
    }
}

impl std::str::FromStr for ProductCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vacuums" => Ok(ProductCategory::Vacuums),
            "batteries" => Ok(ProductCategory::Batteries),
            "filters" => Ok(ProductCategory::Filters),
            "parts" => Ok(ProductCategory::Parts),
            _ => Err(format!("Invalid product category: {}", s)),
        }
    }
}

/// Display copy for a category page.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryInfo {
    pub category: ProductCategory,
    pub name: &'static str,
    pub description: &'static str,
}

/// Size or option offered for a catalog product (e.g. debris bag sizes).
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogVariant {
    pub name: String,
    pub price: Money,
}

/// Entry of the static site catalog. Immutable, no lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogProduct {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub price: Money,
    pub sale_price: Option<Money>,
    pub sku: String,
    pub category: ProductCategory,
    pub description: String,
    pub features: Vec<String>,
    pub image: String,
    /// Handle of the matching product on the commerce platform.
    pub shopify_handle: String,
    pub variants: Vec<CatalogVariant>,
    pub in_stock: bool,
    pub rating: Option<f32>,
}

impl CatalogProduct {
    pub fn effective_price(&self) -> &Money {
        self.sale_price.as_ref().unwrap_or(&self.price)
    }

    pub fn is_on_sale(&self) -> bool {
        self.sale_price.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontVariant {
    pub id: VariantId,
    pub title: String,
    pub price: Money,
    pub available_for_sale: bool,
}

/// Product as published on the commerce platform.
#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontProduct {
    pub id: String,
    pub title: String,
    pub handle: String,
    pub description: String,
    pub images: Vec<String>,
    pub variants: Vec<StorefrontVariant>,
}

impl StorefrontProduct {
    pub fn first_purchasable_variant(&self) -> Option<&StorefrontVariant> {
        self.variants.iter().find(|v| v.available_for_sale)
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::{catalog_product, storefront_product};
    use super::*;

    #[test]
    fn should_parse_every_category_from_its_display_form() {
        for category in ProductCategory::ALL {
            let parsed: ProductCategory = category.to_string().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn should_reject_unknown_category() {
        let result = "pumps".parse::<ProductCategory>();
        assert!(result.is_err());
    }

    #[test]
    fn should_prefer_sale_price() {
        let mut product = catalog_product("carry-bag", ProductCategory::Parts);
        product.sale_price = Money::parse("124.95", "USD");

        assert!(product.is_on_sale());
        assert_eq!(product.effective_price().formatted_amount(), "124.95");
    }

    #[test]
    fn should_use_list_price_when_not_on_sale() {
        let product = catalog_product("the-shrimp", ProductCategory::Vacuums);

        assert!(!product.is_on_sale());
        assert_eq!(product.effective_price().formatted_amount(), "1535.00");
    }

    #[test]
    fn should_skip_variants_not_for_sale() {
        let product = storefront_product("bag", vec![("v1", false), ("v2", true), ("v3", true)]);

        assert_eq!(product.first_purchasable_variant().unwrap().id.as_str(), "v2");
    }

    #[test]
    fn should_have_no_purchasable_variant_when_all_sold_out() {
        let product = storefront_product("bag", vec![("v1", false)]);

        assert!(product.first_purchasable_variant().is_none());
    }
}
