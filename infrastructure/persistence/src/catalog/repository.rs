use async_trait::async_trait;

use business::domain::catalog::model::{CatalogProduct, ProductCategory};
use business::domain::catalog::repository::CatalogRepository;
use business::domain::errors::RepositoryError;

use super::entity::CatalogProductEntity;

const CATALOG_JSON: &str = include_str!("../../data/products.json");

/// The site catalog, compiled into the binary and parsed once.
pub struct StaticCatalogRepository {
    products: Vec<CatalogProduct>,
}

impl StaticCatalogRepository {
    pub fn new() -> Result<Self, RepositoryError> {
        Self::from_json(CATALOG_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, RepositoryError> {
        let entities: Vec<CatalogProductEntity> =
            serde_json::from_str(json).map_err(|_| RepositoryError::CorruptedData)?;

        let products = entities
            .into_iter()
            .map(CatalogProductEntity::into_domain)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { products })
    }
}

#[async_trait]
impl CatalogRepository for StaticCatalogRepository {
    async fn get_all(&self) -> Result<Vec<CatalogProduct>, RepositoryError> {
        Ok(self.products.clone())
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Option<CatalogProduct>, RepositoryError> {
        Ok(self.products.iter().find(|p| p.slug == slug).cloned())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<CatalogProduct>, RepositoryError> {
        Ok(self.products.iter().find(|p| p.id == id).cloned())
    }

    async fn get_by_category(
        &self,
        category: &ProductCategory,
    ) -> Result<Vec<CatalogProduct>, RepositoryError> {
        Ok(self
            .products
            .iter()
            .filter(|p| &p.category == category)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn should_load_embedded_catalog() {
        let repository = StaticCatalogRepository::new().unwrap();

        assert_eq!(repository.products.len(), 29);
    }

    #[test]
    fn should_keep_slugs_unique() {
        let repository = StaticCatalogRepository::new().unwrap();

        let slugs: HashSet<_> = repository.products.iter().map(|p| &p.slug).collect();

        assert_eq!(slugs.len(), repository.products.len());
    }

    #[tokio::test]
    async fn should_find_product_by_slug_with_sale_price() {
        let repository = StaticCatalogRepository::new().unwrap();

        let product = repository
            .get_by_slug("the-bottom-feeder-extra-battery")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(product.id, "tbf-vacuum-2");
        assert_eq!(product.effective_price().formatted_amount(), "1924.00");
        assert_eq!(product.price.formatted_amount(), "2124.00");
    }

    #[tokio::test]
    async fn should_return_none_for_unknown_slug() {
        let repository = StaticCatalogRepository::new().unwrap();

        let product = repository.get_by_slug("jet-ski").await.unwrap();

        assert!(product.is_none());
    }

    #[tokio::test]
    async fn should_filter_by_category() {
        let repository = StaticCatalogRepository::new().unwrap();

        let vacuums = repository
            .get_by_category(&ProductCategory::Vacuums)
            .await
            .unwrap();

        assert!(!vacuums.is_empty());
        assert!(vacuums.iter().all(|p| p.category == ProductCategory::Vacuums));
    }

    #[tokio::test]
    async fn should_find_product_by_id() {
        let repository = StaticCatalogRepository::new().unwrap();

        let product = repository.get_by_id("tbf-vacuum-1").await.unwrap().unwrap();

        assert_eq!(product.slug, "the-bottom-feeder");
    }

    #[test]
    fn should_reject_unknown_category() {
        let json = r#"[{
            "id": "x", "name": "x", "slug": "x", "price": "1.00", "sku": "x",
            "category": "boats", "description": "", "image": "", "shopify_handle": "x",
            "in_stock": true
        }]"#;

        assert!(matches!(
            StaticCatalogRepository::from_json(json),
            Err(RepositoryError::CorruptedData)
        ));
    }

    #[test]
    fn should_reject_unparseable_price() {
        let json = r#"[{
            "id": "x", "name": "x", "slug": "x", "price": "cheap", "sku": "x",
            "category": "parts", "description": "", "image": "", "shopify_handle": "x",
            "in_stock": true
        }]"#;

        assert!(matches!(
            StaticCatalogRepository::from_json(json),
            Err(RepositoryError::CorruptedData)
        ));
    }
}
