use std::env;

const DEFAULT_DOMAIN: &str = "the-bottom-feeder.myshopify.com";
const DEFAULT_API_VERSION: &str = "2024-01";

/// Storefront API access settings
///
/// Environment variables:
/// - SHOPIFY_DOMAIN: shop domain (default: "the-bottom-feeder.myshopify.com")
/// - SHOPIFY_STOREFRONT_TOKEN: public storefront access token
/// - SHOPIFY_API_VERSION: API version (default: "2024-01")
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    pub domain: String,
    pub access_token: String,
    pub api_version: String,
}

impl StorefrontConfig {
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("SHOPIFY_DOMAIN").ok(),
            env::var("SHOPIFY_STOREFRONT_TOKEN").ok(),
            env::var("SHOPIFY_API_VERSION").ok(),
        )
    }

    fn from_values(
        domain: Option<String>,
        access_token: Option<String>,
        api_version: Option<String>,
    ) -> Self {
        let or_default = |value: Option<String>, default: &str| {
            value
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            domain: or_default(domain, DEFAULT_DOMAIN),
            access_token: access_token.unwrap_or_default(),
            api_version: or_default(api_version, DEFAULT_API_VERSION),
        }
    }

    /// An empty token still starts the server, but every remote call will fail.
    pub fn has_access_token(&self) -> bool {
        !self.access_token.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_fall_back_to_default_shop() {
        let config = StorefrontConfig::from_values(None, None, None);

        assert_eq!(config.domain, "the-bottom-feeder.myshopify.com");
        assert_eq!(config.api_version, "2024-01");
        assert!(!config.has_access_token());
    }

    #[test]
    fn should_use_configured_values() {
        let config = StorefrontConfig::from_values(
            Some("other-shop.myshopify.com".to_string()),
            Some("public-token".to_string()),
            Some("2024-04".to_string()),
        );

        assert_eq!(config.domain, "other-shop.myshopify.com");
        assert_eq!(config.api_version, "2024-04");
        assert!(config.has_access_token());
    }

    #[test]
    fn should_ignore_blank_domain() {
        let config = StorefrontConfig::from_values(Some("  ".to_string()), None, None);

        assert_eq!(config.domain, "the-bottom-feeder.myshopify.com");
    }
}
