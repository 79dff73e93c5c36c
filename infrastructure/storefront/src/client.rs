use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use business::domain::errors::CommerceError;

const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Storefront-Access-Token";

/// Shared Storefront API HTTP client configuration.
#[derive(Clone)]
pub struct StorefrontClient {
    client: Client,
    endpoint: String,
    access_token: String,
}

impl StorefrontClient {
    pub fn new(domain: &str, access_token: String, api_version: &str) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            endpoint: format!("https://{}/api/{}/graphql.json", domain, api_version),
            access_token,
        }
    }

    /// Returns the GraphQL endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Posts a GraphQL document and unwraps the `data` member of the answer.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Value,
    ) -> Result<T, CommerceError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .header(ACCESS_TOKEN_HEADER, &self.access_token)
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await
            .map_err(|err| CommerceError::Transport(err.to_string()))?;

        if !response.status().is_success() {
            return Err(CommerceError::Status(response.status().as_u16()));
        }

        let envelope: GraphQlResponse<T> = response
            .json()
            .await
            .map_err(|err| CommerceError::Decode(err.to_string()))?;

        envelope.into_data()
    }
}

#[derive(Deserialize)]
pub(crate) struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Deserialize)]
struct GraphQlError {
    message: String,
}

impl<T> GraphQlResponse<T> {
    /// Any reported error fails the whole call, even next to partial data.
    pub(crate) fn into_data(self) -> Result<T, CommerceError> {
        if !self.errors.is_empty() {
            return Err(CommerceError::GraphQl(
                self.errors.into_iter().map(|e| e.message).collect(),
            ));
        }
        self.data
            .ok_or_else(|| CommerceError::Decode("response has no data".to_string()))
    }
}
