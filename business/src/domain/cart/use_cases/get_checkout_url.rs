use async_trait::async_trait;
use url::Url;

use crate::domain::shared::value_objects::SessionKey;

pub struct GetCheckoutUrlParams {
    pub session: SessionKey,
}

/// `None` when the cart could not be resolved.
#[async_trait]
pub trait GetCheckoutUrlUseCase: Send + Sync {
    async fn execute(&self, params: GetCheckoutUrlParams) -> Option<Url>;
}
