use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::cart::model::CartId;

#[derive(Debug, FromRow)]
pub struct CartSessionEntity {
    pub session_key: String,
    pub cart_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CartSessionEntity {
    pub fn into_cart_id(self) -> CartId {
        CartId::new(self.cart_id)
    }
}
