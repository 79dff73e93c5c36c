use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

use business::domain::cart::model::CartId;
use business::domain::cart::repository::CartSessionRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::SessionKey;

use super::entity::CartSessionEntity;

pub struct CartSessionRepositoryPostgres {
    pool: PgPool,
}

impl CartSessionRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartSessionRepository for CartSessionRepositoryPostgres {
    async fn find_cart_id(&self, session: &SessionKey) -> Result<Option<CartId>, RepositoryError> {
        let entity = sqlx::query_as::<_, CartSessionEntity>(
            "SELECT session_key, cart_id, created_at, updated_at FROM cart_sessions WHERE session_key = $1",
        )
        .bind(session.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entity.map(|e| e.into_cart_id()))
    }

    async fn save_cart_id(
        &self,
        session: &SessionKey,
        cart_id: &CartId,
    ) -> Result<(), RepositoryError> {
        let now = Utc::now();

        sqlx::query(
            r#"INSERT INTO cart_sessions (session_key, cart_id, created_at, updated_at)
            VALUES ($1, $2, $3, $3)
            ON CONFLICT (session_key) DO UPDATE SET
                cart_id = EXCLUDED.cart_id,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(session.as_str())
        .bind(cart_id.as_str())
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}
