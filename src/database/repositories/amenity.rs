use anyhow::Result;
use sqlx::PgPool;

use crate::database::{models::AmenityRow, utils::sql};

#[derive(Clone)]
pub struct AmenityRepository {
    pool: PgPool,
}

impl AmenityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Matches on the text form of the id, so tokens that are not UUIDs simply match nothing.
    pub async fn find_by_ids(&self, ids: &[String]) -> Result<Vec<AmenityRow>> {
        let amenities = sqlx::query_as::<_, AmenityRow>(&sql(r#"
            SELECT
                id,
                name,
                icon
            FROM
                admin_amenities
            WHERE
                id::text = ANY(?)
        "#))
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(amenities)
    }
}
