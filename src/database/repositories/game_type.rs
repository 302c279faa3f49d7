use anyhow::Result;
use sqlx::PgPool;

#[derive(Clone)]
pub struct GameTypeRepository {
    pool: PgPool,
}

impl GameTypeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get_active_names(&self) -> Result<Vec<String>> {
        let names = sqlx::query_scalar::<_, String>(
            r#"
            SELECT
                name
            FROM
                admin_game_types
            WHERE
                is_active = true
            ORDER BY
                name ASC
        "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(names)
    }
}
