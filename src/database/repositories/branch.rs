use anyhow::Result;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::database::models::BranchRow;

#[derive(Clone)]
pub struct BranchRepository {
    pool: PgPool,
}

impl BranchRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get_active_branches(&self, city: Option<&str>) -> Result<Vec<BranchRow>> {
        let mut builder = active_branches_query(city);
        let branches = builder
            .build_query_as::<BranchRow>()
            .fetch_all(&self.pool)
            .await?;

        Ok(branches)
    }
}

fn active_branches_query(city: Option<&str>) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(
        "SELECT ab.id, ab.name, ab.address_line1, acity.name AS city_name \
         FROM admin_branches ab \
         JOIN admin_cities acity ON ab.city_id = acity.id \
         WHERE ab.is_active = true",
    );

    if let Some(city) = city.map(str::trim).filter(|city| !city.is_empty()) {
        builder
            .push(" AND LOWER(acity.name) = LOWER(")
            .push_bind(city.to_string())
            .push(")");
    }

    builder.push(" ORDER BY ab.name");
    builder
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unfiltered_query() {
        let builder = active_branches_query(None);
        assert!(builder.sql().ends_with("WHERE ab.is_active = true ORDER BY ab.name"));
    }

    #[test]
    fn test_city_filter_is_bound() {
        let builder = active_branches_query(Some(" Hyderabad "));
        assert!(
            builder
                .sql()
                .contains("AND LOWER(acity.name) = LOWER($1)")
        );
        assert!(!builder.sql().contains("Hyderabad"));
    }

    #[test]
    fn test_blank_city_is_ignored() {
        assert_eq!(
            active_branches_query(Some("  ")).sql(),
            active_branches_query(None).sql()
        );
    }
}
