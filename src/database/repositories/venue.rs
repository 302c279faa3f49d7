use anyhow::Result;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::database::{
    models::{GameTypeFilter, VenueDetailRow, VenueRow, VenueSearchFilter},
    utils::sql,
};

const VENUE_COLUMNS: &str = r#"
    ac.id,
    ac.name AS court_name,
    ac.price_per_hour::text AS prices,
    ac.images AS photos,
    ac.videos,
    ac.created_at,
    ac.updated_at,
    ab.name AS branch_name,
    ab.address_line1 AS location,
    ab.search_location AS description,
    acity.name AS city_name,
    agt.name AS game_type
"#;

const VENUE_JOINS: &str = r#"
    FROM admin_courts ac
    JOIN admin_branches ab ON ac.branch_id = ab.id
    JOIN admin_cities acity ON ab.city_id = acity.id
    JOIN admin_game_types agt ON ac.game_type_id = agt.id
"#;

#[derive(Clone)]
pub struct VenueRepository {
    pool: PgPool,
}

impl VenueRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Active courts matching every supplied filter.
    pub async fn search(&self, filter: &VenueSearchFilter) -> Result<Vec<VenueRow>> {
        let mut builder = search_query(filter);
        let venues = builder
            .build_query_as::<VenueRow>()
            .fetch_all(&self.pool)
            .await?;

        Ok(venues)
    }

    /// Looks a court up by id regardless of its active flag.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<VenueDetailRow>> {
        let query = format!(
            "SELECT {}, ac.amenities, ac.terms_and_conditions {} WHERE ac.id = ?",
            VENUE_COLUMNS, VENUE_JOINS
        );

        let venue = sqlx::query_as::<_, VenueDetailRow>(&sql(&query))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(venue)
    }
}

fn search_query(filter: &VenueSearchFilter) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(sql(&format!(
        "SELECT {} {} WHERE ac.is_active = true",
        VENUE_COLUMNS, VENUE_JOINS
    )));

    if let Some(city) = &filter.city {
        builder
            .push(" AND LOWER(acity.name) = LOWER(")
            .push_bind(city.clone())
            .push(")");
    }

    if let Some(branch_id) = &filter.branch_id {
        builder
            .push(" AND ab.id::text = ")
            .push_bind(branch_id.clone());
    }

    match &filter.game_type {
        Some(GameTypeFilter::Contains(name)) => {
            builder
                .push(" AND agt.name ILIKE ")
                .push_bind(format!("%{}%", escape_like(name)));
        }
        Some(GameTypeFilter::AnyOf(names)) => {
            builder
                .push(" AND agt.name = ANY(")
                .push_bind(names.clone())
                .push(")");
        }
        None => {}
    }

    builder.push(" ORDER BY ac.name, ac.id");
    builder
}

/// Escapes LIKE wildcards so the value matches literally.
fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
