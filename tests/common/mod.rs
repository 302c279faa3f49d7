#![allow(dead_code)]

use std::{env, time::Duration};

use actix_web::{App, web};
use anyhow::Result;
use bigdecimal::BigDecimal;
use fake::{Fake, faker::address::en::StreetName, faker::company::en::CompanyName};
use sqlx::{PgPool, postgres::PgPoolOptions};
use uuid::Uuid;

use venue_catalog::database::run_migrations;
use venue_catalog::{VenueCatalogService, routes};

pub const UNREACHABLE_DATABASE_URL: &str = "postgres://venue_catalog@127.0.0.1:1/unreachable";

pub fn setup_test_env() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// App wired the same way as the binary, minus the outer middleware.
pub fn create_app(
    pool: PgPool,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(VenueCatalogService::new(pool.clone())))
        .app_data(web::Data::new(pool))
        .configure(routes::configure)
}

/// A pool that never connects successfully; queries fail fast.
pub fn unreachable_pool() -> PgPool {
    PgPoolOptions::new()
        .acquire_timeout(Duration::from_millis(500))
        .connect_lazy(UNREACHABLE_DATABASE_URL)
        .expect("lazy pool accepts a well-formed url")
}

pub struct TestContext {
    pub pool: PgPool,
}

impl TestContext {
    /// Connects to `TEST_DATABASE_URL`, migrates and empties the catalog tables.
    /// Returns `None` when no test database is configured, unless running
    /// under CI, where a missing database is an error.
    pub async fn new() -> Result<Option<Self>> {
        setup_test_env();

        let Ok(database_url) = env::var("TEST_DATABASE_URL") else {
            if env::var_os("CI").is_some() {
                anyhow::bail!("TEST_DATABASE_URL must be set when CI is set");
            }
            eprintln!("TEST_DATABASE_URL not set, skipping database test");
            return Ok(None);
        };

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(&database_url)
            .await?;
        run_migrations(&pool).await?;

        sqlx::query(
            "TRUNCATE admin_courts, admin_branches, admin_cities, admin_game_types, admin_amenities CASCADE",
        )
        .execute(&pool)
        .await?;

        Ok(Some(TestContext { pool }))
    }

    pub async fn create_city(&self, name: &str) -> Result<Uuid> {
        let id = sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO admin_cities (name) VALUES ($1) RETURNING id",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    pub async fn create_game_type(&self, name: &str, is_active: bool) -> Result<Uuid> {
        let id = sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO admin_game_types (name, is_active) VALUES ($1, $2) RETURNING id",
        )
        .bind(name)
        .bind(is_active)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    pub async fn create_branch(&self, city_id: Uuid, input: BranchFixture) -> Result<Uuid> {
        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO admin_branches (city_id, name, address_line1, search_location, is_active)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(city_id)
        .bind(input.name)
        .bind(input.address_line1)
        .bind(input.search_location)
        .bind(input.is_active)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    pub async fn create_amenity(&self, name: &str, icon: Option<&str>) -> Result<Uuid> {
        let id = sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO admin_amenities (name, icon) VALUES ($1, $2) RETURNING id",
        )
        .bind(name)
        .bind(icon)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    pub async fn create_court(
        &self,
        branch_id: Uuid,
        game_type_id: Uuid,
        input: CourtFixture,
    ) -> Result<Uuid> {
        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO admin_courts (
                branch_id, game_type_id, name, price_per_hour, images, videos,
                amenities, terms_and_conditions, is_active
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id
            "#,
        )
        .bind(branch_id)
        .bind(game_type_id)
        .bind(input.name)
        .bind(input.price_per_hour)
        .bind(input.images)
        .bind(input.videos)
        .bind(input.amenities)
        .bind(input.terms_and_conditions)
        .bind(input.is_active)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }
}

pub struct BranchFixture {
    pub name: String,
    pub address_line1: Option<String>,
    pub search_location: Option<String>,
    pub is_active: bool,
}

impl BranchFixture {
    pub fn new() -> Self {
        Self {
            name: CompanyName().fake(),
            address_line1: Some(StreetName().fake()),
            search_location: None,
            is_active: true,
        }
    }
}

pub struct CourtFixture {
    pub name: String,
    pub price_per_hour: Option<BigDecimal>,
    pub images: Option<String>,
    pub videos: Option<String>,
    pub amenities: Option<String>,
    pub terms_and_conditions: Option<String>,
    pub is_active: bool,
}

impl CourtFixture {
    pub fn new() -> Self {
        Self {
            name: format!("{} Court", CompanyName().fake::<String>()),
            price_per_hour: Some(BigDecimal::from(500)),
            images: None,
            videos: None,
            amenities: None,
            terms_and_conditions: None,
            is_active: true,
        }
    }

    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::new()
        }
    }
}

/// Catalog with one city, one branch and an active court for each game type.
pub struct SeededCatalog {
    pub city_id: Uuid,
    pub branch_id: Uuid,
    pub tennis_court: Uuid,
    pub cricket_court: Uuid,
    pub badminton_court: Uuid,
    pub inactive_court: Uuid,
}

pub async fn seed_catalog(ctx: &TestContext) -> Result<SeededCatalog> {
    let city_id = ctx.create_city("Hyderabad").await?;
    let branch_id = ctx.create_branch(city_id, BranchFixture::new()).await?;

    let tennis = ctx.create_game_type("Tennis", true).await?;
    let cricket = ctx.create_game_type("Cricket", true).await?;
    let badminton = ctx.create_game_type("Badminton", true).await?;
    ctx.create_game_type("Squash", false).await?;

    let tennis_court = ctx
        .create_court(branch_id, tennis, CourtFixture::named("Centre Court"))
        .await?;
    let cricket_court = ctx
        .create_court(branch_id, cricket, CourtFixture::named("Box Cricket"))
        .await?;
    let badminton_court = ctx
        .create_court(branch_id, badminton, CourtFixture::named("Shuttle Hall"))
        .await?;
    let inactive_court = ctx
        .create_court(
            branch_id,
            tennis,
            CourtFixture {
                is_active: false,
                ..CourtFixture::named("Closed Court")
            },
        )
        .await?;

    Ok(SeededCatalog {
        city_id,
        branch_id,
        tennis_court,
        cricket_court,
        badminton_court,
        inactive_court,
    })
}
