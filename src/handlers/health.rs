use actix_web::{HttpResponse, Responder, web};
use sqlx::PgPool;

use crate::database::check_health;

pub async fn index() -> impl Responder {
    HttpResponse::Ok().body("Venue Catalog API v1.0")
}

pub async fn health(pool: web::Data<PgPool>) -> impl Responder {
    let database = check_health(&pool).await;

    HttpResponse::Ok().json(serde_json::json!({
        "status": if database { "ok" } else { "degraded" },
        "database": database,
        "timestamp": chrono::Utc::now()
    }))
}
