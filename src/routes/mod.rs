use actix_web::web;

use crate::handlers::health;

pub mod venues;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(health::index))
        .route("/health", web::get().to(health::health))
        .configure(venues::configure);
}
