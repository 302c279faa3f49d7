use actix_web::web;

use crate::handlers::venues;

pub fn configure(cfg: &mut web::ServiceConfig) {
    // Fixed paths go first; `/{venue_id}` would otherwise capture them
    cfg.service(
        web::scope("/venues")
            .route("", web::get().to(venues::get_venues))
            .route("/", web::get().to(venues::get_venues))
            .route("/game-types", web::get().to(venues::get_game_types))
            .route("/branches", web::get().to(venues::get_branches))
            .route("/{venue_id}", web::get().to(venues::get_venue)),
    );
}
