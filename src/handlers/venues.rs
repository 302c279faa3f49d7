use actix_web::{HttpRequest, HttpResponse, web};

use crate::database::models::{BranchFilter, VenueSearchFilter};
use crate::error::AppError;
use crate::middleware::RequestIdExt;
use crate::services::VenueCatalogService;

pub async fn get_game_types(
    catalog: web::Data<VenueCatalogService>,
) -> Result<HttpResponse, AppError> {
    let game_types = catalog.list_game_types().await?;

    Ok(HttpResponse::Ok().json(game_types))
}

pub async fn get_branches(
    catalog: web::Data<VenueCatalogService>,
    query: web::Query<Vec<(String, String)>>,
) -> Result<HttpResponse, AppError> {
    let filter = BranchFilter::from_pairs(&query);
    let branches = catalog.list_branches(filter.city.as_deref()).await?;

    Ok(HttpResponse::Ok().json(branches))
}

// Decoded as raw pairs so repeated keys never reject the request
pub async fn get_venues(
    catalog: web::Data<VenueCatalogService>,
    query: web::Query<Vec<(String, String)>>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let filter = VenueSearchFilter::from_pairs(&query);
    log::debug!(
        "Venue search query={:?} correlation_id={}",
        req.query_string(),
        req.correlation_id().unwrap_or_default()
    );
    let venues = catalog.search_venues(&filter).await?;

    Ok(HttpResponse::Ok().json(venues))
}

pub async fn get_venue(
    catalog: web::Data<VenueCatalogService>,
    path: web::Path<String>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let venue_id = path.into_inner();
    log::debug!(
        "Venue detail id={} correlation_id={}",
        venue_id,
        req.correlation_id().unwrap_or_default()
    );

    let venue = catalog.get_venue(&venue_id).await?;

    Ok(HttpResponse::Ok().json(venue))
}
