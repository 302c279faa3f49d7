use anyhow::Result;
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::models::{
    AmenityResponse, AmenityRow, BranchResponse, VenueDetail, VenueSearchFilter, VenueSummary,
};
use crate::database::repositories::{
    AmenityRepository, BranchRepository, GameTypeRepository, VenueRepository,
};
use crate::database::types::FlexibleArray;
use crate::error::AppError;
use crate::services::array_field::{amenity_tokens, strip_quotes};

/// Read-only queries behind the `/venues` endpoints.
#[derive(Clone)]
pub struct VenueCatalogService {
    game_type_repository: GameTypeRepository,
    branch_repository: BranchRepository,
    venue_repository: VenueRepository,
    amenity_repository: AmenityRepository,
}

impl VenueCatalogService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            game_type_repository: GameTypeRepository::new(pool.clone()),
            branch_repository: BranchRepository::new(pool.clone()),
            venue_repository: VenueRepository::new(pool.clone()),
            amenity_repository: AmenityRepository::new(pool),
        }
    }

    pub async fn list_game_types(&self) -> Result<Vec<String>, AppError> {
        Ok(self.game_type_repository.get_active_names().await?)
    }

    pub async fn list_branches(&self, city: Option<&str>) -> Result<Vec<BranchResponse>, AppError> {
        let branches = self.branch_repository.get_active_branches(city).await?;

        Ok(branches.into_iter().map(BranchResponse::from).collect())
    }

    pub async fn search_venues(
        &self,
        filter: &VenueSearchFilter,
    ) -> Result<Vec<VenueSummary>, AppError> {
        log::debug!("Searching venues with filter {:?}", filter);

        let venues = self.venue_repository.search(filter).await?;
        log::info!("Found {} venues", venues.len());

        Ok(venues.into_iter().map(VenueSummary::from).collect())
    }

    /// Fetches one venue by id, including inactive ones.
    ///
    /// A malformed id is rejected before the datastore is queried and, like an
    /// unknown id, answers 404.
    pub async fn get_venue(&self, raw_id: &str) -> Result<VenueDetail, AppError> {
        let venue_id =
            Uuid::parse_str(raw_id).map_err(|_| AppError::InvalidVenueId(raw_id.to_string()))?;

        let row = self
            .venue_repository
            .find_by_id(venue_id)
            .await?
            .ok_or_else(AppError::venue_not_found)?;

        let amenities = self
            .resolve_amenities(row.amenities.as_ref().map(FlexibleArray::as_value))
            .await;

        Ok(VenueDetail {
            summary: VenueSummary::from(row.venue),
            amenities,
            terms_and_conditions: row.terms_and_conditions.unwrap_or_default(),
        })
    }

    async fn resolve_amenities(&self, raw: Option<&serde_json::Value>) -> Vec<AmenityResponse> {
        let tokens = amenity_tokens(raw);
        if tokens.is_empty() {
            return Vec::new();
        }

        let ids: Vec<String> = tokens.iter().map(|token| strip_quotes(token)).collect();
        let lookup = self.amenity_repository.find_by_ids(&ids).await;

        shape_amenities(&tokens, lookup)
    }
}

/// Shapes an amenity lookup result.
///
/// Rows found are returned as-is, so a lookup that succeeds with zero rows
/// yields no amenities. Only a failed lookup degrades to one placeholder per
/// stored token.
pub fn shape_amenities(
    tokens: &[String],
    lookup: Result<Vec<AmenityRow>>,
) -> Vec<AmenityResponse> {
    match lookup {
        Ok(rows) => rows.into_iter().map(AmenityResponse::from).collect(),
        Err(e) => {
            log::warn!("Amenity lookup failed, returning raw ids: {}", e);
            tokens
                .iter()
                .map(|token| AmenityResponse::fallback(token))
                .collect()
        }
    }
}
