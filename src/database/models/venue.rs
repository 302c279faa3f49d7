use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::database::models::{AmenityResponse, first_query_value};
use crate::database::types::FlexibleArray;
use crate::services::array_field::parse_array_field;

/// Court joined with its branch, city and game type.
#[derive(Debug, Clone, Default, sqlx::FromRow)]
pub struct VenueRow {
    pub id: Uuid,
    pub court_name: Option<String>,
    /// NUMERIC rendered by Postgres, so the stored scale survives.
    pub prices: Option<String>,
    pub photos: Option<FlexibleArray>,
    pub videos: Option<FlexibleArray>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
    pub branch_name: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub city_name: Option<String>,
    pub game_type: Option<String>,
}

#[derive(Debug, Clone, Default, sqlx::FromRow)]
pub struct VenueDetailRow {
    #[sqlx(flatten)]
    pub venue: VenueRow,
    pub amenities: Option<FlexibleArray>,
    pub terms_and_conditions: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenueSummary {
    pub id: String,
    pub court_name: String,
    pub location: String,
    pub game_type: String,
    pub prices: String,
    pub description: String,
    pub photos: Vec<String>,
    pub videos: Vec<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenueDetail {
    #[serde(flatten)]
    pub summary: VenueSummary,
    pub amenities: Vec<AmenityResponse>,
    pub terms_and_conditions: String,
}

impl From<VenueRow> for VenueSummary {
    fn from(row: VenueRow) -> Self {
        let game_type = row.game_type.unwrap_or_default();

        // Missing address or city still render their segment
        let location = format!(
            "{}, {}",
            row.location.unwrap_or_default(),
            row.city_name.unwrap_or_default()
        );

        let description = match row.description {
            Some(description) if !description.is_empty() => description,
            _ => format!(
                "{} - {} Court",
                row.branch_name.unwrap_or_default(),
                game_type
            ),
        };

        Self {
            id: row.id.to_string(),
            court_name: row.court_name.unwrap_or_default(),
            location,
            prices: row.prices.unwrap_or_else(|| "0".to_string()),
            description,
            photos: parse_array_field(row.photos.as_ref().map(FlexibleArray::as_value)),
            videos: parse_array_field(row.videos.as_ref().map(FlexibleArray::as_value)),
            created_at: row.created_at.map(iso_timestamp),
            updated_at: row.updated_at.map(iso_timestamp),
            game_type,
        }
    }
}

/// ISO-8601 without a zone; fractional seconds only when present.
pub fn iso_timestamp(value: NaiveDateTime) -> String {
    if value.nanosecond() == 0 {
        value.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        value.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GameTypeFilter {
    /// Case-insensitive substring match on the game type name.
    Contains(String),
    /// Exact match against any of the names.
    AnyOf(Vec<String>),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VenueSearchFilter {
    pub city: Option<String>,
    pub branch_id: Option<String>,
    pub game_type: Option<GameTypeFilter>,
}

impl VenueSearchFilter {
    /// Builds a filter from raw query-string pairs.
    ///
    /// `location` is a synonym for `city`; a non-blank `city` wins. A
    /// `game_type` key given once is a substring match, given several times
    /// an exact-set match. Blank values and the literal `"undefined"` sent by
    /// the web client count as absent.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let city =
            first_query_value(pairs, "city").or_else(|| first_query_value(pairs, "location"));
        let branch_id = first_query_value(pairs, "branch_id");

        let game_types: Vec<&str> = pairs
            .iter()
            .filter(|(k, _)| k == "game_type")
            .map(|(_, v)| v.as_str())
            .collect();

        let game_type = match game_types.as_slice() {
            [] => None,
            [single] if single.is_empty() || *single == "undefined" => None,
            [single] => Some(GameTypeFilter::Contains(single.to_string())),
            many => {
                let names: Vec<String> = many
                    .iter()
                    .map(|name| name.trim())
                    .filter(|name| !name.is_empty() && *name != "undefined")
                    .map(str::to_string)
                    .collect();
                (!names.is_empty()).then_some(GameTypeFilter::AnyOf(names))
            }
        };

        Self {
            city,
            branch_id,
            game_type,
        }
    }
}
