use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_AMENITY_ICON: &str = "✨";

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AmenityRow {
    pub id: Uuid,
    pub name: String,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmenityResponse {
    pub id: String,
    pub name: String,
    pub icon: String,
}

impl From<AmenityRow> for AmenityResponse {
    fn from(row: AmenityRow) -> Self {
        Self {
            id: row.id.to_string(),
            name: row.name,
            icon: row
                .icon
                .filter(|icon| !icon.is_empty())
                .unwrap_or_else(|| DEFAULT_AMENITY_ICON.to_string()),
        }
    }
}

impl AmenityResponse {
    /// Placeholder for an amenity whose details could not be looked up.
    pub fn fallback(token: &str) -> Self {
        Self {
            id: token.to_string(),
            name: token.to_string(),
            icon: DEFAULT_AMENITY_ICON.to_string(),
        }
    }
}
