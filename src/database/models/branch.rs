use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::database::models::first_query_value;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BranchRow {
    pub id: Uuid,
    pub name: String,
    pub address_line1: Option<String>,
    pub city_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchResponse {
    pub id: String,
    pub name: String,
    pub location: Option<String>,
    pub city: String,
}

impl From<BranchRow> for BranchResponse {
    fn from(row: BranchRow) -> Self {
        Self {
            id: row.id.to_string(),
            name: row.name,
            location: row.address_line1,
            city: row.city_name,
        }
    }
}

/// Query for `/venues/branches`. A repeated `city` key keeps the first
/// non-blank value instead of rejecting the request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BranchFilter {
    pub city: Option<String>,
}

impl BranchFilter {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            city: first_query_value(pairs, "city"),
        }
    }
}
