//! Type definitions for GraphQL API responses and variables

use serde::{Deserialize, Serialize};

// ============================================================================
// Listing Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub image: String,
    pub address: String,
    pub price: i64,
    pub num_of_guests: i32,
    pub num_of_beds: i32,
    pub num_of_baths: i32,
    pub rating: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingsData {
    pub listings: Vec<Listing>,
}

impl ListingsData {
    pub fn contains(&self, id: &str) -> bool {
        self.listings.iter().any(|listing| listing.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeletedListing {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteListingData {
    pub delete_listing: DeletedListing,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteListingVariables {
    pub id: String,
}

// ============================================================================
// Session Types
// ============================================================================

/// Session identity returned by the log in / log out mutations.
/// A `null` field means the server did not make it available.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewer {
    pub id: Option<String>,
    pub token: Option<String>,
    pub avatar: Option<String>,
    pub has_wallet: Option<bool>,
    pub did_request: bool,
}

impl Viewer {
    pub fn is_signed_in(&self) -> bool {
        self.id.is_some() && self.token.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogInInput {
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogInVariables {
    pub input: Option<LogInInput>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogInData {
    pub log_in: Viewer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogOutData {
    pub log_out: Viewer,
}
