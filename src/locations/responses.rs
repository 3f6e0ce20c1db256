use crate::geo::models::Nearby;
use crate::locations::models::LocationRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveLocationResponse {
    pub error: bool,
    pub location: LocationRecord,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteLocationResponse {
    pub error: bool,
    pub id: u64,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyLocationsResponse {
    pub error: bool,
    pub locations: Vec<Nearby<LocationRecord>>,
    pub total: usize,
    /// The radius actually applied, after falling back to the default.
    pub radius: f64,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkUploadResponse {
    pub error: bool,
    pub added: usize,
    pub skipped: usize,
    pub errors: Vec<String>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsResponse {
    pub total_locations: usize,
    pub active_locations: usize,
    pub locations_added_today: usize,
    pub most_recent_location: Option<LocationSummary>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationSummary {
    pub name: String,
    pub address: String,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchLocationsResponse {
    pub error: bool,
    pub locations: Vec<SearchHit>,
    pub total: usize,
    pub keyword: String,
}

/// A search result; `distance` is only present when the search had an origin.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    #[serde(flatten)]
    pub location: LocationRecord,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

impl From<LocationRecord> for SearchHit {
    fn from(location: LocationRecord) -> Self {
        Self {
            location,
            distance: None,
        }
    }
}

impl From<Nearby<LocationRecord>> for SearchHit {
    fn from(nearby: Nearby<LocationRecord>) -> Self {
        Self {
            location: nearby.record,
            distance: Some(nearby.distance),
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutocompleteSuggestion {
    pub id: u64,
    pub name: String,
    pub address: String,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationErrorResponse {
    pub error: bool,
    pub error_code: LocationErrorCode,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LocationErrorCode {
    InvalidCoordinates,
    InvalidRadius,
    NameTooLong,
    AddressTooLong,
    DuplicateLocation,
    MalformedLocation,
    NoLocationsProvided,
    LocationNotFound,
}
