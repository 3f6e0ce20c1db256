use crate::geo::models::{GeoPoint, Located};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationRecord {
    pub id: u64,
    pub lat: f64,
    pub lng: f64,
    pub name: String,
    pub address: String,
    #[serde(flatten)]
    pub details: LocationDetails,
    pub is_active: bool,
    /// Unix timestamp (seconds) of when the store accepted the record.
    pub created_at: u64,
}

impl Located for LocationRecord {
    fn position(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }
}

/// Optional operational metadata of a pickup point.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Free text, e.g. "Mon-Fri 9AM-5PM".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operating_hours: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<String>,
    /// Free text, e.g. "Serves 50 people daily".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food_types: Option<String>,
}

/// A validated location that has not been assigned an id yet.
#[derive(Clone, Debug, PartialEq)]
pub struct NewLocation {
    pub position: GeoPoint,
    pub name: String,
    pub address: String,
    pub details: LocationDetails,
    pub is_active: bool,
}

impl Located for NewLocation {
    fn position(&self) -> GeoPoint {
        self.position
    }
}

impl LocationRecord {
    pub fn from_new(id: u64, created_at: u64, location: NewLocation) -> Self {
        Self {
            id,
            lat: location.position.lat,
            lng: location.position.lng,
            name: location.name,
            address: location.address,
            details: location.details,
            is_active: location.is_active,
            created_at,
        }
    }

    /// Case-insensitive substring match against name, address and food types.
    /// `needle` must already be lowercase.
    pub fn matches_keyword(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.address.to_lowercase().contains(needle)
            || self
                .details
                .food_types
                .as_deref()
                .is_some_and(|food_types| food_types.to_lowercase().contains(needle))
    }
}
