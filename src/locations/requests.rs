use crate::geo::models::GeoPoint;
use crate::locations::consts::{
    DEFAULT_LOCATION_ADDRESS, DEFAULT_LOCATION_NAME, MAX_ADDRESS_LENGTH, MAX_NAME_LENGTH,
};
use crate::locations::errors::LocationsError;
use crate::locations::models::{LocationDetails, NewLocation};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// Form inputs reach the backend as strings as often as numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    String(String),
    Other(IgnoredAny),
}

/// Values that are not numbers become NaN, which coordinate and radius
/// validation then reject with a typed error instead of a body rejection.
fn deserialize_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrString::Number(value)) => Ok(Some(value)),
        Some(NumberOrString::String(raw)) if raw.trim().is_empty() => Ok(None),
        Some(NumberOrString::String(raw)) => Ok(Some(raw.trim().parse::<f64>().unwrap_or(f64::NAN))),
        Some(NumberOrString::Other(_)) => Ok(Some(f64::NAN)),
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveLocationRequest {
    #[serde(default, deserialize_with = "deserialize_number")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_number")]
    pub lng: Option<f64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(flatten)]
    pub details: LocationDetails,
    #[serde(default)]
    pub is_active: Option<bool>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyLocationsRequest {
    #[serde(default, deserialize_with = "deserialize_number")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_number")]
    pub lng: Option<f64>,
    /// Kilometers. Falls back to the configured default radius.
    #[serde(default, deserialize_with = "deserialize_number")]
    pub radius: Option<f64>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkUploadRequest {
    /// Kept raw so one malformed entry cannot reject the whole batch.
    #[serde(default)]
    pub locations: Vec<serde_json::Value>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchLocationsRequest {
    #[serde(default)]
    pub keyword: Option<String>,
    #[serde(default, deserialize_with = "deserialize_number")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_number")]
    pub lng: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_number")]
    pub radius: Option<f64>,
}

#[derive(Serialize, Deserialize)]
pub struct AutocompleteQueryParam {
    #[serde(default)]
    pub q: String,
}

impl TryFrom<SaveLocationRequest> for NewLocation {
    type Error = LocationsError;

    fn try_from(request: SaveLocationRequest) -> Result<Self, Self::Error> {
        let (Some(lat), Some(lng)) = (request.lat, request.lng) else {
            return Err(LocationsError::MissingCoordinates);
        };
        let position = GeoPoint::new(lat, lng);
        position.validate()?;
        let name = non_blank(request.name).unwrap_or_else(|| DEFAULT_LOCATION_NAME.to_string());
        if name.graphemes(true).count() > MAX_NAME_LENGTH {
            return Err(LocationsError::NameTooLong {
                max: MAX_NAME_LENGTH,
            });
        }
        let address =
            non_blank(request.address).unwrap_or_else(|| DEFAULT_LOCATION_ADDRESS.to_string());
        if address.graphemes(true).count() > MAX_ADDRESS_LENGTH {
            return Err(LocationsError::AddressTooLong {
                max: MAX_ADDRESS_LENGTH,
            });
        }
        Ok(NewLocation {
            position,
            name,
            address,
            details: request.details,
            is_active: request.is_active.unwrap_or(true),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
