use crate::geo::consts::{MAX_LATITUDE, MAX_LONGITUDE};
use crate::geo::errors::InvalidArgument;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Checks that both coordinates are finite and inside their ranges.
    /// `NaN` fails the range comparison, so it is rejected too.
    pub fn validate(&self) -> Result<(), InvalidArgument> {
        if !(-MAX_LATITUDE..=MAX_LATITUDE).contains(&self.lat) {
            return Err(InvalidArgument::Latitude(self.lat));
        }
        if !(-MAX_LONGITUDE..=MAX_LONGITUDE).contains(&self.lng) {
            return Err(InvalidArgument::Longitude(self.lng));
        }
        Ok(())
    }
}

/// Anything that sits at a single point on the map.
pub trait Located {
    fn position(&self) -> GeoPoint;
}

impl Located for GeoPoint {
    fn position(&self) -> GeoPoint {
        *self
    }
}

/// A copy of a record decorated with its distance from the query origin.
///
/// The record's own fields are flattened, so over the wire this looks like
/// the record with an extra `distance` key.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Nearby<T> {
    #[serde(flatten)]
    pub record: T,
    /// Great-circle distance from the query origin, in kilometers.
    pub distance: f64,
}
