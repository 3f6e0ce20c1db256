use crate::app_context::{AppContext, RequestContext};
use crate::geo::models::GeoPoint;
use crate::geo::{filter_by_radius, rank_by_distance};
use crate::locations::consts::{
    MAX_AUTOCOMPLETE_SUGGESTIONS, MIN_AUTOCOMPLETE_QUERY_LENGTH, SECONDS_PER_DAY,
};
use crate::locations::errors::LocationsError;
use crate::locations::models::{LocationRecord, NewLocation};
use crate::locations::requests::{
    BulkUploadRequest, NearbyLocationsRequest, SaveLocationRequest, SearchLocationsRequest,
};
use crate::locations::responses::{
    AutocompleteSuggestion, BulkUploadResponse, DeleteLocationResponse, LocationSummary,
    NearbyLocationsResponse, SaveLocationResponse, SearchHit, SearchLocationsResponse,
    StatisticsResponse,
};
use crate::storage::interface::ILocationStorage;
use crate::storage::locations::unix_timestamp;
use std::collections::HashSet;

pub struct LocationsHttpHandler<'a, LS: ILocationStorage> {
    app_context: AppContext<LS>,
    request_context: &'a RequestContext,
}

impl<'a, LS> LocationsHttpHandler<'a, LS>
where
    LS: ILocationStorage,
{
    pub fn new(app_context: AppContext<LS>, request_context: &'a RequestContext) -> Self {
        Self {
            app_context,
            request_context,
        }
    }

    pub async fn list(&self) -> Vec<LocationRecord> {
        self.app_context.locations.all().await
    }

    pub async fn save(
        &self,
        request: SaveLocationRequest,
    ) -> Result<SaveLocationResponse, LocationsError> {
        let location = self.store(NewLocation::try_from(request)?).await?;
        Ok(SaveLocationResponse {
            error: false,
            location,
        })
    }

    pub async fn delete(&self, id: u64) -> Result<DeleteLocationResponse, LocationsError> {
        let Some(deleted) = self.app_context.locations.delete(id).await else {
            return Err(LocationsError::NotFound(id));
        };
        tracing::info!(
            task = "location_change",
            action = "delete",
            location_id = deleted.id,
            user_id = %self.request_context.user_id,
        );
        Ok(DeleteLocationResponse {
            error: false,
            id: deleted.id,
        })
    }

    pub async fn nearby(
        &self,
        request: NearbyLocationsRequest,
    ) -> Result<NearbyLocationsResponse, LocationsError> {
        let (Some(lat), Some(lng)) = (request.lat, request.lng) else {
            return Err(LocationsError::MissingCoordinates);
        };
        let origin = GeoPoint::new(lat, lng);
        let radius = request
            .radius
            .unwrap_or(self.app_context.settings.default_radius_km);
        let candidates = self.active_locations().await;
        let locations = filter_by_radius(origin, &candidates, radius)?;
        tracing::info!(
            task = "proximity_query",
            origin_lat = origin.lat,
            origin_lng = origin.lng,
            radius_km = radius,
            candidates = candidates.len(),
            matches = locations.len(),
        );
        Ok(NearbyLocationsResponse {
            error: false,
            total: locations.len(),
            locations,
            radius,
        })
    }

    pub async fn bulk_upload(
        &self,
        request: BulkUploadRequest,
    ) -> Result<BulkUploadResponse, LocationsError> {
        if request.locations.is_empty() {
            return Err(LocationsError::NoLocationsProvided);
        }
        Ok(self.import(request.locations).await)
    }

    /// Saves each location in turn. Points too close to an already stored one
    /// (including one stored earlier in the same batch) are skipped, malformed
    /// or invalid ones are reported in `errors`.
    pub async fn import(&self, entries: Vec<serde_json::Value>) -> BulkUploadResponse {
        let mut response = BulkUploadResponse {
            error: false,
            added: 0,
            skipped: 0,
            errors: vec![],
        };
        for (index, entry) in entries.into_iter().enumerate() {
            let location = serde_json::from_value::<SaveLocationRequest>(entry)
                .map_err(LocationsError::from)
                .and_then(NewLocation::try_from);
            let stored = match location {
                Ok(location) => self.store(location).await,
                Err(err) => Err(err),
            };
            match stored {
                Ok(_) => response.added += 1,
                Err(LocationsError::Duplicate { .. }) => response.skipped += 1,
                Err(err) => response
                    .errors
                    .push(format!("Error processing location #{}: {err}", index + 1)),
            }
        }
        response
    }

    pub async fn statistics(&self) -> StatisticsResponse {
        let locations = self.app_context.locations.all().await;
        let now = unix_timestamp();
        let start_of_today = now - now % SECONDS_PER_DAY;
        StatisticsResponse {
            total_locations: locations.len(),
            active_locations: locations.iter().filter(|l| l.is_active).count(),
            locations_added_today: locations
                .iter()
                .filter(|l| l.created_at >= start_of_today)
                .count(),
            most_recent_location: locations
                .into_iter()
                .max_by_key(|l| l.id)
                .map(|l| LocationSummary {
                    name: l.name,
                    address: l.address,
                }),
        }
    }

    pub async fn search(
        &self,
        request: SearchLocationsRequest,
    ) -> Result<SearchLocationsResponse, LocationsError> {
        let keyword = request.keyword.unwrap_or_default().trim().to_string();
        let needle = keyword.to_lowercase();
        let candidates: Vec<LocationRecord> = self
            .active_locations()
            .await
            .into_iter()
            .filter(|location| needle.is_empty() || location.matches_keyword(&needle))
            .collect();
        // Distances only make sense with a full origin; a lone coordinate is ignored.
        let locations: Vec<SearchHit> = match (request.lat, request.lng, request.radius) {
            (Some(lat), Some(lng), Some(radius)) => {
                filter_by_radius(GeoPoint::new(lat, lng), &candidates, radius)?
                    .into_iter()
                    .map(SearchHit::from)
                    .collect()
            }
            (Some(lat), Some(lng), None) => rank_by_distance(GeoPoint::new(lat, lng), &candidates)?
                .into_iter()
                .map(SearchHit::from)
                .collect(),
            _ => candidates.into_iter().map(SearchHit::from).collect(),
        };
        tracing::info!(
            task = "proximity_query",
            keyword = %keyword,
            matches = locations.len(),
        );
        Ok(SearchLocationsResponse {
            error: false,
            total: locations.len(),
            locations,
            keyword,
        })
    }

    pub async fn autocomplete(&self, query: &str) -> Vec<AutocompleteSuggestion> {
        let query = query.trim();
        if query.chars().count() < MIN_AUTOCOMPLETE_QUERY_LENGTH {
            return vec![];
        }
        let needle = query.to_lowercase();
        let mut seen_names = HashSet::new();
        self.app_context
            .locations
            .all()
            .await
            .into_iter()
            .filter(|location| location.name.to_lowercase().contains(&needle))
            .take(MAX_AUTOCOMPLETE_SUGGESTIONS)
            .filter(|location| seen_names.insert(location.name.clone()))
            .map(|location| AutocompleteSuggestion {
                id: location.id,
                name: location.name,
                address: location.address,
            })
            .collect()
    }

    async fn active_locations(&self) -> Vec<LocationRecord> {
        let mut locations = self.app_context.locations.all().await;
        locations.retain(|location| location.is_active);
        locations
    }

    async fn store(&self, location: NewLocation) -> Result<LocationRecord, LocationsError> {
        let record = self
            .app_context
            .locations
            .insert_unless_near(location, self.app_context.settings.duplicate_threshold_km)
            .await
            .map_err(|too_close| LocationsError::Duplicate {
                existing_id: too_close.existing_id,
            })?;
        tracing::info!(
            task = "location_change",
            action = "save",
            location_id = record.id,
            user_id = %self.request_context.user_id,
        );
        Ok(record)
    }
}
