use crate::app_context::{AppContext, RequestContext};
use crate::auth::extractors::{Admin, User};
use crate::locations::errors::LocationsError;
use crate::locations::http::LocationsHttpHandler;
use crate::locations::models::LocationRecord;
use crate::locations::requests::{
    AutocompleteQueryParam, BulkUploadRequest, NearbyLocationsRequest, SaveLocationRequest,
    SearchLocationsRequest,
};
use crate::locations::responses::{
    AutocompleteSuggestion, BulkUploadResponse, DeleteLocationResponse, NearbyLocationsResponse,
    SaveLocationResponse, SearchLocationsResponse, StatisticsResponse,
};
use crate::storage::interface::ILocationStorage;
use axum::extract::{Path, Query, State};
use axum::response::Json;

pub async fn get_locations<LS>(
    user: User,
    State(app_context): State<AppContext<LS>>,
) -> Json<Vec<LocationRecord>>
where
    LS: ILocationStorage,
{
    let request_context = RequestContext {
        user_id: user.user_id,
    };
    let response = LocationsHttpHandler::new(app_context, &request_context)
        .list()
        .await;
    Json(response)
}

pub async fn save_location<LS>(
    admin: Admin,
    State(app_context): State<AppContext<LS>>,
    Json(request): Json<SaveLocationRequest>,
) -> Result<Json<SaveLocationResponse>, LocationsError>
where
    LS: ILocationStorage,
{
    let request_context = RequestContext {
        user_id: admin.user_id,
    };
    let response = LocationsHttpHandler::new(app_context, &request_context)
        .save(request)
        .await?;
    Ok(Json(response))
}

pub async fn delete_location<LS>(
    admin: Admin,
    Path(location_id): Path<u64>,
    State(app_context): State<AppContext<LS>>,
) -> Result<Json<DeleteLocationResponse>, LocationsError>
where
    LS: ILocationStorage,
{
    let request_context = RequestContext {
        user_id: admin.user_id,
    };
    let response = LocationsHttpHandler::new(app_context, &request_context)
        .delete(location_id)
        .await?;
    Ok(Json(response))
}

pub async fn get_nearby_locations<LS>(
    user: User,
    State(app_context): State<AppContext<LS>>,
    Json(request): Json<NearbyLocationsRequest>,
) -> Result<Json<NearbyLocationsResponse>, LocationsError>
where
    LS: ILocationStorage,
{
    let request_context = RequestContext {
        user_id: user.user_id,
    };
    let response = LocationsHttpHandler::new(app_context, &request_context)
        .nearby(request)
        .await?;
    Ok(Json(response))
}

pub async fn bulk_upload<LS>(
    admin: Admin,
    State(app_context): State<AppContext<LS>>,
    Json(request): Json<BulkUploadRequest>,
) -> Result<Json<BulkUploadResponse>, LocationsError>
where
    LS: ILocationStorage,
{
    let request_context = RequestContext {
        user_id: admin.user_id,
    };
    let response = LocationsHttpHandler::new(app_context, &request_context)
        .bulk_upload(request)
        .await?;
    Ok(Json(response))
}

pub async fn statistics<LS>(
    user: User,
    State(app_context): State<AppContext<LS>>,
) -> Json<StatisticsResponse>
where
    LS: ILocationStorage,
{
    let request_context = RequestContext {
        user_id: user.user_id,
    };
    let response = LocationsHttpHandler::new(app_context, &request_context)
        .statistics()
        .await;
    Json(response)
}

pub async fn search_locations<LS>(
    user: User,
    State(app_context): State<AppContext<LS>>,
    Json(request): Json<SearchLocationsRequest>,
) -> Result<Json<SearchLocationsResponse>, LocationsError>
where
    LS: ILocationStorage,
{
    let request_context = RequestContext {
        user_id: user.user_id,
    };
    let response = LocationsHttpHandler::new(app_context, &request_context)
        .search(request)
        .await?;
    Ok(Json(response))
}

pub async fn autocomplete<LS>(
    user: User,
    State(app_context): State<AppContext<LS>>,
    Query(AutocompleteQueryParam { q }): Query<AutocompleteQueryParam>,
) -> Json<Vec<AutocompleteSuggestion>>
where
    LS: ILocationStorage,
{
    let request_context = RequestContext {
        user_id: user.user_id,
    };
    let response = LocationsHttpHandler::new(app_context, &request_context)
        .autocomplete(&q)
        .await;
    Json(response)
}
