use crate::app_context::AppContext;
use crate::health::responses::HealthCheckResponse;
use crate::storage::interface::ILocationStorage;
use axum::extract::State;
use axum::response::Json;

pub async fn healthcheck<LS>(State(app_context): State<AppContext<LS>>) -> Json<HealthCheckResponse>
where
    LS: ILocationStorage,
{
    Json(HealthCheckResponse {
        error: false,
        locations_count: app_context.locations.count().await,
    })
}
