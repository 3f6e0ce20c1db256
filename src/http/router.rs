use crate::app_context::AppContext;
use crate::cli::Args;
use crate::storage::interface::ILocationStorage;
use crate::{auth, health, http::cors, http::middleware, locations};
use axum::{
    routing::{delete, get, post},
    Router,
};
use tower::ServiceBuilder;

pub fn new<LS>(args: &Args, app_context: AppContext<LS>) -> Router
where
    LS: ILocationStorage,
{
    let cors_policy = cors::layer(args);
    tracing::info!("Initialized HTTP configuration.");

    let health_routes = Router::new().route("/check", get(health::handlers::healthcheck::<LS>));
    let auth_routes = Router::new().route("/whoami", get(auth::handlers::whoami));
    let foodmap_routes = Router::new()
        .route(
            "/get_locations",
            get(locations::handlers::get_locations::<LS>),
        )
        .route(
            "/save_location",
            post(locations::handlers::save_location::<LS>),
        )
        .route(
            "/delete_location/:location_id",
            delete(locations::handlers::delete_location::<LS>),
        )
        .route(
            "/get_nearby_locations",
            post(locations::handlers::get_nearby_locations::<LS>),
        )
        .route("/bulk_upload", post(locations::handlers::bulk_upload::<LS>))
        .route("/statistics", get(locations::handlers::statistics::<LS>))
        .route(
            "/search_locations",
            post(locations::handlers::search_locations::<LS>),
        )
        .route(
            "/autocomplete",
            get(locations::handlers::autocomplete::<LS>),
        );

    Router::new()
        .nest("/health", health_routes)
        .nest("/auth", auth_routes)
        .nest("/foodmap", foodmap_routes)
        .with_state(app_context)
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::tracing))
                .layer(cors_policy),
        )
}
