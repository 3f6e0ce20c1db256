use crate::auth::extractors::User;
use crate::auth::responses::WhoAmIResponse;
use axum::response::Json;

#[axum::debug_handler]
pub async fn whoami(user: User) -> Json<WhoAmIResponse> {
    Json(WhoAmIResponse {
        error: false,
        user_id: user.user_id,
        is_admin: user.is_admin,
    })
}
