use crate::auth::passcode;
use crate::auth::responses::{PasscodeExtractionError, PasscodeExtractionReason};
use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::Json;

type Rejection = (StatusCode, Json<PasscodeExtractionError>);

fn reject(status: StatusCode, reason: PasscodeExtractionReason) -> Rejection {
    (
        status,
        Json(PasscodeExtractionError {
            error: true,
            reason,
        }),
    )
}

/// Any caller holding a valid passcode.
pub struct User {
    pub user_id: String,
    pub is_admin: bool,
}

#[async_trait]
impl<S> FromRequestParts<S> for User
where
    S: Send + Sync,
{
    type Rejection = Rejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(header) = parts.headers.get("Passcode") else {
            return Err(reject(
                StatusCode::UNAUTHORIZED,
                PasscodeExtractionReason::NoPasscodeHeaderProvided,
            ));
        };
        let jwt_payload = header
            .to_str()
            .ok()
            .and_then(|raw| passcode::decode(raw).ok())
            .ok_or_else(|| {
                reject(
                    StatusCode::UNAUTHORIZED,
                    PasscodeExtractionReason::InvalidPasscode,
                )
            })?;
        Ok(User {
            user_id: jwt_payload.user_id,
            is_admin: jwt_payload.is_admin,
        })
    }
}

/// A caller allowed to add and remove locations.
pub struct Admin {
    pub user_id: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for Admin
where
    S: Send + Sync,
{
    type Rejection = Rejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let user = User::from_request_parts(parts, state).await?;
        if !user.is_admin {
            return Err(reject(
                StatusCode::FORBIDDEN,
                PasscodeExtractionReason::NotAnAdmin,
            ));
        }
        Ok(Admin {
            user_id: user.user_id,
        })
    }
}
