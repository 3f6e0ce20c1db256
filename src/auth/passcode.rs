use crate::auth::JWT_SIGNING_KEY;
use jwt::VerifyWithKey;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Serialize, Deserialize)]
pub struct JwtPayload {
    pub user_id: String,
    #[serde(default)]
    pub is_admin: bool,
}

#[derive(Debug, Error)]
pub enum PasscodeError {
    #[error("JWT signing key was not initialized")]
    KeyNotInitialized,
    #[error(transparent)]
    Jwt(#[from] jwt::Error),
}

pub fn decode(passcode: &str) -> Result<JwtPayload, PasscodeError> {
    let key = JWT_SIGNING_KEY
        .get()
        .ok_or(PasscodeError::KeyNotInitialized)?;
    Ok(passcode.verify_with_key(key)?)
}
