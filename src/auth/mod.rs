use crate::cli::Args;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::sync::OnceLock;

pub mod extractors;
pub mod handlers;
pub mod passcode;
pub mod responses;

static JWT_SIGNING_KEY: OnceLock<Hmac<Sha256>> = OnceLock::new();

/// Sets the passcode signing key. Later calls keep the first key.
pub fn init(args: &Args) -> anyhow::Result<()> {
    let key = Hmac::new_from_slice(args.jwt_signing_key.as_bytes())
        .map_err(|_| anyhow::anyhow!("Failed to create JWT signing key."))?;
    let _ = JWT_SIGNING_KEY.set(key);
    Ok(())
}
