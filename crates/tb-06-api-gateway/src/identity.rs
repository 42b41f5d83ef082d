//! Authenticated requester.
//!
//! Credentials are checked upstream; the gateway only trusts the user id the
//! authentication layer places in the configured header.

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use shared_types::UserId;
use tracing::debug;

use crate::domain::error::ApiError;
use crate::router::AppState;

/// User id of the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requester(pub UserId);

#[async_trait]
impl FromRequestParts<AppState> for Requester {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let header = state.config.identity_header.as_str();
        let value = parts
            .headers
            .get(header)
            .ok_or(ApiError::Unauthenticated)?
            .to_str()
            .map_err(|_| ApiError::Unauthenticated)?;

        value.trim().parse::<UserId>().map(Requester).map_err(|_| {
            debug!(header, "Identity header is not a user id");
            ApiError::Unauthenticated
        })
    }
}
