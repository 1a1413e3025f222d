use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

use crate::{app_state::AppState, routes::ApiError};

use super::date_format::{offset_from_minutes, LocalClock};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OffsetQuery {
    utc_offset: Option<i32>,
}

/// The caller's local clock, from the `utcOffset` query parameter (minutes
/// east of UTC) or the configured default zone.
#[derive(Debug, Clone, Copy)]
pub struct ClientClock(pub LocalClock);

#[async_trait]
impl<S> FromRequestParts<S> for ClientClock
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<OffsetQuery>::try_from_uri(&parts.uri)
            .map_err(|e| ApiError::bad_request(e.body_text()))?;

        let offset = match query.utc_offset {
            Some(minutes) => offset_from_minutes(minutes)?,
            None => AppState::from_ref(state).default_utc_offset,
        };

        Ok(ClientClock(LocalClock::new(offset)))
    }
}
