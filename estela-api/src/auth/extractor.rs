use std::ops::Deref;

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::{domain::User, routes::ApiError};

use super::AuthSession;

/// The signed-in [`User`], or a 401 JSON error for API routes.
///
/// Every entry store call takes the user id from here, so nothing reaches
/// the store without a resolved identity.
#[derive(Debug, Clone)]
pub struct AuthUser(User);

impl From<User> for AuthUser {
    fn from(user: User) -> Self {
        AuthUser(user)
    }
}

impl Deref for AuthUser {
    type Target = User;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AuthSession: FromRequestParts<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_session = AuthSession::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::unauthorized("Not authenticated"))?;

        auth_session
            .user
            .map(AuthUser)
            .ok_or_else(|| ApiError::unauthorized("Not authenticated"))
    }
}
