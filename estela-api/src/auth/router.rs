use axum::{
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Redirect},
    routing::{get, post},
    Router,
};
use axum_login::tower_sessions::Session;
use oauth2::CsrfToken;
use serde::Deserialize;
use url::Url;

use crate::app_state::AppState;

const NEXT_URL_KEY: &str = "auth.next-url";
const CSRF_STATE_KEY: &str = "oauth.csrf-state";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(self::post::login))
        .route("/logout", get(self::post::logout).post(self::post::logout))
        .route("/oauth/callback", get(self::get::callback))
}

#[derive(Debug, Deserialize)]
struct NextUrl {
    next: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct AuthzResp {
    code: String,
    state: CsrfToken,
}

/// Only same-site relative paths are accepted as post-login destinations.
///
/// Browsers and the `url` crate read `\` as `/`, so `/\host` is as
/// protocol-relative as `//host`.
fn local_path(next: Option<String>) -> Option<String> {
    next.filter(|path| {
        path.starts_with('/')
            && !path.contains('\\')
            && !path.chars().any(char::is_control)
            && !path.starts_with("//")
    })
}

/// Resolves the stored destination against the app URL, falling back to the
/// app root when the result would leave its origin.
fn post_login_url(app_url: &Url, next: Option<&str>) -> Url {
    next.and_then(|path| app_url.join(path).ok())
        .filter(|url| url.origin() == app_url.origin())
        .unwrap_or_else(|| app_url.clone())
}

mod post {
    use crate::auth::AuthSession;

    use super::*;

    pub async fn login(
        auth_session: AuthSession,
        session: Session,
        Query(NextUrl { next }): Query<NextUrl>,
    ) -> impl IntoResponse {
        let (auth_url, csrf_state) = auth_session.backend.authorize_url();

        if let Err(e) = session.insert(CSRF_STATE_KEY, csrf_state.secret()).await {
            tracing::error!("Failed to store CSRF state: {}", e);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
        if let Err(e) = session.insert(NEXT_URL_KEY, local_path(next)).await {
            tracing::error!("Failed to store next URL: {}", e);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }

        Redirect::to(auth_url.as_str()).into_response()
    }

    pub async fn logout(mut auth_session: AuthSession) -> impl IntoResponse {
        match auth_session.logout().await {
            Ok(_) => Redirect::to("/login").into_response(),
            Err(e) => {
                tracing::error!("Failed to log out: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

mod get {
    use axum::extract::State;
    use tracing::instrument;

    use crate::auth::{backend::Credentials, AuthSession};

    use super::*;

    #[instrument(name = "auth_callback", skip(auth_session, session, app_state))]
    pub async fn callback(
        mut auth_session: AuthSession,
        session: Session,
        Query(AuthzResp {
            code,
            state: new_state,
        }): Query<AuthzResp>,
        State(app_state): State<AppState>,
    ) -> impl IntoResponse {
        let Ok(Some(old_state)) = session.get(CSRF_STATE_KEY).await else {
            tracing::error!("Failed to get CSRF state from session");
            return StatusCode::BAD_REQUEST.into_response();
        };

        let creds = Credentials {
            code,
            old_state,
            new_state,
        };

        let user = match auth_session.authenticate(creds).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                tracing::error!("CSRF state validation failed");
                return (StatusCode::UNAUTHORIZED, "Invalid CSRF state!").into_response();
            }
            Err(e) => {
                tracing::error!("Authentication failed: {}", e);
                return StatusCode::INTERNAL_SERVER_ERROR.into_response();
            }
        };

        if let Err(e) = auth_session.login(&user).await {
            tracing::error!("Failed to log in user: {}", e);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }

        let next = session
            .remove::<Option<String>>(NEXT_URL_KEY)
            .await
            .ok()
            .flatten()
            .flatten();

        let url = post_login_url(&app_state.app_url, next.as_deref());
        Redirect::to(url.as_str()).into_response()
    }
}
