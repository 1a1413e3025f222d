use axum::{
    extract::{Query, State},
    response::Html,
    routing::get,
    Router,
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use crate::{
    app_state::AppState,
    auth::AuthUser,
    domain::Preferences,
    utils::{client_clock::ClientClock, preference_cookies::CookiePreferences},
    views::pages::{login_page, shell_page},
};

/// Pages that need a signed-in user.
pub fn protected_router() -> Router<AppState> {
    Router::new().route("/", get(shell))
}

pub fn public_router() -> Router<AppState> {
    Router::new().route("/login", get(login))
}

#[derive(Debug, Deserialize)]
struct LoginQuery {
    next: Option<String>,
}

async fn login(
    Query(LoginQuery { next }): Query<LoginQuery>,
    jar: CookieJar,
    State(app_state): State<AppState>,
) -> Html<String> {
    let preferences = Preferences::load(&CookiePreferences::new(jar, app_state.secure_cookies));
    Html(login_page(&preferences, next.as_deref()))
}

async fn shell(
    user: AuthUser,
    ClientClock(clock): ClientClock,
    jar: CookieJar,
    State(app_state): State<AppState>,
) -> Html<String> {
    let preferences = Preferences::load(&CookiePreferences::new(jar, app_state.secure_cookies));
    Html(shell_page(&user.identity(), &preferences, &clock))
}
