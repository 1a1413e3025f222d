use axum::{extract::State, routing::get, Json, Router};
use axum_extra::extract::CookieJar;
use serde::Serialize;

use crate::{
    app_state::AppState,
    auth::AuthUser,
    domain::{greeting, Identity, Preferences},
    utils::{client_clock::ClientClock, preference_cookies::CookiePreferences},
};

pub fn router() -> Router<AppState> {
    Router::new().route("/me", get(me))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Me {
    #[serde(flatten)]
    identity: Identity,
    greeting: String,
}

async fn me(
    user: AuthUser,
    ClientClock(clock): ClientClock,
    jar: CookieJar,
    State(app_state): State<AppState>,
) -> Json<Me> {
    let preferences = Preferences::load(&CookiePreferences::new(jar, app_state.secure_cookies));
    let identity = user.identity();
    let greeting = greeting(&identity, &clock, preferences.translations());

    Json(Me { identity, greeting })
}
