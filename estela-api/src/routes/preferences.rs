use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use axum_extra::extract::CookieJar;
use tracing::instrument;

use crate::{
    app_state::AppState, domain::Preferences, i18n::Translations,
    utils::preference_cookies::CookiePreferences,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/preferences", get(get_preferences))
        .route("/preferences/language/toggle", post(toggle_language))
        .route("/preferences/theme/toggle", post(toggle_theme))
        .route("/translations", get(get_translations))
}

async fn get_preferences(jar: CookieJar, State(app_state): State<AppState>) -> Json<Preferences> {
    let storage = CookiePreferences::new(jar, app_state.secure_cookies);
    Json(Preferences::load(&storage))
}

#[instrument(name = "toggle_language", skip_all)]
async fn toggle_language(
    jar: CookieJar,
    State(app_state): State<AppState>,
) -> (CookieJar, Json<Preferences>) {
    let mut storage = CookiePreferences::new(jar, app_state.secure_cookies);
    let mut preferences = Preferences::load(&storage);
    preferences.toggle_language(&mut storage);

    (storage.into_jar(), Json(preferences))
}

#[instrument(name = "toggle_theme", skip_all)]
async fn toggle_theme(
    jar: CookieJar,
    State(app_state): State<AppState>,
) -> (CookieJar, Json<Preferences>) {
    let mut storage = CookiePreferences::new(jar, app_state.secure_cookies);
    let mut preferences = Preferences::load(&storage);
    preferences.toggle_theme(&mut storage);

    (storage.into_jar(), Json(preferences))
}

/// The full string table for the caller's active language.
async fn get_translations(
    jar: CookieJar,
    State(app_state): State<AppState>,
) -> Json<&'static Translations> {
    let storage = CookiePreferences::new(jar, app_state.secure_cookies);
    Json(Preferences::load(&storage).translations())
}
