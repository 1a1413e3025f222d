use std::sync::Arc;

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    response::Redirect,
    Router,
};
use axum_extra::extract::cookie::SameSite;
use axum_login::{
    login_required,
    tower_sessions::{CachingSessionStore, ExpiredDeletion, Expiry, SessionManagerLayer},
    AuthManagerLayer, AuthManagerLayerBuilder,
};
use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use sqlx::PgPool;
use time::Duration;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::{DefaultMakeSpan, TraceLayer},
};
use tower_sessions_moka_store::MokaStore;
use tower_sessions_sqlx_store::PostgresStore;
use url::Url;

type SessionStore = CachingSessionStore<MokaStore, PostgresStore>;

use crate::{
    adapters::outbound::postgres::PostgresEntryRepository,
    app_state::AppState,
    auth::{self, AuthBackend},
    config::Settings,
    domain::services::EntryServiceImpl,
    routes,
    utils::date_format::offset_from_minutes,
};

pub async fn create(connection_pool: PgPool, config: Settings) -> Router<()> {
    let app_url = Url::parse(&config.application.app_url).expect("Invalid app URL");
    let default_utc_offset =
        offset_from_minutes(config.application.default_utc_offset_minutes.into())
            .expect("Invalid default UTC offset");

    let repository = Arc::new(PostgresEntryRepository::new(connection_pool.clone()));
    let app_state = AppState::new(
        app_url,
        config.application.secure_cookies,
        default_utc_offset,
        Arc::new(EntryServiceImpl::new(repository)),
    );

    let auth_layer = new_auth_layer(connection_pool, config.clone()).await;

    let allowed_origin = config.application.app_url.trim_end_matches('/').to_string();
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
        .allow_origin(AllowOrigin::predicate(
            move |origin: &HeaderValue, _| origin.as_bytes() == allowed_origin.as_bytes(),
        ));

    routes()
        .layer(auth_layer)
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}

/// Every route of the application, without the session layer.
///
/// The shell redirects anonymous visitors to the login page; API routes
/// answer them with 401 through the [`auth::AuthUser`] extractor.
pub fn routes() -> Router<AppState> {
    let shell = routes::pages::protected_router()
        .route_layer(login_required!(AuthBackend, login_url = "/login"));

    let api = Router::new()
        .merge(routes::users::router())
        .nest(
            "/exercises",
            routes::entries::router().merge(routes::live::router()),
        );

    Router::new()
        .merge(shell)
        .merge(api)
        .merge(routes::pages::public_router())
        .merge(routes::preferences::router())
        .merge(auth::router())
        .fallback(|| async { Redirect::to("/") })
}

async fn new_auth_layer(
    connection_pool: PgPool,
    config: Settings,
) -> AuthManagerLayer<AuthBackend, SessionStore> {
    let client = BasicClient::new(
        ClientId::new(config.auth.client_id),
        Some(ClientSecret::new(config.auth.client_secret)),
        AuthUrl::new(config.auth.auth_url).expect("Invalid authorization endpoint URL"),
        Some(TokenUrl::new(config.auth.token_url).expect("Invalid token endpoint URL")),
    )
    .set_redirect_uri(RedirectUrl::new(config.auth.redirect_url).expect("Invalid redirect URL"));
    let userinfo_url = Url::parse(&config.auth.userinfo_url).expect("Invalid userinfo URL");

    // Sessions live in Postgres so they survive restarts
    let db_store = PostgresStore::new(connection_pool.clone());
    db_store
        .migrate()
        .await
        .expect("Failed to run session store migration");

    let deletion_task = tokio::task::spawn(
        db_store
            .clone()
            .continuously_delete_expired(tokio::time::Duration::from_secs(60)),
    );
    drop(deletion_task);

    let cache_store = MokaStore::new(Some(2_000));
    let session_store = CachingSessionStore::new(cache_store, db_store);

    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(config.application.secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    let backend = AuthBackend::new(connection_pool, client, userinfo_url);
    AuthManagerLayerBuilder::new(backend, session_layer).build()
}
