use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Path, State,
    },
    response::Response,
    routing::get,
    Router,
};
use axum_extra::extract::CookieJar;
use futures_util::{stream::SplitSink, SinkExt, StreamExt};
use tracing::instrument;

use crate::{
    app_state::AppState,
    auth::AuthUser,
    domain::{services::EntrySubscription, Preferences},
    routes::{entries::parse_exercise, ApiError},
    utils::{client_clock::ClientClock, date_format::LocalClock, preference_cookies::CookiePreferences},
    views::{exercise::ViewContext, ServerMessage, ViewSession},
};

pub fn router() -> Router<AppState> {
    Router::new().route("/:exercise/live", get(live_session))
}

#[instrument(name = "live_session", skip(ws, user, jar, app_state), fields(user_id = %user.id))]
async fn live_session(
    ws: WebSocketUpgrade,
    user: AuthUser,
    Path(exercise): Path<String>,
    ClientClock(clock): ClientClock,
    jar: CookieJar,
    State(app_state): State<AppState>,
) -> Result<Response, ApiError> {
    let exercise = parse_exercise(&exercise)?;
    let preferences = Preferences::load(&CookiePreferences::new(jar, app_state.secure_cookies));

    let (session, subscription) = ViewSession::open(
        app_state.entry_service.clone(),
        user.id,
        exercise,
        ViewContext::new(preferences, clock),
    )
    .await?;

    Ok(ws.on_upgrade(move |socket| run_session(socket, session, subscription)))
}

/// Pumps snapshots and client intents until either side goes away.
///
/// Every snapshot and every handled intent is followed by a full render.
/// Failed intents are reported to the client and the session keeps going.
#[instrument(skip_all, fields(exercise = %session.exercise()))]
async fn run_session(socket: WebSocket, mut session: ViewSession, mut subscription: EntrySubscription) {
    let (mut sender, mut receiver) = socket.split();
    let offset = session.clock().offset();

    if send(&mut sender, &session.render()).await.is_err() {
        return;
    }

    loop {
        let message = tokio::select! {
            snapshot = subscription.next() => {
                let Some(snapshot) = snapshot else {
                    tracing::debug!("Entry channel closed");
                    break;
                };
                session.apply_snapshot(&snapshot);
                session.set_clock(LocalClock::new(offset));
                session.render()
            }
            incoming = receiver.next() => match incoming {
                Some(Ok(Message::Text(text))) => match session.handle_message(&text).await {
                    Ok(()) => {
                        session.set_clock(LocalClock::new(offset));
                        session.render()
                    }
                    Err(e) => {
                        tracing::warn!("Failed to handle intent: {}", e);
                        let error = ApiError::from(e);
                        ServerMessage::Error {
                            message: error.message().to_string(),
                        }
                    }
                },
                Some(Ok(Message::Close(_))) | None => break,
                Some(Ok(_)) => continue,
                Some(Err(e)) => {
                    tracing::debug!("WebSocket receive failed: {}", e);
                    break;
                }
            },
        };

        if send(&mut sender, &message).await.is_err() {
            break;
        }
    }

    subscription.unsubscribe();
    tracing::debug!("View session closed");
}

async fn send(
    sender: &mut SplitSink<WebSocket, Message>,
    message: &ServerMessage,
) -> Result<(), ()> {
    let json = serde_json::to_string(message).map_err(|e| {
        tracing::error!("Failed to serialize server message: {}", e);
    })?;

    sender.send(Message::Text(json)).await.map_err(|e| {
        tracing::debug!("WebSocket send failed: {}", e);
    })
}
