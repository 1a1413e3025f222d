use std::str::FromStr;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use serde::Serialize;
use tracing::instrument;

use crate::{
    app_state::AppState,
    auth::AuthUser,
    domain::models::{EntryId, EntryUpdate, ExerciseEntries, ExerciseKey},
    routes::{error::ErrorCode, ApiError},
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/:exercise/entries", get(list_entries).post(create_entry))
        .route(
            "/:exercise/entries/:id",
            patch(update_entry).delete(delete_entry),
        )
}

/// Unknown exercise keys are treated as missing resources.
pub(crate) fn parse_exercise(key: &str) -> Result<ExerciseKey, ApiError> {
    ExerciseKey::from_str(key).map_err(|_| {
        ApiError::not_found(format!("unknown exercise: {key}")).with_code(ErrorCode::UnknownExercise)
    })
}

#[derive(Debug, Serialize)]
struct CreatedEntry {
    id: EntryId,
}

#[instrument(name = "list_entries", skip(user, app_state), fields(user_id = %user.id))]
async fn list_entries(
    user: AuthUser,
    Path(exercise): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<ExerciseEntries>, ApiError> {
    let exercise = parse_exercise(&exercise)?;
    let entries = app_state
        .entry_service
        .list_entries(&user.id, exercise)
        .await?;

    Ok(Json(entries))
}

#[instrument(name = "create_entry", skip(user, app_state), fields(user_id = %user.id))]
async fn create_entry(
    user: AuthUser,
    Path(exercise): Path<String>,
    State(app_state): State<AppState>,
) -> Result<(StatusCode, Json<CreatedEntry>), ApiError> {
    let exercise = parse_exercise(&exercise)?;
    let id = app_state
        .entry_service
        .create_entry(&user.id, exercise)
        .await?;

    Ok((StatusCode::CREATED, Json(CreatedEntry { id })))
}

#[instrument(name = "update_entry", skip(user, app_state, payload), fields(user_id = %user.id))]
async fn update_entry(
    user: AuthUser,
    Path((exercise, id)): Path<(String, String)>,
    State(app_state): State<AppState>,
    Json(payload): Json<serde_json::Value>,
) -> Result<StatusCode, ApiError> {
    let exercise = parse_exercise(&exercise)?;
    let update = EntryUpdate::from_json(exercise, payload)
        .map_err(|e| ApiError::bad_request(format!("invalid update: {e}")))?;

    app_state
        .entry_service
        .update_entry(&user.id, exercise, &EntryId::from(id), update)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[instrument(name = "delete_entry", skip(user, app_state), fields(user_id = %user.id))]
async fn delete_entry(
    user: AuthUser,
    Path((exercise, id)): Path<(String, String)>,
    State(app_state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    let exercise = parse_exercise(&exercise)?;
    app_state
        .entry_service
        .delete_entry(&user.id, exercise, &EntryId::from(id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::{models::UserId, User};

    fn user(id: i32) -> AuthUser {
        User {
            id: UserId::new(id),
            email: format!("user{id}@example.com"),
            display_name: None,
            avatar_url: None,
            access_token: "token".to_string(),
        }
        .into()
    }

    fn path(exercise: &str) -> Path<String> {
        Path(exercise.to_string())
    }

    #[test]
    fn exercise_keys_parse_or_404() {
        assert_eq!(parse_exercise("ejercicio3").unwrap(), ExerciseKey::IdealizedExpectations);
        assert_eq!(
            parse_exercise("ejercicio9").unwrap_err().status(),
            StatusCode::NOT_FOUND
        );
    }

    #[tokio::test]
    async fn created_entries_are_listed_for_their_owner_only() {
        let (state, _repository) = AppState::in_memory();

        let (status, Json(created)) =
            create_entry(user(1), path("ejercicio1"), State(state.clone()))
                .await
                .unwrap();
        assert_eq!(status, StatusCode::CREATED);

        let Json(entries) = list_entries(user(1), path("ejercicio1"), State(state.clone()))
            .await
            .unwrap();
        assert_eq!(entries.ids(), vec![&created.id]);

        let Json(others) = list_entries(user(2), path("ejercicio1"), State(state))
            .await
            .unwrap();
        assert!(others.is_empty());
    }

    #[tokio::test]
    async fn patch_applies_a_typed_update() {
        let (state, repository) = AppState::in_memory();
        let (_, Json(created)) = create_entry(user(1), path("ejercicio1"), State(state.clone()))
            .await
            .unwrap();

        let status = update_entry(
            user(1),
            Path(("ejercicio1".to_string(), created.id.to_string())),
            State(state),
            Json(json!({ "field": "tangleEvents", "value": ["Work stress"] })),
        )
        .await
        .unwrap();

        assert_eq!(status, StatusCode::NO_CONTENT);
        let stored = repository.two_flags(UserId::new(1), &created.id).unwrap();
        assert_eq!(stored.tangle_events, vec!["Work stress".to_string()]);
    }

    #[tokio::test]
    async fn patch_rejects_malformed_and_missing_targets() {
        let (state, _repository) = AppState::in_memory();

        let malformed = update_entry(
            user(1),
            Path(("ejercicio2".to_string(), "e1".to_string())),
            State(state.clone()),
            Json(json!({ "field": "starEvents", "value": [] })),
        )
        .await
        .unwrap_err();
        assert_eq!(malformed.status(), StatusCode::BAD_REQUEST);

        let missing = update_entry(
            user(1),
            Path(("ejercicio2".to_string(), "e1".to_string())),
            State(state),
            Json(json!({ "field": "title", "value": "Grandmother" })),
        )
        .await
        .unwrap_err();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let (state, repository) = AppState::in_memory();
        let (_, Json(created)) = create_entry(user(1), path("ejercicio2"), State(state.clone()))
            .await
            .unwrap();

        for _ in 0..2 {
            let status = delete_entry(
                user(1),
                Path(("ejercicio2".to_string(), created.id.to_string())),
                State(state.clone()),
            )
            .await
            .unwrap();
            assert_eq!(status, StatusCode::NO_CONTENT);
        }
        assert!(repository.is_empty());
    }
}
