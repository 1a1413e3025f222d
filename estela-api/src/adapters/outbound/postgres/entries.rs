use async_trait::async_trait;
use sqlx::PgPool;
use time::OffsetDateTime;

use crate::{
    domain::{
        models::{
            EntryId, ExerciseKey, FreeformEntry, FreeformExercise, FreeformUpdate, TwoFlagsEntry,
            TwoFlagsUpdate, UserId,
        },
        ports::outbound::EntryRepository,
    },
    repositories::RepositoryError,
};

#[derive(sqlx::FromRow)]
struct TwoFlagsRow {
    id: String,
    recorded_at: OffsetDateTime,
    star_events: Vec<String>,
    tangle_events: Vec<String>,
    learning: String,
}

impl From<TwoFlagsRow> for TwoFlagsEntry {
    fn from(row: TwoFlagsRow) -> Self {
        Self {
            id: EntryId::from(row.id),
            timestamp: row.recorded_at,
            star_events: row.star_events,
            tangle_events: row.tangle_events,
            learning: row.learning,
        }
    }
}

#[derive(sqlx::FromRow)]
struct FreeformRow {
    id: String,
    recorded_at: OffsetDateTime,
    title: String,
    body: String,
}

impl From<FreeformRow> for FreeformEntry {
    fn from(row: FreeformRow) -> Self {
        Self {
            id: EntryId::from(row.id),
            timestamp: row.recorded_at,
            title: row.title,
            body: row.body,
        }
    }
}

pub struct PostgresEntryRepository {
    pool: PgPool,
}

impl PostgresEntryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn expect_one_row(rows_affected: u64, id: &EntryId) -> Result<(), RepositoryError> {
    if rows_affected == 0 {
        return Err(RepositoryError::NotFound(format!("entry {id}")));
    }
    Ok(())
}

#[async_trait]
impl EntryRepository for PostgresEntryRepository {
    async fn insert_two_flags(
        &self,
        user_id: &UserId,
        entry: &TwoFlagsEntry,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO two_flags_entries (id, user_id, recorded_at, star_events, tangle_events, learning)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(entry.id.as_str())
        .bind(user_id.as_i32())
        .bind(entry.timestamp)
        .bind(&entry.star_events)
        .bind(&entry.tangle_events)
        .bind(&entry.learning)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn insert_freeform(
        &self,
        user_id: &UserId,
        exercise: FreeformExercise,
        entry: &FreeformEntry,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO freeform_entries (id, user_id, exercise_key, recorded_at, title, body)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(entry.id.as_str())
        .bind(user_id.as_i32())
        .bind(exercise.key().as_str())
        .bind(entry.timestamp)
        .bind(&entry.title)
        .bind(&entry.body)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update_two_flags(
        &self,
        user_id: &UserId,
        id: &EntryId,
        update: &TwoFlagsUpdate,
    ) -> Result<(), RepositoryError> {
        let query = match update {
            TwoFlagsUpdate::Timestamp(timestamp) => sqlx::query(
                "UPDATE two_flags_entries SET recorded_at = $1 WHERE id = $2 AND user_id = $3",
            )
            .bind(*timestamp),
            TwoFlagsUpdate::StarEvents(items) => sqlx::query(
                "UPDATE two_flags_entries SET star_events = $1 WHERE id = $2 AND user_id = $3",
            )
            .bind(items.clone()),
            TwoFlagsUpdate::TangleEvents(items) => sqlx::query(
                "UPDATE two_flags_entries SET tangle_events = $1 WHERE id = $2 AND user_id = $3",
            )
            .bind(items.clone()),
            TwoFlagsUpdate::Learning(learning) => sqlx::query(
                "UPDATE two_flags_entries SET learning = $1 WHERE id = $2 AND user_id = $3",
            )
            .bind(learning.clone()),
        };

        let result = query
            .bind(id.as_str())
            .bind(user_id.as_i32())
            .execute(&self.pool)
            .await?;

        expect_one_row(result.rows_affected(), id)
    }

    async fn update_freeform(
        &self,
        user_id: &UserId,
        exercise: FreeformExercise,
        id: &EntryId,
        update: &FreeformUpdate,
    ) -> Result<(), RepositoryError> {
        let query = match update {
            FreeformUpdate::Timestamp(timestamp) => sqlx::query(
                "UPDATE freeform_entries SET recorded_at = $1 \
                 WHERE id = $2 AND user_id = $3 AND exercise_key = $4",
            )
            .bind(*timestamp),
            FreeformUpdate::Title(title) => sqlx::query(
                "UPDATE freeform_entries SET title = $1 \
                 WHERE id = $2 AND user_id = $3 AND exercise_key = $4",
            )
            .bind(title.clone()),
            FreeformUpdate::Body(body) => sqlx::query(
                "UPDATE freeform_entries SET body = $1 \
                 WHERE id = $2 AND user_id = $3 AND exercise_key = $4",
            )
            .bind(body.clone()),
        };

        let result = query
            .bind(id.as_str())
            .bind(user_id.as_i32())
            .bind(exercise.key().as_str())
            .execute(&self.pool)
            .await?;

        expect_one_row(result.rows_affected(), id)
    }

    async fn delete(
        &self,
        user_id: &UserId,
        exercise: ExerciseKey,
        id: &EntryId,
    ) -> Result<(), RepositoryError> {
        match exercise.freeform() {
            None => {
                sqlx::query("DELETE FROM two_flags_entries WHERE id = $1 AND user_id = $2")
                    .bind(id.as_str())
                    .bind(user_id.as_i32())
                    .execute(&self.pool)
                    .await?;
            }
            Some(freeform) => {
                sqlx::query(
                    "DELETE FROM freeform_entries WHERE id = $1 AND user_id = $2 AND exercise_key = $3",
                )
                .bind(id.as_str())
                .bind(user_id.as_i32())
                .bind(freeform.key().as_str())
                .execute(&self.pool)
                .await?;
            }
        }

        Ok(())
    }

    async fn list_two_flags(&self, user_id: &UserId) -> Result<Vec<TwoFlagsEntry>, RepositoryError> {
        let rows = sqlx::query_as::<_, TwoFlagsRow>(
            r#"
            SELECT id, recorded_at, star_events, tangle_events, learning
            FROM two_flags_entries
            WHERE user_id = $1
            ORDER BY recorded_at DESC, id DESC
            "#,
        )
        .bind(user_id.as_i32())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(TwoFlagsEntry::from).collect())
    }

    async fn list_freeform(
        &self,
        user_id: &UserId,
        exercise: FreeformExercise,
    ) -> Result<Vec<FreeformEntry>, RepositoryError> {
        let rows = sqlx::query_as::<_, FreeformRow>(
            r#"
            SELECT id, recorded_at, title, body
            FROM freeform_entries
            WHERE user_id = $1 AND exercise_key = $2
            ORDER BY recorded_at DESC, id DESC
            "#,
        )
        .bind(user_id.as_i32())
        .bind(exercise.key().as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(FreeformEntry::from).collect())
    }
}
