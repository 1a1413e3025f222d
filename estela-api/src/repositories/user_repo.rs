use sqlx::PgPool;

use crate::domain::{models::UserId, User};

use super::repo_error::RepositoryError;

pub trait UserRepository {
    async fn get_user(&self, id: UserId) -> Result<Option<User>, RepositoryError>;
    async fn upsert_user(&self, user: &NewUser) -> Result<User, RepositoryError>;
}

pub struct UserRepositoryImpl {
    pool: PgPool,
}

impl UserRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl UserRepository for UserRepositoryImpl {
    async fn get_user(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, display_name, avatar_url, access_token
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.as_i32())
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn upsert_user(&self, user: &NewUser) -> Result<User, RepositoryError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, display_name, avatar_url, access_token)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT(email) DO UPDATE
            SET display_name = EXCLUDED.display_name,
                avatar_url = EXCLUDED.avatar_url,
                access_token = EXCLUDED.access_token
            RETURNING id, email, display_name, avatar_url, access_token
            "#,
        )
        .bind(&user.email)
        .bind(&user.display_name)
        .bind(&user.avatar_url)
        .bind(&user.access_token)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }
}

pub struct NewUser {
    email: String,
    display_name: Option<String>,
    avatar_url: Option<String>,
    access_token: String,
}

impl NewUser {
    pub fn new(
        email: String,
        display_name: Option<String>,
        avatar_url: Option<String>,
        access_token: String,
    ) -> Self {
        Self {
            email,
            display_name,
            avatar_url,
            access_token,
        }
    }
}
