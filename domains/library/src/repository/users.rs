//! User repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::User;
use pagemark_common::{RepositoryError, Result};

#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by login id
    pub async fn find_by_login_id(&self, login_id: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, login_id, display_name, created_at, updated_at
            FROM users
            WHERE login_id = $1
            "#,
        )
        .bind(login_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(RepositoryError::from)?;

        Ok(user)
    }

    /// Find a user by id
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, login_id, display_name, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(RepositoryError::from)?;

        Ok(user)
    }
}
