//! Feeling repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::Feeling;
use pagemark_common::{RepositoryError, Result};

/// Fields for recording a new feeling
#[derive(Debug, Clone)]
pub struct NewFeeling {
    pub user_id: Uuid,
    pub user_book_id: Uuid,
    pub text: String,
    pub page_number: Option<i32>,
}

#[derive(Clone)]
pub struct FeelingRepository {
    pool: PgPool,
}

impl FeelingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List the feelings recorded for one of a user's books, newest first
    pub async fn list_for_user_book(
        &self,
        user_id: Uuid,
        user_book_id: Uuid,
    ) -> Result<Vec<Feeling>> {
        let feelings = sqlx::query_as::<_, Feeling>(
            r#"
            SELECT id, user_id, user_book_id, text, page_number, recorded_at
            FROM feelings
            WHERE user_id = $1 AND user_book_id = $2
            ORDER BY recorded_at DESC
            "#,
        )
        .bind(user_id)
        .bind(user_book_id)
        .fetch_all(&self.pool)
        .await
        .map_err(RepositoryError::from)?;

        Ok(feelings)
    }

    /// Record a new feeling
    pub async fn insert(&self, new: NewFeeling) -> Result<Feeling> {
        let feeling = sqlx::query_as::<_, Feeling>(
            r#"
            INSERT INTO feelings (id, user_id, user_book_id, text, page_number, recorded_at)
            VALUES ($1, $2, $3, $4, $5, NOW())
            RETURNING id, user_id, user_book_id, text, page_number, recorded_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(new.user_id)
        .bind(new.user_book_id)
        .bind(&new.text)
        .bind(new.page_number)
        .fetch_one(&self.pool)
        .await
        .map_err(RepositoryError::from)?;

        Ok(feeling)
    }
}
