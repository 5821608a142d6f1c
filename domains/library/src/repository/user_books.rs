//! User book repository
//!
//! A user may register a given external book id at most once; the
//! `user_books_user_id_external_id_key` unique constraint backs the
//! conflict mapping in `RepositoryError`.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{ReadingStatus, UserBook};
use pagemark_common::{RepositoryError, Result};

const RETURNING_COLUMNS: &str = r#"
    RETURNING id, user_id, external_id, title, author, page_count, cover_url,
              status, current_page, goal_date, started_at, finished_at,
              created_at, updated_at
"#;

/// Fields for registering a new user book
#[derive(Debug, Clone)]
pub struct NewUserBook {
    pub user_id: Uuid,
    pub external_id: String,
    pub title: String,
    pub author: Option<String>,
    pub page_count: Option<i32>,
    pub cover_url: Option<String>,
    pub status: ReadingStatus,
    pub current_page: Option<i32>,
    pub goal_date: Option<DateTime<Utc>>,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
}

/// Partial update of reading progress
#[derive(Debug, Clone, Default)]
pub struct UserBookChanges {
    pub page_count: Option<i32>,
    pub current_page: Option<i32>,
    pub goal_date: Option<DateTime<Utc>>,
}

impl UserBookChanges {
    pub fn is_empty(&self) -> bool {
        self.page_count.is_none() && self.current_page.is_none() && self.goal_date.is_none()
    }
}

#[derive(Clone)]
pub struct UserBookRepository {
    pool: PgPool,
}

impl UserBookRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List a user's registered books, newest first
    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<UserBook>> {
        let books = sqlx::query_as::<_, UserBook>(
            r#"
            SELECT id, user_id, external_id, title, author, page_count, cover_url,
                   status, current_page, goal_date, started_at, finished_at,
                   created_at, updated_at
            FROM user_books
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(RepositoryError::from)?;

        Ok(books)
    }

    /// Register a new book on a user's shelf
    pub async fn insert(&self, new: NewUserBook) -> Result<UserBook> {
        let query = format!(
            r#"
            INSERT INTO user_books (id, user_id, external_id, title, author, page_count,
                                    cover_url, status, current_page, goal_date,
                                    started_at, finished_at, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, NOW(), NOW())
            {RETURNING_COLUMNS}
            "#
        );

        let book = sqlx::query_as::<_, UserBook>(&query)
            .bind(Uuid::new_v4())
            .bind(new.user_id)
            .bind(&new.external_id)
            .bind(&new.title)
            .bind(&new.author)
            .bind(new.page_count)
            .bind(&new.cover_url)
            .bind(new.status)
            .bind(new.current_page)
            .bind(new.goal_date)
            .bind(new.started_at)
            .bind(new.finished_at)
            .fetch_one(&self.pool)
            .await
            .map_err(RepositoryError::from)?;

        Ok(book)
    }

    /// Owner of a user book, when it exists
    pub async fn find_owner(&self, id: Uuid) -> Result<Option<Uuid>> {
        let owner = sqlx::query_scalar::<_, Uuid>(
            r#"
            SELECT user_id FROM user_books WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(RepositoryError::from)?;

        Ok(owner)
    }

    /// Apply a partial progress update; absent fields keep their value
    pub async fn update(&self, id: Uuid, changes: UserBookChanges) -> Result<UserBook> {
        let query = format!(
            r#"
            UPDATE user_books
            SET page_count = COALESCE($2, page_count),
                current_page = COALESCE($3, current_page),
                goal_date = COALESCE($4, goal_date),
                updated_at = NOW()
            WHERE id = $1
            {RETURNING_COLUMNS}
            "#
        );

        let book = sqlx::query_as::<_, UserBook>(&query)
            .bind(id)
            .bind(changes.page_count)
            .bind(changes.current_page)
            .bind(changes.goal_date)
            .fetch_one(&self.pool)
            .await
            .map_err(RepositoryError::from)?;

        Ok(book)
    }

    /// Remove a user book; returns false when it did not exist
    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM user_books WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result.rows_affected() > 0)
    }
}
