//! Domain entities for the Pagemark library domain
//!
//! Each entity maps one-to-one onto its Postgres table and serializes
//! with camelCase keys to match the existing API clients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use pagemark_common::{Error, Result};

/// Reading status of a registered book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, Default)]
#[sqlx(type_name = "reading_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ReadingStatus {
    #[default]
    Reading,
    Finished,
    Paused,
}

impl ReadingStatus {
    /// All wire names, in declaration order
    pub const NAMES: [&'static str; 3] = ["reading", "finished", "paused"];

    /// Parse a caller-supplied status, tolerating case and surrounding
    /// whitespace. An absent value falls back to the default.
    pub fn parse(value: Option<&str>) -> Result<Self> {
        let Some(value) = value else {
            return Ok(Self::default());
        };

        match value.trim().to_lowercase().as_str() {
            "reading" => Ok(Self::Reading),
            "finished" => Ok(Self::Finished),
            "paused" => Ok(Self::Paused),
            _ => Err(Error::Validation(format!(
                "status must be one of {}",
                Self::NAMES.join(", ")
            ))),
        }
    }
}

impl std::fmt::Display for ReadingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reading => write!(f, "reading"),
            Self::Finished => write!(f, "finished"),
            Self::Paused => write!(f, "paused"),
        }
    }
}

/// User entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub login_id: String,
    pub display_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A book registered on a user's shelf, with reading progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UserBook {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Identifier in the external book API, usually a 13-digit ISBN
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
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A free-text note tied to a user book, optionally anchored to a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Feeling {
    pub id: Uuid,
    pub user_id: Uuid,
    pub user_book_id: Uuid,
    pub text: String,
    pub page_number: Option<i32>,
    pub recorded_at: DateTime<Utc>,
}
