//! Record request and response types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::records::db::Record;
use crate::backend::validation::{non_blank, Validate};
use crate::shared::SharedError;

/// Create/update request body
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct RecordRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Checked record fields, both non-blank and stored as sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordInput {
    pub title: String,
    pub description: String,
}

impl Validate for RecordRequest {
    type Valid = RecordInput;

    fn validate(self) -> Result<RecordInput, SharedError> {
        let missing = || SharedError::validation("title", "Please provide title and description");

        Ok(RecordInput {
            title: non_blank(self.title).ok_or_else(missing)?,
            description: non_blank(self.description).ok_or_else(missing)?,
        })
    }
}

/// Record as returned to its owner
///
/// `user` is the owner's ID.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RecordResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub user: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Record> for RecordResponse {
    fn from(record: Record) -> Self {
        Self {
            id: record.id,
            title: record.title,
            description: record.description,
            user: record.user_id,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// `{"message": ...}` acknowledgement
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}
