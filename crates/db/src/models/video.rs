//! The video entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `videos` table.
///
/// Field names match the wire format exposed by the HTTP API (`titulo`,
/// `duracao`, `data_upload`), which in turn match the table columns.
/// `data_upload` serializes as an ISO-8601 timestamp.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Video {
    /// Externally supplied identifier, unique at the store level.
    pub id: String,
    pub titulo: String,
    /// Duration in seconds.
    pub duracao: f64,
    /// Server-assigned at creation.
    pub data_upload: DateTime<Utc>,
}
