use chrono::{DateTime, Utc};

/// A stored note. Timestamps are kept by the store but not exposed over HTTP.
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
