// src/modules/content/application/domain/record.rs

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use uuid::Uuid;

/// A row of one of the content tables.
///
/// `Fields` is the client-writable part of the row; `id` and `created_at`
/// are always assigned by the backend.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Remote table name
    const TABLE: &'static str;

    /// Column used for newest-first listing
    const ORDER_BY: &'static str = "created_at";

    type Fields: Serialize + DeserializeOwned + Clone + Send + Sync + 'static;

    fn id(&self) -> Uuid;
}

/// Write payload: the fields plus the client-side `updated_at` stamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stamped<F> {
    #[serde(flatten)]
    pub fields: F,
    pub updated_at: DateTime<Utc>,
}

impl<F> Stamped<F> {
    pub fn now(fields: F) -> Self {
        Self {
            fields,
            updated_at: Utc::now(),
        }
    }
}
