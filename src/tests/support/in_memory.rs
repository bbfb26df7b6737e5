// In-memory stand-ins for the hosted backend, used by service and handler tests.

use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::modules::content::application::domain::{Record, Stamped};
use crate::modules::content::application::ports::outgoing::{RecordStore, StoreError};
use crate::modules::media::application::ports::outgoing::{ObjectStorage, StorageError};

/// Shared, ordered log of side effects across fakes.
pub type Journal = Arc<Mutex<Vec<String>>>;

pub fn journal() -> Journal {
    Arc::new(Mutex::new(Vec::new()))
}

/* --------------------------------------------------
 * Record store
 * -------------------------------------------------- */

struct StoredRow {
    seq: u64,
    value: Map<String, Value>,
}

/// Behaves like the REST gateway: assigns `id` and `created_at`, keeps
/// whatever the client sent, orders newest first by `R::ORDER_BY`.
pub struct InMemoryRecordStore<R> {
    rows: Mutex<Vec<StoredRow>>,
    seq: AtomicU64,
    journal: Option<Journal>,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> Default for InMemoryRecordStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> InMemoryRecordStore<R> {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            seq: AtomicU64::new(0),
            journal: None,
            _record: PhantomData,
        }
    }

    pub fn with_journal(journal: Journal) -> Self {
        Self {
            journal: Some(journal),
            ..Self::new()
        }
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn decode(value: &Map<String, Value>) -> Result<R, StoreError> {
        serde_json::from_value(Value::Object(value.clone()))
            .map_err(|e| StoreError::Decode(e.to_string()))
    }

    fn encode(row: &Stamped<R::Fields>) -> Result<Map<String, Value>, StoreError> {
        match serde_json::to_value(row) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(other) => Err(StoreError::Rejected(format!("not an object: {}", other))),
            Err(e) => Err(StoreError::Rejected(e.to_string())),
        }
    }

    fn order_key(row: &StoredRow) -> (Option<DateTime<Utc>>, u64) {
        let ts = row
            .value
            .get(R::ORDER_BY)
            .and_then(|v| serde_json::from_value::<DateTime<Utc>>(v.clone()).ok());
        (ts, row.seq)
    }

    fn record(&self, entry: String) {
        if let Some(journal) = &self.journal {
            journal.lock().unwrap().push(entry);
        }
    }
}

fn row_id(row: &StoredRow) -> Option<Uuid> {
    row.value
        .get("id")
        .and_then(|v| v.as_str())
        .and_then(|s| Uuid::parse_str(s).ok())
}

#[async_trait]
impl<R: Record> RecordStore<R> for InMemoryRecordStore<R> {
    async fn select_all(&self) -> Result<Vec<R>, StoreError> {
        let rows = self.rows.lock().unwrap();
        let mut ordered: Vec<&StoredRow> = rows.iter().collect();
        ordered.sort_by(|a, b| Self::order_key(b).cmp(&Self::order_key(a)));
        ordered.into_iter().map(|r| Self::decode(&r.value)).collect()
    }

    async fn select_by_id(&self, id: Uuid) -> Result<R, StoreError> {
        let rows = self.rows.lock().unwrap();
        rows.iter()
            .find(|r| row_id(r) == Some(id))
            .map(|r| Self::decode(&r.value))
            .unwrap_or(Err(StoreError::NotFound))
    }

    async fn insert(&self, row: Stamped<R::Fields>) -> Result<R, StoreError> {
        let mut value = Self::encode(&row)?;
        let id = Uuid::new_v4();
        value.insert("id".to_string(), Value::String(id.to_string()));
        value.insert("created_at".to_string(), serde_json::to_value(Utc::now()).unwrap());

        let record = Self::decode(&value)?;
        let seq = self.seq.fetch_add(1, Ordering::SeqCst);
        self.rows.lock().unwrap().push(StoredRow { seq, value });
        self.record(format!("insert:{}", id));
        Ok(record)
    }

    async fn update(&self, id: Uuid, row: Stamped<R::Fields>) -> Result<R, StoreError> {
        let patch = Self::encode(&row)?;
        let mut rows = self.rows.lock().unwrap();
        let stored = rows
            .iter_mut()
            .find(|r| row_id(r) == Some(id))
            .ok_or(StoreError::NotFound)?;

        for (k, v) in patch {
            stored.value.insert(k, v);
        }
        let record = Self::decode(&stored.value)?;
        drop(rows);
        self.record(format!("update:{}", id));
        Ok(record)
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| row_id(r) != Some(id));
        if rows.len() == before {
            return Err(StoreError::NotFound);
        }
        drop(rows);
        self.record(format!("delete:{}", id));
        Ok(())
    }
}

/// Every call fails with the same error.
pub struct FailingRecordStore<R> {
    error: StoreError,
    _record: PhantomData<fn() -> R>,
}

impl<R> FailingRecordStore<R> {
    pub fn new(error: StoreError) -> Self {
        Self {
            error,
            _record: PhantomData,
        }
    }
}

#[async_trait]
impl<R: Record> RecordStore<R> for FailingRecordStore<R> {
    async fn select_all(&self) -> Result<Vec<R>, StoreError> {
        Err(self.error.clone())
    }

    async fn select_by_id(&self, _id: Uuid) -> Result<R, StoreError> {
        Err(self.error.clone())
    }

    async fn insert(&self, _row: Stamped<R::Fields>) -> Result<R, StoreError> {
        Err(self.error.clone())
    }

    async fn update(&self, _id: Uuid, _row: Stamped<R::Fields>) -> Result<R, StoreError> {
        Err(self.error.clone())
    }

    async fn delete(&self, _id: Uuid) -> Result<(), StoreError> {
        Err(self.error.clone())
    }
}

/* --------------------------------------------------
 * Object storage
 * -------------------------------------------------- */

pub struct InMemoryObjectStorage {
    objects: Mutex<Vec<(String, String, usize)>>,
    fail_removals: bool,
    fail_uploads: bool,
    journal: Option<Journal>,
}

impl Default for InMemoryObjectStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryObjectStorage {
    pub const BASE: &'static str = "https://cdn.test/storage/v1/object/public/project-images";

    pub fn new() -> Self {
        Self {
            objects: Mutex::new(Vec::new()),
            fail_removals: false,
            fail_uploads: false,
            journal: None,
        }
    }

    pub fn with_journal(journal: Journal) -> Self {
        Self {
            journal: Some(journal),
            ..Self::new()
        }
    }

    pub fn failing_removals(mut self) -> Self {
        self.fail_removals = true;
        self
    }

    pub fn failing_uploads(mut self) -> Self {
        self.fail_uploads = true;
        self
    }

    /// Seeds an object as if it had been uploaded earlier.
    pub fn seed(&self, key: &str) {
        self.objects
            .lock()
            .unwrap()
            .push((key.to_string(), "image/png".to_string(), 1));
    }

    pub fn keys(&self) -> Vec<String> {
        self.objects
            .lock()
            .unwrap()
            .iter()
            .map(|(k, _, _)| k.clone())
            .collect()
    }

    fn record(&self, entry: String) {
        if let Some(journal) = &self.journal {
            journal.lock().unwrap().push(entry);
        }
    }
}

#[async_trait]
impl ObjectStorage for InMemoryObjectStorage {
    async fn upload(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError> {
        if self.fail_uploads {
            return Err(StorageError::Unavailable("upload refused".to_string()));
        }
        let mut objects = self.objects.lock().unwrap();
        if objects.iter().any(|(k, _, _)| k == key) {
            return Err(StorageError::AlreadyExists(key.to_string()));
        }
        objects.push((key.to_string(), content_type.to_string(), bytes.len()));
        drop(objects);
        self.record(format!("upload:{}", key));
        Ok(())
    }

    async fn remove(&self, keys: &[String]) -> Result<(), StorageError> {
        self.record(format!("remove:{}", keys.join(",")));
        if self.fail_removals {
            return Err(StorageError::Unavailable("remove refused".to_string()));
        }
        self.objects
            .lock()
            .unwrap()
            .retain(|(k, _, _)| !keys.contains(k));
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{}", Self::BASE, key)
    }
}
