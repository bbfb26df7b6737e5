use std::marker::PhantomData;

use async_trait::async_trait;
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use tracing::debug;
use uuid::Uuid;

use crate::modules::content::application::domain::{Record, Stamped};
use crate::modules::content::application::ports::outgoing::{RecordStore, StoreError};
use crate::shared::supabase::{KeyScope, RemoteFailure, SupabaseClient};

/// Gateway code for "the query returned no row" on single-row reads.
const NO_ROWS_CODE: &str = "PGRST116";

/// [`RecordStore`] over the hosted REST gateway. One instance per table.
pub struct SupabaseRecordStore<R> {
    client: SupabaseClient,
    scope: KeyScope,
    _record: PhantomData<fn() -> R>,
}

impl<R> Clone for SupabaseRecordStore<R> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            scope: self.scope,
            _record: PhantomData,
        }
    }
}

impl<R: Record> SupabaseRecordStore<R> {
    /// Anonymous-key store for the public pages.
    pub fn reader(client: SupabaseClient) -> Self {
        Self::with_scope(client, KeyScope::Anon)
    }

    /// Service-key store for admin operations.
    pub fn writer(client: SupabaseClient) -> Self {
        Self::with_scope(client, KeyScope::Service)
    }

    fn with_scope(client: SupabaseClient, scope: KeyScope) -> Self {
        Self {
            client,
            scope,
            _record: PhantomData,
        }
    }

    fn table_url(&self) -> String {
        self.client.rest_url(R::TABLE)
    }
}

fn list_query<R: Record>() -> [(&'static str, String); 2] {
    [
        ("select", "*".to_string()),
        ("order", format!("{}.desc", R::ORDER_BY)),
    ]
}

fn id_filter(id: Uuid) -> [(&'static str, String); 1] {
    [("id", format!("eq.{}", id))]
}

fn classify(failure: RemoteFailure) -> StoreError {
    if failure.code.as_deref() == Some(NO_ROWS_CODE) {
        StoreError::NotFound
    } else if failure.is_server_side() {
        StoreError::Unavailable(failure.to_string())
    } else {
        StoreError::Rejected(failure.to_string())
    }
}

async fn send<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, StoreError> {
    let response = builder
        .send()
        .await
        .map_err(|e| StoreError::Unavailable(e.to_string()))?;

    if !response.status().is_success() {
        return Err(classify(SupabaseClient::failure(response).await));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| StoreError::Decode(e.to_string()))
}

#[async_trait]
impl<R: Record> RecordStore<R> for SupabaseRecordStore<R> {
    async fn select_all(&self) -> Result<Vec<R>, StoreError> {
        let req = self
            .client
            .get(&self.table_url(), self.scope)
            .query(&list_query::<R>());

        let rows: Vec<R> = send(req).await?;
        debug!(table = R::TABLE, rows = rows.len(), "Fetched rows");
        Ok(rows)
    }

    async fn select_by_id(&self, id: Uuid) -> Result<R, StoreError> {
        let req = self
            .client
            .get(&self.table_url(), self.scope)
            .query(&[("select", "*")])
            .query(&id_filter(id));

        let rows: Vec<R> = send(req).await?;
        rows.into_iter().next().ok_or(StoreError::NotFound)
    }

    async fn insert(&self, row: Stamped<R::Fields>) -> Result<R, StoreError> {
        let req = self
            .client
            .post(&self.table_url(), self.scope)
            .header("Prefer", "return=representation")
            .json(&[row]);

        let rows: Vec<R> = send(req).await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| StoreError::Decode("insert returned no row".to_string()))
    }

    async fn update(&self, id: Uuid, row: Stamped<R::Fields>) -> Result<R, StoreError> {
        let req = self
            .client
            .patch(&self.table_url(), self.scope)
            .query(&id_filter(id))
            .header("Prefer", "return=representation")
            .json(&row);

        let rows: Vec<R> = send(req).await?;
        rows.into_iter().next().ok_or(StoreError::NotFound)
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let req = self
            .client
            .delete(&self.table_url(), self.scope)
            .query(&id_filter(id))
            .header("Prefer", "return=representation");

        let rows: Vec<serde_json::Value> = send(req).await?;
        if rows.is_empty() {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}
