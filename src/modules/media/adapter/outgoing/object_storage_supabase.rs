use async_trait::async_trait;
use reqwest::header;
use serde::Serialize;

use crate::modules::media::application::ports::outgoing::{ObjectStorage, StorageError};
use crate::shared::supabase::{KeyScope, RemoteFailure, SupabaseClient};

/// Browser cache lifetime for uploaded images, in seconds.
const CACHE_CONTROL_SECS: u32 = 3600;

#[derive(Serialize)]
struct RemoveBody<'a> {
    prefixes: &'a [String],
}

/// [`ObjectStorage`] over the hosted storage API, scoped to one bucket.
#[derive(Clone)]
pub struct SupabaseObjectStorage {
    client: SupabaseClient,
    bucket: String,
}

impl SupabaseObjectStorage {
    pub fn new(client: SupabaseClient) -> Self {
        let bucket = client.config().image_bucket.clone();
        Self { client, bucket }
    }
}

fn classify(failure: RemoteFailure) -> StorageError {
    // The storage API reports duplicates as 400/409 with "Duplicate" / "already exists".
    if failure.status == 409 || failure.mentions("duplicate") || failure.mentions("already exists")
    {
        StorageError::AlreadyExists(failure.message)
    } else if failure.is_server_side() {
        StorageError::Unavailable(failure.to_string())
    } else {
        StorageError::Rejected(failure.to_string())
    }
}

#[async_trait]
impl ObjectStorage for SupabaseObjectStorage {
    async fn upload(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError> {
        let response = self
            .client
            .post(
                &self.client.storage_object_url(&self.bucket, key),
                KeyScope::Service,
            )
            .header(header::CONTENT_TYPE, content_type)
            .header(header::CACHE_CONTROL, format!("max-age={}", CACHE_CONTROL_SECS))
            .header("x-upsert", "false")
            .body(bytes)
            .send()
            .await
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(classify(SupabaseClient::failure(response).await));
        }
        Ok(())
    }

    async fn remove(&self, keys: &[String]) -> Result<(), StorageError> {
        let response = self
            .client
            .delete(
                &self.client.storage_bucket_url(&self.bucket),
                KeyScope::Service,
            )
            .json(&RemoveBody { prefixes: keys })
            .send()
            .await
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(classify(SupabaseClient::failure(response).await));
        }
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        self.client.public_object_url(&self.bucket, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::supabase::SupabaseConfig;
    use reqwest::StatusCode;

    #[test]
    fn public_url_points_at_configured_bucket() {
        let client = SupabaseClient::new(SupabaseConfig {
            url: "https://demo.supabase.co".to_string(),
            anon_key: "anon".to_string(),
            service_key: "service".to_string(),
            image_bucket: "project-images".to_string(),
            request_timeout_secs: 5,
        })
        .unwrap();
        let storage = SupabaseObjectStorage::new(client);

        assert_eq!(
            storage.public_url("temp-1-abcdefg.png"),
            "https://demo.supabase.co/storage/v1/object/public/project-images/temp-1-abcdefg.png"
        );
    }

    #[test]
    fn duplicate_is_already_exists() {
        let f = RemoteFailure::from_body(
            StatusCode::BAD_REQUEST,
            r#"{"statusCode":"409","error":"Duplicate","message":"The resource already exists"}"#,
        );
        assert!(matches!(classify(f), StorageError::AlreadyExists(_)));
    }

    #[test]
    fn server_error_is_unavailable() {
        let f = RemoteFailure::from_body(StatusCode::INTERNAL_SERVER_ERROR, "boom");
        assert!(matches!(classify(f), StorageError::Unavailable(_)));
    }

    #[test]
    fn other_client_errors_are_rejected() {
        let f = RemoteFailure::from_body(
            StatusCode::FORBIDDEN,
            r#"{"error":"Unauthorized","message":"new row violates row-level security policy"}"#,
        );
        assert!(matches!(classify(f), StorageError::Rejected(_)));
    }
}
