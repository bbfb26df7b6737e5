use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::{header, RequestBuilder, Response};

use super::{RemoteFailure, SupabaseConfig};

/// Which key a request is signed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyScope {
    /// Public reads and auth endpoints
    Anon,
    /// Admin writes, only used behind the route guard
    Service,
}

/// Shared HTTP client for the hosted backend.
///
/// Cheap to clone; adapters each keep their own copy.
#[derive(Clone)]
pub struct SupabaseClient {
    http: reqwest::Client,
    config: Arc<SupabaseConfig>,
}

impl fmt::Debug for SupabaseClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SupabaseClient")
            .field("url", &self.config.url)
            .finish()
    }
}

impl SupabaseClient {
    pub fn new(config: SupabaseConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            config: Arc::new(config),
        })
    }

    pub fn config(&self) -> &SupabaseConfig {
        &self.config
    }

    pub fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.config.url, table)
    }

    pub fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.config.url, path.trim_start_matches('/'))
    }

    pub fn storage_object_url(&self, bucket: &str, key: &str) -> String {
        format!("{}/storage/v1/object/{}/{}", self.config.url, bucket, key)
    }

    pub fn storage_bucket_url(&self, bucket: &str) -> String {
        format!("{}/storage/v1/object/{}", self.config.url, bucket)
    }

    pub fn public_object_url(&self, bucket: &str, key: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.config.url, bucket, key
        )
    }

    fn key(&self, scope: KeyScope) -> &str {
        match scope {
            KeyScope::Anon => &self.config.anon_key,
            KeyScope::Service => &self.config.service_key,
        }
    }

    /// Adds the api key plus a bearer token. `bearer` overrides the key
    /// for calls made on behalf of a signed-in user.
    pub fn authorize(
        &self,
        builder: RequestBuilder,
        scope: KeyScope,
        bearer: Option<&str>,
    ) -> RequestBuilder {
        let key = self.key(scope);
        builder
            .header("apikey", key)
            .header(header::AUTHORIZATION, format!("Bearer {}", bearer.unwrap_or(key)))
    }

    pub fn get(&self, url: &str, scope: KeyScope) -> RequestBuilder {
        self.authorize(self.http.get(url), scope, None)
    }

    pub fn post(&self, url: &str, scope: KeyScope) -> RequestBuilder {
        self.authorize(self.http.post(url), scope, None)
    }

    pub fn patch(&self, url: &str, scope: KeyScope) -> RequestBuilder {
        self.authorize(self.http.patch(url), scope, None)
    }

    pub fn delete(&self, url: &str, scope: KeyScope) -> RequestBuilder {
        self.authorize(self.http.delete(url), scope, None)
    }

    pub fn as_user(&self, builder: RequestBuilder, access_token: &str) -> RequestBuilder {
        self.authorize(builder, KeyScope::Anon, Some(access_token))
    }

    pub fn raw(&self) -> &reqwest::Client {
        &self.http
    }

    /// Reads the body of a non-success response into a [`RemoteFailure`].
    pub async fn failure(response: Response) -> RemoteFailure {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        RemoteFailure::from_body(status, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> SupabaseClient {
        SupabaseClient::new(SupabaseConfig {
            url: "https://demo.supabase.co".to_string(),
            anon_key: "anon".to_string(),
            service_key: "service".to_string(),
            image_bucket: "project-images".to_string(),
            request_timeout_secs: 5,
        })
        .unwrap()
    }

    #[test]
    fn builds_service_urls() {
        let c = client();
        assert_eq!(c.rest_url("projects"), "https://demo.supabase.co/rest/v1/projects");
        assert_eq!(c.auth_url("/signup"), "https://demo.supabase.co/auth/v1/signup");
        assert_eq!(
            c.storage_object_url("project-images", "a.png"),
            "https://demo.supabase.co/storage/v1/object/project-images/a.png"
        );
        assert_eq!(
            c.public_object_url("project-images", "a.png"),
            "https://demo.supabase.co/storage/v1/object/public/project-images/a.png"
        );
    }

    #[test]
    fn authorize_uses_scope_key() {
        let c = client();
        let req = c
            .post(&c.rest_url("projects"), KeyScope::Service)
            .build()
            .unwrap();

        assert_eq!(req.headers()["apikey"], "service");
        assert_eq!(req.headers()[header::AUTHORIZATION], "Bearer service");
    }

    #[test]
    fn as_user_forwards_access_token() {
        let c = client();
        let req = c
            .as_user(c.raw().get(c.auth_url("user")), "user-jwt")
            .build()
            .unwrap();

        assert_eq!(req.headers()["apikey"], "anon");
        assert_eq!(req.headers()[header::AUTHORIZATION], "Bearer user-jwt");
    }
}
