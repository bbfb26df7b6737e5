use crate::shared::config::{optional, or_default, required, ConfigError};

pub const DEFAULT_IMAGE_BUCKET: &str = "project-images";

#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    /// Project base URL, e.g. `https://xyz.supabase.co`
    pub url: String,
    /// Public key used for anonymous reads and auth calls
    pub anon_key: String,
    /// Privileged key used for admin writes after the route guard passed.
    /// Falls back to the anon key when row-level security allows it.
    pub service_key: String,
    pub image_bucket: String,
    pub request_timeout_secs: u64,
}

impl SupabaseConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = required("SUPABASE_URL")?;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                key: "SUPABASE_URL",
                reason: "must start with http:// or https://".to_string(),
            });
        }

        let anon_key = required("SUPABASE_ANON_KEY")?;
        let service_key = optional("SUPABASE_SERVICE_ROLE_KEY").unwrap_or_else(|| anon_key.clone());
        let image_bucket = or_default("SUPABASE_IMAGE_BUCKET", DEFAULT_IMAGE_BUCKET);
        let request_timeout_secs = or_default("SUPABASE_TIMEOUT_SECS", "10")
            .parse::<u64>()
            .map_err(|e| ConfigError::Invalid {
                key: "SUPABASE_TIMEOUT_SECS",
                reason: e.to_string(),
            })?;

        Ok(Self {
            url: url.trim_end_matches('/').to_string(),
            anon_key,
            service_key,
            image_bucket,
            request_timeout_secs,
        })
    }
}
