use crate::shared::config::{or_default, required, ConfigError};

/// Audience the hosted auth service puts in user access tokens.
pub const DEFAULT_AUDIENCE: &str = "authenticated";

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub audience: String,
    pub leeway_secs: u64,
}

impl JwtConfig {
    /// Reads the project's JWT secret, used to verify access tokens locally.
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret_key = required("SUPABASE_JWT_SECRET")?;

        // HS256 needs at least 32 bytes of key material
        if secret_key.len() < 32 {
            return Err(ConfigError::Invalid {
                key: "SUPABASE_JWT_SECRET",
                reason: "must be at least 32 characters long for HS256".to_string(),
            });
        }

        let audience = or_default("SUPABASE_JWT_AUDIENCE", DEFAULT_AUDIENCE);
        let leeway_secs = or_default("SUPABASE_JWT_LEEWAY_SECS", "30")
            .parse::<u64>()
            .map_err(|e| ConfigError::Invalid {
                key: "SUPABASE_JWT_LEEWAY_SECS",
                reason: e.to_string(),
            })?;

        Ok(Self {
            secret_key,
            audience,
            leeway_secs,
        })
    }
}
