use std::fmt;

use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};

use crate::auth::application::ports::outgoing::{AccessClaims, TokenError, TokenVerifier};

use super::jwt_config::JwtConfig;

/// Verifies access tokens issued by the hosted auth service without a
/// round trip, using the shared HS256 secret.
#[derive(Clone)]
pub struct JwtTokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtTokenVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenVerifier")
            .field("audience", &self.validation.aud)
            .finish()
    }
}

impl JwtTokenVerifier {
    pub fn new(config: &JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = config.leeway_secs;
        validation.set_audience(&[config.audience.as_str()]);
        validation.set_required_spec_claims(&["exp", "sub", "aud"]);

        Self {
            decoding_key: DecodingKey::from_secret(config.secret_key.as_bytes()),
            validation,
        }
    }
}

impl TokenVerifier for JwtTokenVerifier {
    fn verify(&self, token: &str) -> Result<AccessClaims, TokenError> {
        let decoded = decode::<AccessClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    tracing::debug!("Token verification failed: Token expired");
                    TokenError::TokenExpired
                }
                ErrorKind::InvalidSignature => {
                    tracing::error!("Security alert: Invalid token signature detected");
                    TokenError::InvalidSignature
                }
                ErrorKind::InvalidAudience => {
                    tracing::warn!("Token verification failed: Wrong audience");
                    TokenError::WrongAudience
                }
                ErrorKind::InvalidToken | ErrorKind::InvalidAlgorithm => {
                    tracing::error!("Security alert: Malformed or invalid algorithm token");
                    TokenError::MalformedToken
                }
                _ => {
                    tracing::warn!("Token verification failed: {}", e);
                    TokenError::MalformedToken
                }
            })?;

        Ok(decoded.claims)
    }
}
