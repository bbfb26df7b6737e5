use async_trait::async_trait;

use crate::auth::application::domain::{AuthError, AuthUser, Credentials, Session, SignUpOutcome};

/// Port over the hosted auth service.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn sign_in(&self, credentials: &Credentials) -> Result<Session, AuthError>;

    async fn sign_up(&self, credentials: &Credentials) -> Result<SignUpOutcome, AuthError>;

    /// Revokes the session behind `access_token`.
    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError>;

    /// Current-session lookup.
    async fn current_user(&self, access_token: &str) -> Result<AuthUser, AuthError>;
}
