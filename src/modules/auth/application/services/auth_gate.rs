// src/modules/auth/application/services/auth_gate.rs

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::auth::application::domain::{
    AuthError, AuthState, Credentials, Session, SignUpOutcome,
};
use crate::auth::application::ports::outgoing::AuthProvider;

/// Sign-in, sign-up, sign-out and session lookup for the admin area.
#[derive(Clone)]
pub struct AuthService {
    provider: Arc<dyn AuthProvider>,
}

impl fmt::Debug for AuthService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthService")
            .field("provider", &"<dyn AuthProvider>")
            .finish()
    }
}

impl AuthService {
    pub fn new(provider: Arc<dyn AuthProvider>) -> Self {
        Self { provider }
    }

    pub async fn sign_in(&self, email: String, password: String) -> Result<Session, AuthError> {
        let credentials = Credentials::new(email, password)?;

        match self.provider.sign_in(&credentials).await {
            Ok(session) => {
                info!(user_id = %session.user.id, "Admin signed in");
                Ok(session)
            }
            Err(e) => {
                warn!(email = %credentials.email(), error = %e, "Sign-in failed");
                Err(e)
            }
        }
    }

    pub async fn sign_up(
        &self,
        email: String,
        password: String,
    ) -> Result<SignUpOutcome, AuthError> {
        let credentials = Credentials::new(email, password)?;
        let outcome = self.provider.sign_up(&credentials).await?;

        info!(
            user_id = %outcome.user().id,
            pending = matches!(outcome, SignUpOutcome::PendingConfirmation(_)),
            "Account signed up"
        );
        Ok(outcome)
    }

    pub async fn sign_out(&self, access_token: &str) -> Result<(), AuthError> {
        self.provider.sign_out(access_token).await
    }

    /// Any failure to resolve the token means anonymous.
    pub async fn session(&self, access_token: Option<&str>) -> AuthState {
        let Some(token) = access_token else {
            return AuthState::Anonymous;
        };

        match self.provider.current_user(token).await {
            Ok(user) => AuthState::Authenticated { user },
            Err(e) => {
                debug!(error = %e, "Session lookup failed, treating as anonymous");
                AuthState::Anonymous
            }
        }
    }
}
