use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use actix_web::web;
use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::{AuthError, AuthUser, Credentials, Session, SignUpOutcome};
use crate::auth::application::ports::outgoing::{
    AccessClaims, AuthProvider, TokenError, TokenVerifier,
};
use crate::modules::contact::application::ports::outgoing::{
    EmailSender, SendError, TemplateParams,
};

pub const STUB_ACCESS_TOKEN: &str = "access-token";

/// Header value accepted by [`StubTokenVerifier::accepting`].
pub fn admin_bearer() -> String {
    "Bearer test-admin-token".to_string()
}

/* --------------------------------------------------
 * Auth provider
 * -------------------------------------------------- */

/// Hosted auth stand-in: either every call succeeds for one account, or
/// every call fails with the same error.
pub struct StubAuthProvider {
    outcome: Result<AuthUser, AuthError>,
    calls: AtomicUsize,
}

impl StubAuthProvider {
    pub fn signed_in(user: AuthUser) -> Self {
        Self {
            outcome: Ok(user),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(error: AuthError) -> Self {
        Self {
            outcome: Err(error),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn user(&self) -> Result<AuthUser, AuthError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}

#[async_trait]
impl AuthProvider for StubAuthProvider {
    async fn sign_in(&self, _credentials: &Credentials) -> Result<Session, AuthError> {
        let user = self.user()?;
        Ok(Session {
            access_token: STUB_ACCESS_TOKEN.to_string(),
            refresh_token: "refresh-token".to_string(),
            expires_in: 3600,
            user,
        })
    }

    async fn sign_up(&self, _credentials: &Credentials) -> Result<SignUpOutcome, AuthError> {
        let user = self.user()?;
        Ok(if user.email_confirmed {
            SignUpOutcome::Active(user)
        } else {
            SignUpOutcome::PendingConfirmation(user)
        })
    }

    async fn sign_out(&self, _access_token: &str) -> Result<(), AuthError> {
        self.user().map(|_| ())
    }

    async fn current_user(&self, _access_token: &str) -> Result<AuthUser, AuthError> {
        self.user()
    }
}

/* --------------------------------------------------
 * Token verifier
 * -------------------------------------------------- */

pub struct StubTokenVerifier {
    outcome: Result<Uuid, TokenError>,
}

impl StubTokenVerifier {
    pub fn accepting(user_id: Uuid) -> Self {
        Self {
            outcome: Ok(user_id),
        }
    }

    pub fn rejecting(error: TokenError) -> Self {
        Self {
            outcome: Err(error),
        }
    }
}

impl TokenVerifier for StubTokenVerifier {
    fn verify(&self, _token: &str) -> Result<AccessClaims, TokenError> {
        let sub = self.outcome.clone()?;
        Ok(AccessClaims {
            sub,
            exp: i64::MAX,
            aud: Some("authenticated".to_string()),
            email: Some("admin@site.dev".to_string()),
            role: Some("authenticated".to_string()),
        })
    }
}

/// The verifier as the admin guard looks it up in app data.
pub fn token_verifier_data(verifier: StubTokenVerifier) -> web::Data<Arc<dyn TokenVerifier>> {
    let verifier: Arc<dyn TokenVerifier> = Arc::new(verifier);
    web::Data::new(verifier)
}

/* --------------------------------------------------
 * Email sender
 * -------------------------------------------------- */

/// Keeps every message it was asked to send.
pub struct RecordingEmailSender {
    sent: Mutex<Vec<TemplateParams>>,
    failure: Option<SendError>,
}

impl Default for RecordingEmailSender {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingEmailSender {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failure: None,
        }
    }

    pub fn failing(error: SendError) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failure: Some(error),
        }
    }

    /// Successful deliveries only.
    pub fn sent(&self) -> Vec<TemplateParams> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailSender for RecordingEmailSender {
    async fn send(&self, params: &TemplateParams) -> Result<(), SendError> {
        if let Some(e) = &self.failure {
            return Err(e.clone());
        }
        self.sent.lock().unwrap().push(params.clone());
        Ok(())
    }
}
