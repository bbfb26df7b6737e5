use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Account as reported by the hosted auth service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AuthUser {
    pub id: Uuid,
    pub email: Option<String>,
    pub email_confirmed: bool,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    /// Seconds until `access_token` expires
    pub expires_in: i64,
    pub user: AuthUser,
}

/// Both variants are successful sign-ups; only the message shown differs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignUpOutcome {
    /// A confirmation email was sent; sign-in fails until it is confirmed.
    PendingConfirmation(AuthUser),
    /// The account can sign in right away.
    Active(AuthUser),
}

impl SignUpOutcome {
    pub fn user(&self) -> &AuthUser {
        match self {
            SignUpOutcome::PendingConfirmation(u) | SignUpOutcome::Active(u) => u,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            SignUpOutcome::PendingConfirmation(_) => {
                "Sign-up successful. A confirmation email has been sent, check your inbox (and spam folder)."
            }
            SignUpOutcome::Active(_) => "Sign-up successful. You can now sign in.",
        }
    }
}

/// Binary: any authenticated account is a full admin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AuthState {
    Anonymous,
    Authenticated { user: AuthUser },
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated { .. })
    }
}

/// Email and password after basic shape checks.
#[derive(Debug, Clone)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    pub fn new(email: String, password: String) -> Result<Self, AuthError> {
        let email = email.trim().to_string();
        if email.is_empty() {
            return Err(AuthError::InvalidInput("Email cannot be empty".to_string()));
        }
        if password.is_empty() {
            return Err(AuthError::InvalidInput(
                "Password cannot be empty".to_string(),
            ));
        }
        Ok(Self { email, password })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Email not confirmed. Check your inbox for the confirmation link, or disable email confirmation in the auth settings.")]
    EmailNotConfirmed,

    /// The auth service refused the request (weak password, existing account, ...)
    #[error("{0}")]
    Rejected(String),

    #[error("Auth service unavailable: {0}")]
    Unavailable(String),
}
