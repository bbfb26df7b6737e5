use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::auth::application::domain::{AuthError, AuthUser, Credentials, Session, SignUpOutcome};
use crate::auth::application::ports::outgoing::AuthProvider;
use crate::shared::supabase::{KeyScope, RemoteFailure, SupabaseClient};

#[derive(Serialize)]
struct PasswordGrant<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct UserBody {
    id: Uuid,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    email_confirmed_at: Option<DateTime<Utc>>,
}

impl From<UserBody> for AuthUser {
    fn from(body: UserBody) -> Self {
        AuthUser {
            id: body.id,
            email: body.email,
            email_confirmed: body.email_confirmed_at.is_some(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SessionBody {
    access_token: String,
    refresh_token: String,
    expires_in: i64,
    user: UserBody,
}

/// Sign-up answers with a session when confirmation is off, and with the
/// bare user object when a confirmation email was sent.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SignUpBody {
    WithSession { user: UserBody },
    UserOnly(UserBody),
}

/// [`AuthProvider`] over the hosted auth service (password grant).
#[derive(Clone)]
pub struct SupabaseAuthProvider {
    client: SupabaseClient,
}

impl SupabaseAuthProvider {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }
}

fn classify(failure: RemoteFailure) -> AuthError {
    if failure.mentions("email_not_confirmed") || failure.mentions("email not confirmed") {
        AuthError::EmailNotConfirmed
    } else if failure.mentions("invalid_credentials")
        || failure.mentions("invalid_grant")
        || failure.mentions("invalid login credentials")
    {
        AuthError::InvalidCredentials
    } else if failure.is_server_side() {
        AuthError::Unavailable(failure.to_string())
    } else {
        AuthError::Rejected(failure.message)
    }
}

fn transport(e: reqwest::Error) -> AuthError {
    AuthError::Unavailable(e.to_string())
}

async fn read_json<T: for<'de> Deserialize<'de>>(
    response: reqwest::Response,
) -> Result<T, AuthError> {
    if !response.status().is_success() {
        return Err(classify(SupabaseClient::failure(response).await));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| AuthError::Unavailable(format!("unexpected auth response: {}", e)))
}

#[async_trait]
impl AuthProvider for SupabaseAuthProvider {
    async fn sign_in(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        let response = self
            .client
            .post(&self.client.auth_url("token"), KeyScope::Anon)
            .query(&[("grant_type", "password")])
            .json(&PasswordGrant {
                email: credentials.email(),
                password: credentials.password(),
            })
            .send()
            .await
            .map_err(transport)?;

        let body: SessionBody = read_json(response).await?;
        Ok(Session {
            access_token: body.access_token,
            refresh_token: body.refresh_token,
            expires_in: body.expires_in,
            user: body.user.into(),
        })
    }

    async fn sign_up(&self, credentials: &Credentials) -> Result<SignUpOutcome, AuthError> {
        let response = self
            .client
            .post(&self.client.auth_url("signup"), KeyScope::Anon)
            .json(&PasswordGrant {
                email: credentials.email(),
                password: credentials.password(),
            })
            .send()
            .await
            .map_err(transport)?;

        let user: AuthUser = match read_json::<SignUpBody>(response).await? {
            SignUpBody::WithSession { user } | SignUpBody::UserOnly(user) => user.into(),
        };

        Ok(if user.email_confirmed {
            SignUpOutcome::Active(user)
        } else {
            SignUpOutcome::PendingConfirmation(user)
        })
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError> {
        let builder = self.client.raw().post(self.client.auth_url("logout"));
        let response = self
            .client
            .as_user(builder, access_token)
            .send()
            .await
            .map_err(transport)?;

        // An already revoked or expired token leaves the caller signed out anyway.
        match response.status() {
            s if s.is_success() => Ok(()),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                debug!("Sign-out with a stale token");
                Ok(())
            }
            _ => Err(classify(SupabaseClient::failure(response).await)),
        }
    }

    async fn current_user(&self, access_token: &str) -> Result<AuthUser, AuthError> {
        let builder = self.client.raw().get(self.client.auth_url("user"));
        let response = self
            .client
            .as_user(builder, access_token)
            .send()
            .await
            .map_err(transport)?;

        if matches!(
            response.status(),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN
        ) {
            return Err(AuthError::InvalidCredentials);
        }

        let user: UserBody = read_json(response).await?;
        Ok(user.into())
    }
}
