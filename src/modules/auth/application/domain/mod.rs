pub mod entities;

pub use entities::{AuthError, AuthState, AuthUser, Credentials, Session, SignUpOutcome};
