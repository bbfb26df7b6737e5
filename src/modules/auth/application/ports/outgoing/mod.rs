pub mod auth_provider;
pub mod token_verifier;

pub use auth_provider::AuthProvider;
pub use token_verifier::{AccessClaims, TokenError, TokenVerifier};
