pub mod jwt_config;
pub mod jwt_verifier;

pub use jwt_config::JwtConfig;
pub use jwt_verifier::JwtTokenVerifier;
