//! Thin HTTP plumbing shared by the adapters that talk to the hosted
//! backend: table gateway, auth service and object storage.

mod client;
mod config;
mod error;

pub use client::{KeyScope, SupabaseClient};
pub use config::SupabaseConfig;
pub use error::RemoteFailure;
