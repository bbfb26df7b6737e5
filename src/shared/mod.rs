pub mod api;
pub mod config;
pub mod supabase;
pub mod validation;
