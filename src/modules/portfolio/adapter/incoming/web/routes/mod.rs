mod get_portfolio;
mod get_public_sections;

pub use get_portfolio::*;
pub use get_public_sections::*;
