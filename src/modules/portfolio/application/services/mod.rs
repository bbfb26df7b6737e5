mod portfolio_service;

pub use portfolio_service::{PortfolioPage, PortfolioService};
