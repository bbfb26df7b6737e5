mod admin_catalog;

pub use admin_catalog::{AdminCatalog, CatalogError};
