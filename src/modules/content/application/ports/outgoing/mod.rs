pub mod record_store;

pub use record_store::{RecordStore, StoreError};
