pub mod normalize;
pub mod record;

pub use record::{Record, Stamped};
