mod get_about;
mod save_about;

pub use get_about::*;
pub use save_about::*;
