mod get_preferences;
mod toggle_preference;
mod update_preferences;

pub use get_preferences::*;
pub use toggle_preference::*;
pub use update_preferences::*;
