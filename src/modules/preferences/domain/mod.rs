pub mod preferences;

pub use preferences::{Language, Preferences, Theme, UnknownPreference};
