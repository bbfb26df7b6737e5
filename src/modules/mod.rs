pub mod about;
pub mod auth;
pub mod contact;
pub mod content;
pub mod dashboard;
pub mod education;
pub mod experience;
pub mod media;
pub mod portfolio;
pub mod preferences;
pub mod project;
