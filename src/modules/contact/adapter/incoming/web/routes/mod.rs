mod send_contact;

pub use send_contact::*;
