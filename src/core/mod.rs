pub mod format;
pub mod json;
pub mod layout;
