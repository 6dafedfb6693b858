pub mod error;
#[cfg(feature = "logger")]
pub mod logger;
pub mod validation;
