pub mod core;
pub mod domain;
pub mod utils;

pub use crate::core::format::format;
pub use crate::core::json::{marshal_json, rfc3339, unmarshal_json};
pub use crate::core::layout::{parse, LAYOUT};
pub use domain::model::Time;
pub use utils::error::{Iso8601Error, Result};
