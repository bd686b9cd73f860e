mod id;
mod json;

pub use id::{ResourceId, INVALID_ID};
pub use json::{parse as parse_json, JsonBody};
