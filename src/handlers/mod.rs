//! HTTP handlers for resource CRUD and the API documentation page.

pub mod docs;
pub mod resource;
pub use docs::api_home;
