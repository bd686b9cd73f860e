//! CrudService: generic CRUD over any [`Resource`](crate::models::Resource), plus request validation.

mod crud;
mod validation;
pub use crud::CrudService;
pub use validation::{RequestValidator, LONG_TEXT_MAX, SHORT_TEXT_MAX};
