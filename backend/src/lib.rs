//! Hotel listing backend: catalog and the `GET /hotels` route.

pub mod api;
pub mod catalog;
pub mod config;
