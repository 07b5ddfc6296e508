//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod api_error;
pub mod filter_set;
pub mod hotel;
pub mod listing;
pub mod query_string;
pub mod url_codec;
