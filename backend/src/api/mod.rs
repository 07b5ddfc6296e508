//! HTTP routes served by the backend.

use std::sync::Arc;

use axum::{Router, routing::get};

use crate::catalog::HotelCatalog;

pub mod hotels;

pub fn router(catalog: Arc<HotelCatalog>) -> Router {
    Router::new()
        .route("/hotels", get(hotels::list_hotels))
        .with_state(catalog)
}
