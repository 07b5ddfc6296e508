pub mod error_boundary;
pub mod hotel_components;
pub mod navbar;
pub mod status_views;
