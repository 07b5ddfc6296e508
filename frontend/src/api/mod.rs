pub mod hotels_api;
