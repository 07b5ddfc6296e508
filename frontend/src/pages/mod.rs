pub mod home_page;
pub mod hotels_page;
