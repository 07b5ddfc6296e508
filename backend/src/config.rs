//! Backend settings read from the environment.

use std::path::PathBuf;

pub const DEFAULT_HOTELS_DATA_PATH: &str = "backend/data/hotels.json";

#[derive(Debug, Clone, PartialEq)]
pub struct BackendConfig {
    pub hotels_data_path: PathBuf,
}

impl BackendConfig {
    pub fn from_env() -> Self {
        Self {
            hotels_data_path: std::env::var("HOTELS_DATA_PATH")
                .unwrap_or(DEFAULT_HOTELS_DATA_PATH.to_string())
                .into(),
        }
    }
}
