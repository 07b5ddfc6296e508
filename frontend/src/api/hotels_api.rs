//! Client HTTP calls for the hotel listing endpoint.

use common::{
    listing::{HotelsFetcher, RawResponse, TransportError},
    query_string::QueryString,
};

const DEFAULT_API_URL: &str = "http://127.0.0.1:8080";

/// Talks to `GET /hotels`. Dropping an in-flight call aborts the underlying fetch.
pub struct HttpHotelsFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl HttpHotelsFetcher {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Same origin as the page when running in the browser.
    pub fn from_environment() -> Self {
        Self::new(api_base_url())
    }

    fn hotels_url(&self, query: &QueryString) -> String {
        if query.is_empty() {
            format!("{}/hotels", self.base_url)
        } else {
            format!("{}/hotels?{}", self.base_url, query)
        }
    }
}

impl HotelsFetcher for HttpHotelsFetcher {
    async fn fetch_hotels(&self, query: &QueryString) -> Result<RawResponse, TransportError> {
        let response = self
            .client
            .get(self.hotels_url(query))
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| TransportError::Body(e.to_string()))?;
        Ok(RawResponse { status, body })
    }
}

fn api_base_url() -> String {
    #[cfg(target_arch = "wasm32")]
    if let Some(origin) = web_sys::window().and_then(|window| window.location().origin().ok()) {
        return origin;
    }
    option_env!("HOTELS_API_URL").unwrap_or(DEFAULT_API_URL).to_string()
}
