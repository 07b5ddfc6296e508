//! Frontend application entry point.

use frontend::app::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use std::sync::Arc;

        use anyhow::Context;
        use axum::{extract::Request, middleware::Next};
        use backend::{catalog::HotelCatalog, config::BackendConfig};
        use dioxus::server::axum;

        let config = BackendConfig::from_env();
        let catalog = HotelCatalog::load(&config.hotels_data_path)
            .await
            .context("Failed to load hotel catalog")?;

        Ok(dioxus::server::router(App)
            .merge(backend::api::router(Arc::new(catalog)))
            // we can apply a layer to the entire router using axum's `.layer` method
            .layer(axum::middleware::from_fn(
                |request: Request, next: Next| async move {
                    dioxus::logger::tracing::debug!("Request: {} {}", request.method(), request.uri().path());
                    let res = next.run(request).await;
                    dioxus::logger::tracing::debug!("Response: {}", res.status());
                    res
                },
            )))
    });
}
