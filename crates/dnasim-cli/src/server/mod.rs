//! JSON HTTP API over the preset store and codec.

mod error;
mod routes;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use dnasim_core::PresetStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PresetStore>,
}

pub fn router(store: Arc<dyn PresetStore>) -> Router {
    Router::new()
        .route(
            "/api/simulations",
            get(routes::list_presets).post(routes::create_preset),
        )
        .route(
            "/api/simulations/:id",
            get(routes::get_preset).delete(routes::delete_preset),
        )
        .route("/api/encode", post(routes::encode))
        .route("/api/decode", post(routes::decode_binary))
        .with_state(AppState { store })
}

/// Serve the API on `bind` until Ctrl-C.
pub async fn serve(store: Arc<dyn PresetStore>, bind: &str) -> anyhow::Result<()> {
    let backend = store.backend_name();
    let listener = TcpListener::bind(bind)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind {}: {}", bind, e))?;
    info!(addr = %listener.local_addr()?, backend, "listening");

    axum::serve(listener, router(store))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutting down");
}
