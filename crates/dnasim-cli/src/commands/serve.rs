use std::sync::Arc;

use tracing::info;

use dnasim_core::storage::{open_store, seed_defaults};
use dnasim_core::PresetStore;

use crate::app::AppContext;
use crate::cli::ServeArgs;
use crate::server;

pub fn handle_serve(ctx: &AppContext, args: &ServeArgs) -> anyhow::Result<()> {
    let backend = ctx.backend(args.memory)?;
    let bind = args
        .bind
        .clone()
        .unwrap_or_else(|| ctx.config.server.bind.clone());

    info!(%backend, "opening preset store");
    let store: Arc<dyn PresetStore> = Arc::from(open_store(&backend)?);
    seed_defaults(store.as_ref())?;

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| anyhow::anyhow!("Failed to start async runtime: {}", e))?;
    runtime.block_on(server::serve(store, &bind))
}
