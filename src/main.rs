use axum::{routing::get, Router};
use std::sync::Arc;
use tdf_pool::{
    config::ServerConfig,
    shared::AppState,
    snapshot::{start_refresh_task, FileSnapshotSource, RefreshConfig, SnapshotSource, SnapshotStore},
    view::standings_routes,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tdf_pool=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();
    info!(?config, "Starting TdF pool standings server");

    let source: Arc<dyn SnapshotSource> = Arc::new(FileSnapshotSource::new(&config.snapshot_path));
    let snapshot_store = SnapshotStore::new();

    // A failed load is logged by the store; routes answer 503 until data arrives
    if snapshot_store.reload(source.as_ref()).await.is_err() {
        warn!(
            path = %config.snapshot_path.display(),
            "Serving without standings data"
        );
    }

    if let Some(refresh_interval) = config.refresh_interval {
        tokio::spawn(start_refresh_task(
            snapshot_store.clone(),
            Arc::clone(&source),
            RefreshConfig { refresh_interval },
        ));
    }

    let app_state = AppState::new(snapshot_store);

    let app = Router::new()
        .route("/", get(|| async { "TdF pool standings" }))
        .merge(standings_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Server running on http://{}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
