use cut_tracker::{load_store, resolve_data_dir, router, stats::today_key, AppState, BlobStore};
use std::{env, net::SocketAddr};
use tokio::fs;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let data_dir = resolve_data_dir();
    fs::create_dir_all(&data_dir).await?;
    info!("storing data in {}", data_dir.display());

    let blob = BlobStore::new(data_dir);
    let store = load_store(&blob, &today_key()).await;
    info!(
        "loaded {} day records, active date {}",
        store.days().len(),
        store.active_date()
    );
    let app = router(AppState::new(blob, store));

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
