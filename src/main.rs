use activity_rank::{load_log, router, AppState, Config, RankTable};
use tokio::fs;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let ranks = RankTable::standard()?;
    let config = Config::from_env();
    if let Some(parent) = config.data_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await?;
        }
    }

    let log = load_log(&config.data_path).await;
    info!(
        records = log.len(),
        path = %config.data_path.display(),
        tiers = ranks.tiers().len(),
        "activity log loaded"
    );

    let app = router(AppState::new(config.data_path.clone(), ranks, log));

    let addr = config.listen_addr();
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutting down"),
        Err(err) => {
            tracing::warn!("failed to listen for ctrl-c: {err}");
            std::future::pending::<()>().await;
        }
    }
}
