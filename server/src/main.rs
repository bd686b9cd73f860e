//! Healthcare API server.
//!
//! Run from repo root: `cargo run -p healthcare-server`
//! Settings come from the environment or a `.env` file (see `ServerConfig`).

use healthcare_api::{build_router, connect, ensure_tables, AppState, ServerConfig};
use tokio::net::TcpListener;
use tokio::signal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("healthcare_api=info,healthcare_server=info,tower_http=info")
            }),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let pool = connect(&config.database_url, config.max_connections).await?;
    ensure_tables(&pool).await?;
    tracing::info!(database_url = %config.database_url, "database ready");

    let app = build_router(AppState::new(pool.clone()), config.body_limit);
    let listener = TcpListener::bind(config.socket_addr()?).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Listener is down; no request can reach the pool any more.
    pool.close().await;
    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
