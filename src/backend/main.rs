/**
 * dataqueue Server Entry Point
 *
 * Loads `.env`, initialises tracing, builds the application and serves it
 * until Ctrl+C.
 */

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use dataqueue::backend::server::{create_app, ServerConfig};
    use tokio_util::sync::CancellationToken;

    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    tracing::info!("[STARTUP] Server initialization started");

    let config = ServerConfig::from_env()?;
    let shutdown = CancellationToken::new();
    let app = create_app(&config, shutdown.clone()).await;

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("[STARTUP] Listening on {}", addr);
    tracing::info!("[STARTUP] Client should connect to http://127.0.0.1:{}", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown))
        .await?;

    tracing::info!("[SHUTDOWN] Server stopped");
    Ok(())
}

/// Wait for Ctrl+C, then cancel `shutdown` so open snapshot streams end
#[cfg(feature = "ssr")]
async fn shutdown_signal(shutdown: tokio_util::sync::CancellationToken) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("[SHUTDOWN] Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("[SHUTDOWN] Ctrl+C received, closing snapshot streams");
    shutdown.cancel();
}

#[cfg(not(feature = "ssr"))]
fn main() {
    eprintln!("Server requires the 'ssr' feature to be enabled.");
    eprintln!("Run with: cargo run --bin dataqueue-server --features ssr");
    std::process::exit(1);
}
