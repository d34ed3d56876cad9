use anyhow::{Context, Result};
use tracing::{error, info};

use employee_blog_api::{app, config, middleware};
use persistence::{migrations, Gateway};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = config::Config::load().context("failed to load configuration")?;

    middleware::logging::init_logging(&config.logging);
    middleware::metrics::init_metrics().context("failed to install metrics recorder")?;

    info!(version = env!("CARGO_PKG_VERSION"), "Starting Employee Blog API");

    let gateway = Gateway::connect(&config.database)
        .await
        .context("failed to connect to the database")?;

    let pending = migrations::pending(gateway.pool())
        .await
        .context("failed to read the migration ledger")?;
    info!(pending = pending.len(), "Schema migration status");
    migrations::run(gateway.pool())
        .await
        .context("failed to apply schema migrations")?;

    let app = app::create_app(&config, gateway.clone());

    let addr = config.socket_addr().context("invalid server address")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;
    info!(address = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    gateway.pool().close().await;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = %err, "Unable to install Ctrl+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                error!(error = %err, "Unable to install SIGTERM handler");
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
    info!("Shutdown signal received");
}
