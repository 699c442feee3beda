use std::env::var;
use std::path::PathBuf;

use anyhow::Context;
use fonici_stats::api::{AppState, create_router};
use fonici_stats::config::ConfigLoader;
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fonici_stats=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_dir =
        PathBuf::from(var("FONICI_CONFIG_DIR").unwrap_or_else(|_| "./config/fonici".to_string()));
    let config = if config_dir.exists() {
        ConfigLoader::load(&config_dir)
            .with_context(|| format!("loading configuration from {}", config_dir.display()))?
    } else {
        tracing::warn!(
            path = %config_dir.display(),
            "Configuration directory not found, using built-in defaults"
        );
        ConfigLoader::default()
    };

    let app = create_router(AppState::new(config));

    let host = var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = var("APP_PORT").unwrap_or_else(|_| "3000".to_string());
    let bind_addr = format!("{}:{}", host, port);
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("binding {}", bind_addr))?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install signal handler");
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

    tracing::info!("shutting down");
}
