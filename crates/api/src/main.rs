use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use paris_api::config::ServerConfig;
use paris_api::router::build_app_router;
use paris_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "paris_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    // A missing or malformed connection string is not fatal: the service
    // keeps serving with persistence-backed endpoints reporting errors.
    let db = match (&config.database_url, &config.database_name) {
        (Some(url), Some(name)) => match paris_db::connect(url, name).await {
            Ok(db) => {
                tracing::info!(database = %name, "Database handle established");
                Some(db)
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to establish database handle");
                None
            }
        },
        _ => {
            tracing::warn!("DATABASE_URL/DATABASE_NAME not set, running without a database");
            None
        }
    };

    // --- App state ---
    let state = AppState {
        db: db.clone(),
        config: Arc::new(config.clone()),
    };

    // --- Seeding ---
    // Best-effort and fire-and-forget: requests may be served before it
    // completes, and a failure leaves the service running with whatever
    // content exists.
    if let Some(db) = db {
        tokio::spawn(async move {
            match paris_db::seed::ensure_seed_data(&db).await {
                Ok(report) => tracing::info!(?report, "Seed routine finished"),
                Err(err) => tracing::warn!(error = %err, "Seed routine aborted"),
            }
        });
    }

    // --- Router ---
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager (e.g. systemd, Docker, Kubernetes).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
