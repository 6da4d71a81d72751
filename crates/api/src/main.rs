use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use tourdesk_api::auth::JwtAuthenticator;
use tourdesk_api::config::{LogFormat, ServerConfig, StorageConfig};
use tourdesk_api::router::build_app_router;
use tourdesk_api::state::AppState;
use tourdesk_db::{MemStorage, PgStore, Storage};

const DEFAULT_LOG_FILTER: &str = "tourdesk_api=debug,tourdesk_db=debug,tower_http=debug";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let config = ServerConfig::from_env();
    init_tracing(config.log_format);

    tracing::info!(
        host = %config.host,
        port = config.port,
        log_format = ?config.log_format,
        "Configuration loaded",
    );
    if config.admin_password_hash.is_none() {
        tracing::warn!("ADMIN_PASSWORD_HASH is not set; admin login is disabled");
    }

    let store = open_storage(&config.storage).await;
    if config.seed_sample_data {
        tourdesk_db::seed::seed_sample_data(store.as_ref())
            .await
            .expect("Failed to seed sample data");
    }

    let state = AppState {
        store,
        config: Arc::new(config.clone()),
        auth: Arc::new(JwtAuthenticator::new(config.jwt.clone())),
    };
    let app = build_app_router(state, &config);

    let ip = config.host.parse().expect("HOST must be an IP address");
    let addr = SocketAddr::new(ip, config.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");
    tracing::info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Shut down cleanly");
}

/// `RUST_LOG` wins over the built-in filter when set.
fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());
    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

/// Open the configured backing. A PostgreSQL store is checked and migrated
/// before the server accepts traffic.
async fn open_storage(storage: &StorageConfig) -> Arc<dyn Storage> {
    match storage {
        StorageConfig::Memory => {
            tracing::info!("Using in-memory storage; data is lost on restart");
            Arc::new(MemStorage::new())
        }
        StorageConfig::Postgres {
            database_url,
            max_connections,
        } => {
            let pool = tourdesk_db::create_pool(database_url, *max_connections)
                .await
                .expect("Failed to connect to database");
            tourdesk_db::health_check(&pool)
                .await
                .expect("Database health check failed");
            tourdesk_db::run_migrations(&pool)
                .await
                .expect("Failed to run database migrations");
            tracing::info!(max_connections, "PostgreSQL storage ready");
            Arc::new(PgStore::new(pool))
        }
    }
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Ctrl-C handler failed");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "SIGTERM handler failed");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Ctrl-C received, shutting down"),
        () = terminate => tracing::info!("SIGTERM received, shutting down"),
    }
}
