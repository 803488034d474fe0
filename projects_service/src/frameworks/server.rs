use crate::frameworks::config::ProjectsConfig;
use crate::frameworks::db;
use crate::interface_adapters::routes;
use crate::interface_adapters::state::{AppState, PostgresProjectStore, PostgresTaskStore};
use std::net::SocketAddr;
use std::sync::Arc;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    let config = match ProjectsConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            tracing::error!(%error, "invalid projects service configuration");
            return;
        }
    };

    let pool = match db::connect_pool(&config.database_url, config.max_connections).await {
        Ok(pool) => pool,
        Err(error) => {
            tracing::error!(%error, "failed to connect to database");
            return;
        }
    };

    if let Err(error) = db::run_migrations(&pool).await {
        tracing::error!(%error, "failed to run migrations");
        return;
    }

    let state = Arc::new(AppState {
        projects: Arc::new(PostgresProjectStore { db: pool.clone() }),
        tasks: Arc::new(PostgresTaskStore { db: pool }),
    });

    // Wire the HTTP routes for projects and tasks.
    let app = routes::app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    // Bind TCP listener with error handling.
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(error) => {
            tracing::error!(%addr, %error, "failed to bind");
            return; // Abort startup on bind failure.
        }
    };
    tracing::info!(%addr, "listening");

    // Serve app and report errors rather than panicking.
    if let Err(error) = axum::serve(listener, app).await {
        tracing::error!(%error, "server error");
    }
}
