use crate::frameworks::config::GatewayConfig;
use crate::interface_adapters::clients::{AuthClient, ProjectsClient};
use crate::interface_adapters::routes;
use crate::interface_adapters::state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

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

pub async fn start() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    let config = match GatewayConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid gateway configuration");
            return;
        }
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    // Bind TCP listener with error handling.
    let listener = match TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(%addr, error = %e, "failed to bind");
            return; // Abort startup on bind failure.
        }
    };
    tracing::info!(%addr, "listening");

    // Serve app and report errors rather than panicking.
    if let Err(e) = run(listener, config).await {
        tracing::error!(error = %e, "server error");
    }
}

// Serve the gateway on an already-bound listener.
pub async fn run(listener: TcpListener, config: GatewayConfig) -> Result<(), std::io::Error> {
    tracing::debug!(
        auth_service_url = %config.auth_service_url,
        projects_service_url = %config.projects_service_url,
        "upstream clients configured."
    );
    let auth = AuthClient::new(config.auth_service_url, config.upstream_timeout)
        .map_err(std::io::Error::other)?;
    let projects = Arc::new(
        ProjectsClient::new(config.projects_service_url, config.upstream_timeout)
            .map_err(std::io::Error::other)?,
    );

    let state = Arc::new(AppState {
        auth: Arc::new(auth),
        projects: projects.clone(),
        tasks: projects,
    });

    // Start the web server with the HTTP routes wired up.
    let app = routes::app(state);
    axum::serve(listener, app).await
}
