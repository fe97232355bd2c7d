// Framework bootstrap for the guest gate.

use crate::frameworks::{config, roster_file};
use crate::interface_adapters::routes::app;
use crate::interface_adapters::state::AppState;
use std::io::{self, Result};
use std::net::SocketAddr;

pub fn init_runtime() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();

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

pub fn build_state() -> Result<AppState> {
    let path = config::roster_path();
    let roster = roster_file::resolve_roster(path.as_deref()).map_err(|e| {
        tracing::error!(error = %e, "invalid guest roster");
        io::Error::other(e)
    })?;

    // The session starts empty on every boot.
    Ok(AppState::new(roster))
}

pub async fn run(listener: tokio::net::TcpListener) -> Result<()> {
    let address = listener.local_addr()?;
    let state = build_state()?;

    // Wire routes for the login gate.
    let app = app(state);

    tracing::info!(%address, "listening");

    // Serve app and report errors rather than panicking
    axum::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    })
}

pub async fn bind_and_run() -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config::http_port()));

    let listener = tokio::net::TcpListener::bind(addr).await.inspect_err(|e| {
        tracing::error!(%addr, error = %e, "failed to bind");
    })?;

    run(listener).await
}
