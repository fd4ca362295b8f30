//! pulseboard server
//!
//! - Dashboard page: `/`
//! - JSON stats / sanitized environment: `/api/stats`, `/env`
//! - Liveness and metrics: `/health`, `/metrics`
//! - Background ticker bumping the counter every period

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pulseboard_core::Result;
use pulseboard_server::{app_state::AppState, config::Settings, router, ticker::Ticker};

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::from_env()?;

    let default_level = if settings.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let listen = settings.listen_addr()?;
    let period = settings.tick_interval;
    tracing::info!(
        app = %settings.app_name,
        env = %settings.environment,
        debug = settings.debug,
        "configuration loaded"
    );

    let state = AppState::new(settings);
    let ticker = Ticker::start(state.runtime(), period);
    let app = router::build_router(state);

    let listener = tokio::net::TcpListener::bind(listen).await?;
    tracing::info!(%listen, "pulseboard listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    ticker.shutdown().await;
    tracing::info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
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
    tracing::info!("signal received, starting graceful shutdown");
}
