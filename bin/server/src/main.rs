use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use studydesk_server::{
    app,
    auth::{AppState, SessionRepository},
    config::ServerConfig,
    store::PgDashboardStore,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;
    tracing::info!("Loaded configuration");

    let db_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(&db_pool).await?;

    let sessions = SessionRepository::new(db_pool.clone());
    spawn_session_cleanup(sessions.clone(), config.session.cleanup_interval_seconds);

    let state = Arc::new(AppState::new(
        Arc::new(sessions),
        Arc::new(PgDashboardStore::new(db_pool)),
        config.session.clone(),
        config.access.clone(),
    ));

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    tracing::info!("listening on http://{}", config.listen_addr);

    axum::serve(listener, app::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Periodically deletes sessions the identity provider left behind.
fn spawn_session_cleanup(sessions: SessionRepository, interval_secs: u64) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(interval_secs.max(1)));
        loop {
            interval.tick().await;
            match sessions.delete_expired().await {
                Ok(count) if count > 0 => {
                    tracing::debug!(deleted_sessions = count, "Periodic session cleanup");
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to cleanup expired sessions");
                }
            }
        }
    });
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
