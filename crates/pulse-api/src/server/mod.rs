//! Server setup and initialization
//!
//! Builds the stores, seeds them, and runs the HTTP server until a shutdown
//! signal arrives.

use std::sync::Arc;

use axum::Router;
use pulse_common::{AppConfig, AppError, AppResult};
use pulse_service::ServiceContextBuilder;
use pulse_store::{
    seed_default_events, MemAnnouncementRepository, MemEventRepository, MemFeedbackRepository,
    MemReactionRepository,
};
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router();
    let router = apply_middleware(router, state.config());
    router.with_state(state)
}

/// Create fresh stores, seed the default events and build the AppState
///
/// # Errors
/// Returns `AppError::Seed` if seeding fails; the server must not start then.
pub fn create_app_state(config: AppConfig) -> AppResult<AppState> {
    let event_repo = Arc::new(MemEventRepository::new());
    let reaction_repo = Arc::new(MemReactionRepository::new());
    let feedback_repo = Arc::new(MemFeedbackRepository::new());
    let announcement_repo = Arc::new(MemAnnouncementRepository::new(
        config.app.announcement.clone(),
    ));

    let seeded = seed_default_events(event_repo.as_ref(), reaction_repo.as_ref())
        .map_err(|e| AppError::Seed(e.to_string()))?;
    info!(events = seeded.len(), "Stores initialized");

    let service_context = ServiceContextBuilder::new()
        .event_repo(event_repo)
        .reaction_repo(reaction_repo)
        .feedback_repo(feedback_repo)
        .announcement_repo(announcement_repo)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Serve the application on an already bound listener
pub async fn run_server(app: Router, listener: TcpListener) -> AppResult<()> {
    let addr = listener
        .local_addr()
        .map_err(|e| AppError::Server(e.to_string()))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Server(e.to_string()))?;

    info!("Server stopped");
    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> AppResult<()> {
    let addr = config.api.address();

    // Seed before binding so a failure never accepts a connection
    let state = create_app_state(config)?;
    let app = create_app(state);

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Server(format!("Failed to bind to {addr}: {e}")))?;

    run_server(app, listener).await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
