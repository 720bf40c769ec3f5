use axum::Router;
use axum::handler::HandlerWithoutStateExt;
use axum::routing::post;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::handler;
use crate::features::SummaryWorkflow;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub workflow: SummaryWorkflow,
}

impl AppState {
    #[must_use]
    pub fn new(workflow: SummaryWorkflow) -> Self {
        Self { workflow }
    }
}

/// `POST /summarize`, optional static files, plain-text 404 for the rest.
pub fn create_router(state: AppState, static_dir: Option<&str>) -> Router {
    let router = Router::new().route(
        "/summarize",
        post(handler::summarize_handler).fallback(handler::not_found),
    );

    let router = match static_dir {
        Some(dir) => router.fallback_service(
            ServeDir::new(dir)
                .call_fallback_on_method_not_allowed(true)
                .not_found_service(handler::not_found.into_service()),
        ),
        None => router.fallback(handler::not_found),
    };

    router
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve until SIGINT/SIGTERM.
///
/// # Errors
///
/// Returns an error if the server fails while accepting connections.
pub async fn serve(listener: TcpListener, router: Router) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!("Server is running on http://{}", addr);
    }

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

// Graceful shutdown handler
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
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
                tracing::error!("Failed to install SIGTERM handler: {}", e);
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

    info!("Received shutdown signal");
}
