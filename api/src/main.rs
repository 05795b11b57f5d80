//! Roster API Server
//!
//! Manages courses and the participants enrolled in them.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{MemoryCourseRepository, MemoryParticipantRepository, MemoryStore};
use app::{CourseService, ParticipantService};
use config::Config;
use domain::entities::DeletePolicy;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub course_service: Arc<CourseService<MemoryCourseRepository>>,
    pub participant_service: Arc<ParticipantService<MemoryParticipantRepository>>,
}

impl AppState {
    /// Wire both services to the same store
    pub fn new(store: MemoryStore, delete_policy: DeletePolicy) -> Self {
        let course_repo = Arc::new(MemoryCourseRepository::new(store.clone()));
        let participant_repo = Arc::new(MemoryParticipantRepository::new(store));

        Self {
            course_service: Arc::new(CourseService::new(course_repo, delete_policy)),
            participant_service: Arc::new(ParticipantService::new(participant_repo)),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router with all routes and middleware
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/courses",
            get(handlers::list_courses).post(handlers::create_course),
        )
        .route(
            "/courses/:id",
            get(handlers::get_course)
                .put(handlers::update_course)
                .delete(handlers::delete_course),
        )
        .route(
            "/participants",
            get(handlers::list_participants).post(handlers::create_participant),
        )
        .route(
            "/participants/:id",
            get(handlers::get_participant)
                .put(handlers::update_participant)
                .delete(handlers::delete_participant),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn shutdown_signal() {
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

    tracing::info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,roster_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Roster API...");

    let config = Config::from_env();
    tracing::info!(
        course_delete_policy = %config.course_delete_policy,
        "Configuration loaded"
    );

    // State lives for the lifetime of the process
    let state = AppState::new(MemoryStore::new(), config.course_delete_policy);
    let app = router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Roster API stopped");
    Ok(())
}
