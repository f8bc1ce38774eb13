pub mod config;
pub mod error;
pub mod state;
pub mod auth;
pub mod db;
pub mod models;
pub mod routes;
pub mod email;

use std::sync::Arc;

use axum::http::header::CONTENT_TYPE;
use axum::http::Method;
use axum::Router;
use sqlx::PgPool;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::email::Mailer;
use crate::state::{AppState, SharedState};

pub fn build_app(pool: PgPool, config: Config) -> Router {
    // Build the welcome mailer if SMTP is configured
    let mailer = config.smtp.as_ref().and_then(|smtp| {
        match Mailer::new(smtp) {
            Ok(mailer) => {
                tracing::info!("SMTP configured");
                Some(Arc::new(mailer))
            }
            Err(e) => {
                tracing::warn!("SMTP not available: {e}");
                None
            }
        }
    });

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .allow_origin(match config.cors_origin.as_str() {
            "*" => AllowOrigin::from(Any),
            origin => AllowOrigin::exact(
                origin.parse().expect("Invalid ENROLLD_CORS_ORIGIN"),
            ),
        });

    let state: SharedState = Arc::new(AppState {
        pool,
        config,
        mailer,
    });

    Router::new()
        .merge(routes::api_routes())
        .nest_service("/public", ServeDir::new("public"))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
