pub mod account;

use axum::routing::{get, post};
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(root))
        .route("/api/register", post(account::register))
        .route("/api/login", post(account::login))
}

async fn root() -> &'static str {
    "API is running"
}
