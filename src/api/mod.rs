use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

pub mod health;
pub mod pages;

pub fn build_router() -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/reports/:report_number", get(pages::show_report))
        .route("/health", get(health::healthcheck))
        .layer(TraceLayer::new_for_http())
}
