use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::header,
    response::{Html, IntoResponse, Response},
};
use tracing::error;

use crate::{
    infrastructure::state::AppState,
    services::{errors::ServiceError, reports::ReportService},
};

const REDACTED_FAULT: &str = "upstream request failed";

pub async fn index(Extension(state): Extension<Arc<AppState>>) -> Response {
    match state.views.render_index() {
        Ok(html) => Html(html).into_response(),
        Err(err) => to_response(&state, ServiceError::from(err)),
    }
}

pub async fn show_report(
    Extension(state): Extension<Arc<AppState>>,
    Path(report_number): Path<String>,
) -> Response {
    let service = ReportService::new(Arc::clone(&state));
    let rendered = service
        .lookup(&report_number)
        .await
        .and_then(|view| service.render(&view));
    match rendered {
        Ok(html) => Html(html).into_response(),
        Err(err) => to_response(&state, err),
    }
}

/// Transport faults go back as the bare fault text; nothing is templated on
/// that path.
fn to_response(state: &AppState, err: ServiceError) -> Response {
    let body = match &err {
        ServiceError::Transport(_) if state.config.redact_transport_faults => {
            REDACTED_FAULT.to_string()
        }
        ServiceError::Transport(fault) => fault.to_string(),
        other => {
            error!(error = %other, "report page failed");
            other.to_string()
        }
    };
    (
        err.status_code(),
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        body,
    )
        .into_response()
}
