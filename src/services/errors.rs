use axum::http::StatusCode;
use thiserror::Error;

use crate::infrastructure::upstream::TransportFault;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Transport(#[from] TransportFault),
    #[error("malformed upstream response: {0}")]
    MalformedResponse(String),
    #[error("render error: {0}")]
    Render(String),
}

impl ServiceError {
    /// Transport faults answer 200 with the fault text as the whole body.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Transport(_) => StatusCode::OK,
            ServiceError::MalformedResponse(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ServiceError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<tera::Error> for ServiceError {
    fn from(value: tera::Error) -> Self {
        ServiceError::Render(value.to_string())
    }
}
