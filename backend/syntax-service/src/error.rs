use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

/// Request-scoped pipeline errors.
///
/// `Service` carries the underlying cause for server-side logs only; the
/// client always receives the fixed generic message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    MissingInput(String),

    #[error("Service error: {0}")]
    Service(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let message = match self {
            AppError::MissingInput(msg) => msg.clone(),
            AppError::Service(_) => "Internal Server Error".to_string(),
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse { message })
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingInput(_) => StatusCode::BAD_REQUEST,
            AppError::Service(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
