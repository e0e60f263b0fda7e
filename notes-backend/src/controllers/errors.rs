//! Mapping of `NoteError` onto HTTP status codes and the shared error envelope.

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse};
use notes_types::ApiError;
use strum::AsRefStr;

use crate::config::Config;
use crate::notes::NoteError;

const GENERIC_INTERNAL_MESSAGE: &str = "Something went wrong";

/// The `error` field of an error envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
pub enum ErrorCategory {
    #[strum(serialize = "Bad Request")]
    BadRequest,
    #[strum(serialize = "Validation Error")]
    Validation,
    #[strum(serialize = "Not Found")]
    NotFound,
    #[strum(serialize = "Internal Server Error")]
    Internal,
}

impl ErrorCategory {
    pub fn of(err: &NoteError) -> Self {
        match err {
            NoteError::EmptyBody | NoteError::NoFieldsProvided => ErrorCategory::BadRequest,
            NoteError::InvalidTitle
            | NoteError::InvalidContent
            | NoteError::TitleTooLong
            | NoteError::ContentTooLong => ErrorCategory::Validation,
            NoteError::NotFound(_) => ErrorCategory::NotFound,
            NoteError::Internal(_) => ErrorCategory::Internal,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ErrorCategory::BadRequest | ErrorCategory::Validation => StatusCode::BAD_REQUEST,
            ErrorCategory::NotFound => StatusCode::NOT_FOUND,
            ErrorCategory::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Build the error response for a failed note operation
pub fn error_response(err: &NoteError, config: &Config) -> HttpResponse {
    let category = ErrorCategory::of(err);

    let message = if err.is_client_error() {
        log::warn!("[NOTES] Request rejected: {}", err);
        err.to_string()
    } else {
        log::error!("[NOTES] Internal error: {}", err);
        if config.is_production() {
            GENERIC_INTERNAL_MESSAGE.to_string()
        } else {
            err.to_string()
        }
    };

    HttpResponse::build(category.status()).json(ApiError::new(category.as_ref(), message))
}

/// Fallback for requests that match no route
pub async fn route_not_found(req: HttpRequest) -> HttpResponse {
    HttpResponse::NotFound().json(ApiError::new(
        ErrorCategory::NotFound.as_ref(),
        format!("Route {} {} not found", req.method(), req.path()),
    ))
}
