use thiserror::Error;

use super::validator::{MAX_CONTENT_CHARS, MAX_TITLE_CHARS};

/// Every way a note request can fail before or during a store operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoteError {
    #[error("Request body is required")]
    EmptyBody,

    #[error("Title is required and must be a non-empty string")]
    InvalidTitle,

    #[error("Content is required and must be a non-empty string")]
    InvalidContent,

    #[error("Title must be {} characters or less", MAX_TITLE_CHARS)]
    TitleTooLong,

    #[error("Content must be {} characters or less", MAX_CONTENT_CHARS)]
    ContentTooLong,

    #[error("At least one field (title or content) must be provided")]
    NoFieldsProvided,

    #[error("Note with id {0} not found")]
    NotFound(String),

    #[error("{0}")]
    Internal(String),
}

impl NoteError {
    pub fn not_found(id: impl ToString) -> Self {
        NoteError::NotFound(id.to_string())
    }

    /// True for failures caused by the request itself rather than the service
    pub fn is_client_error(&self) -> bool {
        !matches!(self, NoteError::Internal(_))
    }
}
