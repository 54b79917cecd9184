//! Error types for the schedule viewer.
//!
//! Only the data-loading boundary and user-supplied parameters can fail; the
//! pivot and filter functions are total.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewerError {
    /// File access while loading a CSV source
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV (unbalanced quotes, invalid UTF-8, ...)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid month: {0} (expected 1-12)")]
    InvalidMonth(u32),

    /// Year outside the calendar range the grid can lay out
    #[error("Invalid year: {0}")]
    InvalidYear(i32),

    #[error("Invalid direction: {0:?} (expected \"prev\" or \"next\")")]
    InvalidDirection(String),

    /// Shared state unusable (poisoned lock)
    #[error("State error: {0}")]
    State(String),
}

pub type Result<T> = std::result::Result<T, ViewerError>;

impl ViewerError {
    pub fn state(msg: impl Into<String>) -> Self {
        Self::State(msg.into())
    }

    /// True for errors caused by bad caller input rather than the environment.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidMonth(_) | Self::InvalidYear(_) | Self::InvalidDirection(_))
    }
}

impl ResponseError for ViewerError {
    fn status_code(&self) -> StatusCode {
        if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({ "error": self.to_string() }))
    }
}
