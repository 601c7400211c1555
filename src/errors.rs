use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use std::fmt;

use crate::models::assignment::AssignError;

/// Error body returned by every JSON endpoint.
#[derive(Serialize, Debug, Clone)]
pub struct ApiErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug)]
pub enum AppError {
    Session(String),
    NotFound,
    Validation(Vec<String>),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Session(e) => write!(f, "Session error: {e}"),
            AppError::NotFound => write!(f, "Not found"),
            AppError::Validation(errors) => write!(f, "Validation failed: {}", errors.join("; ")),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Session(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::NotFound => ApiErrorResponse {
                error: "Not found".to_string(),
                details: None,
            },
            AppError::Validation(errors) => ApiErrorResponse {
                error: "Validation failed".to_string(),
                details: Some(errors.join("; ")),
            },
            AppError::Session(_) => {
                log::error!("{self}");
                ApiErrorResponse {
                    error: "Session error".to_string(),
                    details: None,
                }
            }
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

impl From<Vec<AssignError>> for AppError {
    fn from(errors: Vec<AssignError>) -> Self {
        AppError::Validation(errors.iter().map(ToString::to_string).collect())
    }
}
