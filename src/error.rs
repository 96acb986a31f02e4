use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body failed one or more field constraints. Detected before
    /// any persistence is attempted.
    #[error("validation failed")]
    Validation(#[from] ValidationErrors),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("password hashing failed")]
    Hash(#[from] bcrypt::BcryptError),
    /// Declared route with no behavior yet. Surfaced explicitly instead of
    /// returning an undefined empty result.
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Store(_) | Self::Hash(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotImplemented(_) => StatusCode::NOT_IMPLEMENTED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            Self::Validation(errors) => HttpResponse::UnprocessableEntity().json(json!({
                "error": "validation failed",
                "fields": errors,
            })),
            Self::NotImplemented(operation) => HttpResponse::NotImplemented().json(json!({
                "error": "not implemented",
                "operation": operation,
            })),
            other => {
                error!("request failed: {other}");
                HttpResponse::InternalServerError().json(json!({
                    "error": other.to_string(),
                }))
            }
        }
    }
}
