//! HTTP error mapping
//!
//! Every failure becomes a JSON body `{"detail": "..."}` with a matching
//! status code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use item_core::ItemError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Item not found")]
    NotFound,

    /// Request failed structural validation (body, path or query)
    #[error("{0}")]
    Validation(String),

    /// Store or cache failure; the message is logged, never returned
    #[error("Internal server error")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ItemError> for ApiError {
    fn from(e: ItemError) -> Self {
        match e {
            ItemError::NotFound(_) => ApiError::NotFound,
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(message) = &self {
            tracing::error!("Request failed: {}", message);
        }

        let status = self.status_code();
        let body = Json(json!({ "detail": self.to_string() }));
        (status, body).into_response()
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_error_mapping() {
        assert!(matches!(ApiError::from(ItemError::NotFound(3)), ApiError::NotFound));
        assert!(matches!(
            ApiError::from(ItemError::Database("disk I/O error".to_string())),
            ApiError::Internal(_)
        ));
        assert!(matches!(
            ApiError::from(ItemError::Cache("refused".to_string())),
            ApiError::Internal(_)
        ));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Validation("missing field".to_string()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::Internal("boom".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_detail_is_generic() {
        let err = ApiError::Internal("password=hunter2".to_string());
        assert_eq!(err.to_string(), "Internal server error");
    }
}
