//! HTTP error mapping for the album routes.

use crate::album_store::validation::ValidationError;
use crate::album_store::StoreError;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

/// One entry of a 422 response `detail` list.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FieldError {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldError {
    fn new(loc: &[&str], msg: impl Into<String>, kind: &str) -> Self {
        FieldError {
            loc: loc.iter().map(|s| s.to_string()).collect(),
            msg: msg.into(),
            kind: kind.to_string(),
        }
    }
}

impl From<&ValidationError> for FieldError {
    fn from(err: &ValidationError) -> Self {
        match err.field() {
            Some(field) => FieldError::new(&["body", field], err.to_string(), err.kind()),
            None => FieldError::new(&["body"], err.to_string(), err.kind()),
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Album not found")]
    NotFound,

    #[error("{0}")]
    InvalidArgument(String),

    #[error("Request validation failed")]
    Validation(Vec<FieldError>),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { .. } => ApiError::NotFound,
            StoreError::InvalidArgument(message) => ApiError::InvalidArgument(message),
        }
    }
}

impl From<Vec<ValidationError>> for ApiError {
    fn from(errors: Vec<ValidationError>) -> Self {
        ApiError::Validation(errors.iter().map(FieldError::from).collect())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(vec![FieldError::new(
            &["body"],
            rejection.body_text(),
            "json_invalid",
        )])
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Validation(vec![FieldError::new(
            &["path", "album_id"],
            rejection.body_text(),
            "int_parsing",
        )])
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        let msg = rejection.body_text();
        let kind = if msg.contains("missing field") {
            "missing"
        } else {
            "query_invalid"
        };
        ApiError::Validation(vec![FieldError::new(&["query", "q"], msg, kind)])
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self {
            ApiError::Validation(errors) => json!({ "detail": errors }),
            other => json!({ "detail": other.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn not_found_body() {
        let response = ApiError::from(StoreError::NotFound { id: 3 }).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({ "detail": "Album not found" }));
    }

    #[tokio::test]
    async fn invalid_argument_body() {
        let err = StoreError::InvalidArgument("Search query cannot be empty".to_string());
        let response = ApiError::from(err).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "detail": "Search query cannot be empty" })
        );
    }

    #[tokio::test]
    async fn validation_body_lists_fields() {
        let errors = vec![
            ValidationError::MissingField { field: "title" },
            ValidationError::NotAnObject,
        ];
        let response = ApiError::from(errors).into_response();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        let detail = body["detail"].as_array().unwrap();
        assert_eq!(detail.len(), 2);
        assert_eq!(detail[0]["loc"], json!(["body", "title"]));
        assert_eq!(detail[0]["type"], "missing");
        assert_eq!(detail[1]["loc"], json!(["body"]));
    }
}
