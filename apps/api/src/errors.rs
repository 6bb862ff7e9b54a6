use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// The model answered, but its output could not be read as a scholarship
    /// array. The raw detail is logged server-side only.
    #[error("Upstream parse error: {0}")]
    UpstreamParse(String),

    /// The model call itself failed (transport or provider error). The cause
    /// string is returned to the caller.
    #[error("Upstream error: {0}")]
    Upstream(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::UpstreamParse(detail) => {
                tracing::error!("Upstream parse error: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "UPSTREAM_PARSE_ERROR",
                    "Failed to parse scholarship data from AI response".to_string(),
                )
            }
            AppError::Upstream(cause) => {
                tracing::error!("Upstream error: {cause}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "UPSTREAM_ERROR",
                    format!("Error fetching scholarship recommendations: {cause}"),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[test]
    fn test_status_code_mapping() {
        let cases = [
            (AppError::Validation("name is required".into()), 400),
            (AppError::NotFound("no scholarships".into()), 404),
            (AppError::UpstreamParse("expected array".into()), 500),
            (AppError::Upstream("connection reset".into()), 500),
        ];
        for (err, expected) in cases {
            assert_eq!(err.into_response().status().as_u16(), expected);
        }
    }

    #[tokio::test]
    async fn test_parse_error_detail_is_not_exposed() {
        // Raw model text stays in the logs; the caller sees a generic message.
        let err = AppError::UpstreamParse("raw model text: Sorry, I can't help".into());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body["error"]["message"],
            "Failed to parse scholarship data from AI response"
        );
    }

    #[tokio::test]
    async fn test_upstream_error_carries_cause() {
        let err = AppError::Upstream("connection reset by peer".into());
        let response = err.into_response();

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["code"], "UPSTREAM_ERROR");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("connection reset by peer"));
    }
}
