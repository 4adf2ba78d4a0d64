use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bias_core::BiasError;
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("Invalid model output: {0}")]
    InvalidModelOutput(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<BiasError> for AppError {
    fn from(err: BiasError) -> Self {
        match err {
            BiasError::InvalidInput(msg) => AppError::InvalidInput(msg),
            BiasError::ModelUnavailable(msg) => AppError::ModelUnavailable(msg),
            BiasError::InvalidModelOutput(msg) => AppError::InvalidModelOutput(msg),
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::InvalidModelOutput(err.to_string())
        } else {
            AppError::ModelUnavailable(err.to_string())
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    code: String,
}

impl AppError {
    /// HTTP status and stable error code, logging the error on the way
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::InvalidInput(msg) => {
                tracing::warn!(message = %msg, error_code = "INVALID_INPUT", "Invalid input");
                (StatusCode::BAD_REQUEST, "INVALID_INPUT")
            }
            AppError::ModelUnavailable(msg) => {
                tracing::error!(message = %msg, error_code = "MODEL_UNAVAILABLE", "Model unavailable");
                (StatusCode::BAD_GATEWAY, "MODEL_UNAVAILABLE")
            }
            AppError::InvalidModelOutput(msg) => {
                tracing::error!(message = %msg, error_code = "INVALID_MODEL_OUTPUT", "Model returned unusable output");
                (StatusCode::BAD_GATEWAY, "INVALID_MODEL_OUTPUT")
            }
            AppError::Config(msg) => {
                tracing::error!(message = %msg, error_code = "CONFIG_ERROR", "Configuration error");
                (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR")
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        tracing::debug!(
            status_code = %status.as_u16(),
            error_code = %code,
            error_message = %self.to_string(),
            "Returning error response"
        );

        let body = Json(ErrorResponse {
            error: self.to_string(),
            code: code.to_string(),
        });

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_map_to_status() {
        let err: AppError = BiasError::InvalidInput("empty".into()).into();
        assert_eq!(err.status_and_code(), (StatusCode::BAD_REQUEST, "INVALID_INPUT"));

        let err: AppError = BiasError::ModelUnavailable("loading".into()).into();
        assert_eq!(err.status_and_code(), (StatusCode::BAD_GATEWAY, "MODEL_UNAVAILABLE"));

        let err: AppError = BiasError::InvalidModelOutput("garbage".into()).into();
        assert_eq!(err.status_and_code().0, StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_error_response_status() {
        let response = AppError::Config("boom".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
