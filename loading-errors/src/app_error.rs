use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum AppError {
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Unknown design token: {0}")]
    UnknownToken(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn user_message(&self) -> &str {
        match self {
            Self::InvalidColor(_) => "Colors must be written as #RRGGBB or #RGB.",
            Self::UnknownToken(_) => "That color token is not part of the design system.",
            Self::Config(_) => "The server is misconfigured.",
            Self::Internal(_) => "Something went wrong on the server.",
        }
    }
}

#[cfg(feature = "ssr")]
mod ssr_impl {
    use super::AppError;
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use axum::Json;

    #[derive(serde::Serialize)]
    struct ErrorResponse {
        message: String,
        hint: String,
    }

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            let status = match &self {
                AppError::InvalidColor(_) | AppError::UnknownToken(_) => StatusCode::BAD_REQUEST,
                AppError::Config(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            let body = ErrorResponse {
                message: self.to_string(),
                hint: self.user_message().to_string(),
            };
            (status, Json(body)).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_detail() {
        assert_eq!(
            AppError::UnknownToken("ui_999".into()).to_string(),
            "Unknown design token: ui_999"
        );
    }

    #[test]
    fn test_user_message_hides_detail() {
        let err = AppError::InvalidColor("#zz".into());
        assert!(err.user_message().contains("#RRGGBB"));
        assert!(!err.user_message().contains("#zz"));
    }
}
