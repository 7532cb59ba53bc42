use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::core::CalcError;

use super::json_response;

#[derive(Debug, Serialize)]
pub(crate) struct ErrorResponse {
    pub(crate) error: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Calc(#[from] CalcError),

    #[error("empty cache")]
    EmptyCache,

    #[error("invalid request body")]
    InvalidBody,

    #[error("only post method allowed")]
    PostOnly,

    #[error("only get method allowed")]
    GetOnly,

    #[error("not found")]
    NotFound,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Calc(_) | ApiError::EmptyCache | ApiError::InvalidBody => {
                StatusCode::BAD_REQUEST
            }
            ApiError::PostOnly | ApiError::GetOnly => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        json_response(
            self.status(),
            ErrorResponse {
                error: self.to_string(),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calc_errors_keep_their_message() {
        let err = ApiError::from(CalcError::MultipleProgramsSelected);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "choose only 1 program");
    }

    #[test]
    fn empty_cache_is_distinct_from_validation_errors() {
        let err = ApiError::EmptyCache;
        assert!(!matches!(err, ApiError::Calc(_)));
        assert_eq!(err.to_string(), "empty cache");
    }

    #[test]
    fn method_errors_map_to_405() {
        assert_eq!(ApiError::PostOnly.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(ApiError::GetOnly.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
