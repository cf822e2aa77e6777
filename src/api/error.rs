use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;

use crate::api::models::ErrorBody;
use crate::pagination::PaginationError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Pagination(#[from] PaginationError),

    #[error("{0} not found")]
    NotFound(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            ApiError::Pagination(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::Internal(err) => match err.downcast_ref::<PaginationError>() {
                Some(pagination) => (StatusCode::BAD_REQUEST, pagination.to_string()),
                None => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string()),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = self.status_and_message();
        if status.is_server_error() {
            log::error!("Request failed: {:?}", self);
        }
        (status, Json(ErrorBody { error })).into_response()
    }
}
