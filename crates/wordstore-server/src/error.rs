//! Mapping of engine and storage failures onto HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use wordstore_core::{StatsError, StoreError};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Stats(#[from] StatsError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("malformed request body: {0}")]
    BadRequest(String),

    #[error("background task failed: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Stats(err) => stats_status(err),
            ApiError::Store(err) => store_status(err),
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

fn stats_status(err: &StatsError) -> StatusCode {
    match err {
        StatsError::InvalidOrder(_) | StatsError::InvalidLimit(_) => StatusCode::BAD_REQUEST,
        StatsError::Store(err) => store_status(err),
        StatsError::Scan { .. }
        | StatsError::ScanTimeout { .. }
        | StatsError::WorkerLost
        | StatsError::WorkerSpawn { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn store_status(err: &StoreError) -> StatusCode {
    match err {
        StoreError::InvalidName(_) => StatusCode::BAD_REQUEST,
        StoreError::NotFound(_) => StatusCode::NOT_FOUND,
        StoreError::AlreadyExists(_) => StatusCode::CONFLICT,
        StoreError::Io { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "request failed: {}", self);
        } else {
            tracing::warn!(status = status.as_u16(), "request rejected: {}", self);
        }

        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use wordstore_core::FileIdentifier;

    #[test]
    fn validation_errors_are_bad_requests() {
        let err = ApiError::from(StatsError::InvalidOrder("up".into()));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        let err = ApiError::from(StatsError::InvalidLimit(-1));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        let err = ApiError::from(StoreError::InvalidName("../x".into()));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn storage_conflicts_map_to_specific_statuses() {
        assert_eq!(
            ApiError::from(StoreError::NotFound("a".into())).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(StoreError::AlreadyExists("a".into())).status(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn undecodable_bodies_are_bad_requests() {
        let err = serde_json::from_slice::<Vec<u8>>(b"[{not json").unwrap_err();
        let err = ApiError::from(err);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().starts_with("malformed request body"));
    }

    #[test]
    fn scan_failures_are_server_errors() {
        let err = ApiError::from(StatsError::Scan {
            file: FileIdentifier::from("a.txt"),
            source: StoreError::NotFound("a.txt".into()),
        });
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let err = ApiError::from(StatsError::WorkerSpawn {
            file: FileIdentifier::from("a.txt"),
            source: io::Error::from(io::ErrorKind::OutOfMemory),
        });
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let err = ApiError::from(StatsError::Store(StoreError::Io {
            path: "files".into(),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        }));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
