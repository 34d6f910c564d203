//! Unified error types for the Lumière API
//!
//! This module defines error types for each layer:
//! - `DriveError`: Google Drive API client errors
//! - `AppError`: Application layer errors (mapped to the JSON bodies the site expects)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Google Drive API client errors
#[derive(Debug, Error)]
pub enum DriveError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Response has no files listing")]
    MissingFiles,
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Gallery scan failed: {0}")]
    GalleryScan(#[from] std::io::Error),

    #[error("Drive gallery failed: {0}")]
    DriveGallery(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "error": msg })),
            AppError::GalleryScan(e) => {
                tracing::error!("Error reading gallery folders: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Failed to read gallery folders", "folders": [] }),
                )
            }
            AppError::DriveGallery(msg) => {
                tracing::error!("Error fetching Drive images: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Failed to fetch images", "images": [] }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn bad_request_carries_message_only() {
        let (status, body) =
            body_json(AppError::BadRequest("folderId or category is required".into())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "folderId or category is required" }));
    }

    #[tokio::test]
    async fn gallery_scan_returns_empty_folders() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let (status, body) = body_json(AppError::GalleryScan(io)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["folders"], json!([]));
        assert_eq!(body["error"], "Failed to read gallery folders");
    }

    #[tokio::test]
    async fn drive_gallery_returns_empty_images() {
        let (status, body) = body_json(AppError::DriveGallery("boom".into())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Failed to fetch images", "images": [] }));
    }
}
