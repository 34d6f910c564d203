//! Gallery handlers
//!
//! Endpoints backed by the local gallery directory.

use axum::{
    extract::{Path, Query, Request, State},
    response::{IntoResponse, Redirect, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tower::ServiceExt;
use tower_http::services::ServeDir;

use crate::app::gallery_service::{has_extension, DEFAULT_SHOWCASE_COUNT};
use crate::domain::entities::gallery::{GalleryFolder, ShowcasePhoto};
use crate::error::AppError;
use crate::AppState;

/// Upper bound on showcase photos probed in one request
const MAX_SHOWCASE_COUNT: u32 = 500;

/// Response for the gallery scan
#[derive(Debug, Serialize)]
pub struct GalleryResponse {
    pub folders: Vec<GalleryFolder>,
}

/// Query parameters for listing showcase photos
#[derive(Debug, Deserialize)]
pub struct PhotosQuery {
    #[serde(default = "default_count")]
    pub count: u32,
}

fn default_count() -> u32 {
    DEFAULT_SHOWCASE_COUNT
}

#[derive(Debug, Serialize)]
pub struct PhotosResponse {
    pub photos: Vec<ShowcasePhoto>,
}

/// GET /api/gallery
///
/// List gallery subfolders and their images.
pub async fn list_gallery(State(state): State<AppState>) -> Result<Json<GalleryResponse>, AppError> {
    let folders = state.gallery_service.scan().await?;
    tracing::debug!("Gallery scan found {} folders", folders.len());

    Ok(Json(GalleryResponse { folders }))
}

/// GET /api/photos
///
/// List the numbered showcase photos that exist, with their resolved URLs.
pub async fn list_photos(
    State(state): State<AppState>,
    Query(query): Query<PhotosQuery>,
) -> Json<PhotosResponse> {
    let count = query.count.min(MAX_SHOWCASE_COUNT);
    let photos = state.gallery_service.showcase_photos(count).await;

    Json(PhotosResponse { photos })
}

/// GET /gallery/:name
///
/// Files named with an extension are served as-is. Extensionless names
/// (`/gallery/photo7`) redirect to the first matching image on disk.
pub async fn gallery_file(
    State(state): State<AppState>,
    Path(name): Path<String>,
    request: Request,
) -> Result<Response, AppError> {
    if has_extension(&name) {
        let served = ServeDir::new(&state.config.public_dir)
            .oneshot(request)
            .await;
        return Ok(match served {
            Ok(response) => response.into_response(),
            Err(never) => match never {},
        });
    }

    match state.gallery_service.resolve_photo(&name).await {
        Some(url) => Ok(Redirect::temporary(&url).into_response()),
        None => Err(AppError::NotFound(format!("No image found for {}", name))),
    }
}
