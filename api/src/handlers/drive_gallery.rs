//! Drive gallery handlers
//!
//! The external gallery proxy and the portfolio page's per-category lookup.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;

use crate::app::drive_gallery_service::PortfolioCategory;
use crate::domain::entities::gallery::GalleryImage;
use crate::error::AppError;
use crate::AppState;

/// Query parameters for the proxy
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DriveGalleryQuery {
    pub folder_id: Option<String>,
    pub category: Option<String>,
}

impl DriveGalleryQuery {
    /// The first value wins when a parameter repeats; unknown keys are ignored
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "folderId" => &mut query.folder_id,
                "category" => &mut query.category,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }
}

#[derive(Debug, Serialize)]
pub struct DriveGalleryResponse {
    pub images: Vec<GalleryImage>,
}

#[derive(Debug, Serialize)]
pub struct PortfolioResponse {
    pub categories: Vec<PortfolioCategory>,
}

/// GET /api/drive-gallery?category=<name>|folderId=<id>
///
/// List a Drive folder's images. An empty list tells the page to fall back to
/// the embedded folder view.
pub async fn get_drive_gallery(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<DriveGalleryResponse>, AppError> {
    let query = DriveGalleryQuery::from_pairs(pairs);
    let folder_id = state
        .drive_gallery_service
        .resolve_folder(query.folder_id.as_deref(), query.category.as_deref())?;

    // A panic while talking to Drive becomes a 500 with an empty list rather
    // than a dropped connection.
    let service = state.drive_gallery_service.clone();
    let images = tokio::spawn(async move { service.list_images(&folder_id).await })
        .await
        .map_err(|e| AppError::DriveGallery(e.to_string()))?;

    Ok(Json(DriveGalleryResponse { images }))
}

/// GET /api/portfolio
///
/// Every portfolio category with its images or embedded-view fallback.
pub async fn get_portfolio(State(state): State<AppState>) -> Json<PortfolioResponse> {
    let categories = state.drive_gallery_service.portfolio().await;

    Json(PortfolioResponse { categories })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn first_repeated_value_wins() {
        let query = DriveGalleryQuery::from_pairs(pairs(&[
            ("category", "food"),
            ("category", "boxing"),
            ("folderId", "abc"),
            ("folderId", "def"),
        ]));

        assert_eq!(query.category.as_deref(), Some("food"));
        assert_eq!(query.folder_id.as_deref(), Some("abc"));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let query = DriveGalleryQuery::from_pairs(pairs(&[("folder_id", "x"), ("page", "2")]));
        assert_eq!(query, DriveGalleryQuery::default());
    }
}
