//! Drive gallery service
//!
//! Resolves portfolio categories to Google Drive folders and reshapes Drive
//! listings into gallery images. Any Drive failure collapses to an empty list,
//! which the portfolio page reads as "show the embedded folder view instead".

use std::sync::{Arc, OnceLock};

use futures::future::join_all;
use regex::Regex;
use serde::Serialize;

use crate::domain::entities::category::Category;
use crate::domain::entities::gallery::GalleryImage;
use crate::domain::ports::{DriveClient, DriveFile};
use crate::error::AppError;

/// Full-size image URL for a Drive file
pub fn drive_image_url(file_id: &str) -> String {
    format!("https://drive.google.com/uc?export=view&id={}", file_id)
}

/// Thumbnail URL used when Drive does not return a thumbnail link
pub fn drive_thumbnail_url(file_id: &str) -> String {
    format!("https://drive.google.com/thumbnail?id={}&sz=w1000", file_id)
}

fn trailing_extension() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\.[^/.]+$").expect("valid extension pattern"))
}

/// File name with its last extension removed
pub fn title_from_name(name: &str) -> String {
    trailing_extension().replace(name, "").into_owned()
}

impl From<DriveFile> for GalleryImage {
    fn from(file: DriveFile) -> Self {
        let thumbnail = file
            .thumbnail_link
            .filter(|link| !link.is_empty())
            .unwrap_or_else(|| drive_thumbnail_url(&file.id));

        GalleryImage {
            src: drive_image_url(&file.id),
            thumbnail,
            title: title_from_name(&file.name),
            id: file.id,
        }
    }
}

/// One portfolio category as rendered by the portfolio page
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioCategory {
    pub id: Category,
    pub title: &'static str,
    pub folder_id: &'static str,
    pub images: Vec<GalleryImage>,
    pub use_embedded: bool,
    pub embed_url: String,
}

/// Service for the external gallery proxy
pub struct DriveGalleryService<DC>
where
    DC: DriveClient,
{
    /// `None` when no API key is configured
    drive: Option<Arc<DC>>,
}

impl<DC> DriveGalleryService<DC>
where
    DC: DriveClient,
{
    pub fn new(drive: Option<Arc<DC>>) -> Self {
        Self { drive }
    }

    /// Pick the Drive folder for a request. An explicit folder id wins over a
    /// category; empty parameters count as absent.
    pub fn resolve_folder(
        &self,
        folder_id: Option<&str>,
        category: Option<&str>,
    ) -> Result<String, AppError> {
        let folder_id = folder_id.filter(|id| !id.is_empty());
        let category = category.filter(|c| !c.is_empty());

        if folder_id.is_none() && category.is_none() {
            return Err(AppError::BadRequest(
                "folderId or category is required".to_string(),
            ));
        }

        if let Some(id) = folder_id {
            return Ok(id.to_string());
        }

        category
            .and_then(|c| c.parse::<Category>().ok())
            .map(|c| c.folder_id().to_string())
            .ok_or_else(|| AppError::BadRequest("Invalid folder ID or category".to_string()))
    }

    /// List a folder's images. Returns an empty list when Drive is not
    /// configured or the lookup fails for any reason.
    pub async fn list_images(&self, folder_id: &str) -> Vec<GalleryImage> {
        let Some(drive) = &self.drive else {
            tracing::debug!("Drive API key not configured, falling back for {}", folder_id);
            return Vec::new();
        };

        match drive.list_images(folder_id).await {
            Ok(files) => files.into_iter().map(GalleryImage::from).collect(),
            Err(e) => {
                tracing::error!("Google Drive API error for folder {}: {}", folder_id, e);
                Vec::new()
            }
        }
    }

    /// Look up every category concurrently. Each category falls back on its
    /// own; the result keeps the fixed category order.
    pub async fn portfolio(&self) -> Vec<PortfolioCategory> {
        let lookups = Category::ALL.into_iter().map(|category| async move {
            let images = self.list_images(category.folder_id()).await;
            PortfolioCategory {
                id: category,
                title: category.title(),
                folder_id: category.folder_id(),
                use_embedded: images.is_empty(),
                embed_url: category.embed_url(),
                images,
            }
        });

        join_all(lookups).await
    }
}
