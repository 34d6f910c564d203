//! Google Drive client port trait
//!
//! Defines the interface for listing images in an external Drive folder.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::DriveError;

/// Drive file representation, as returned by the files listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveFile {
    pub id: String,
    pub name: String,
    pub thumbnail_link: Option<String>,
    pub web_view_link: Option<String>,
}

/// Drive API client trait
#[async_trait]
pub trait DriveClient: Send + Sync {
    /// List the image-type files whose parent is `folder_id`
    async fn list_images(&self, folder_id: &str) -> Result<Vec<DriveFile>, DriveError>;
}
