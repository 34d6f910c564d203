//! Google Drive API client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use urlencoding::encode;

use crate::domain::ports::{DriveClient, DriveFile};
use crate::error::DriveError;

/// Fields requested for each listed file
const FILE_FIELDS: &str = "files(id,name,thumbnailLink,webViewLink)";

/// Implementation of the Drive API client, authenticated with an API key
pub struct GoogleDriveClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl GoogleDriveClient {
    pub fn new(base_url: String, api_key: String, timeout: Duration) -> Result<Self, DriveError> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    fn files_url(&self, folder_id: &str) -> String {
        let query = format!("'{}' in parents and mimeType contains 'image'", folder_id);
        format!(
            "{}/drive/v3/files?q={}&fields={}&key={}",
            self.base_url,
            encode(&query),
            encode(FILE_FIELDS),
            encode(&self.api_key)
        )
    }
}

/// Response types from Drive API
#[derive(Deserialize)]
struct FileListResponse {
    files: Option<Vec<DriveFile>>,
}

#[async_trait]
impl DriveClient for GoogleDriveClient {
    async fn list_images(&self, folder_id: &str) -> Result<Vec<DriveFile>, DriveError> {
        let resp = self
            .http
            .get(self.files_url(folder_id))
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(DriveError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let listing: FileListResponse = resp
            .json()
            .await
            .map_err(|e| DriveError::Deserialization(e.to_string()))?;

        listing.files.ok_or(DriveError::MissingFiles)
    }
}
