//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use crate::domain::ports::{DriveClient, DriveFile};
use crate::error::DriveError;

// ============================================================================
// Mock Drive Client
// ============================================================================

#[derive(Default)]
pub struct MockDriveClient {
    folders: Arc<RwLock<HashMap<String, Vec<DriveFile>>>>,
    failing_folders: Arc<RwLock<HashSet<String>>>,
    fail_all: bool,
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockDriveClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a folder listing
    pub fn with_files(self, folder_id: &str, files: Vec<DriveFile>) -> Self {
        self.folders
            .write()
            .unwrap()
            .insert(folder_id.to_string(), files);
        self
    }

    /// Make every lookup fail
    pub fn failing(mut self) -> Self {
        self.fail_all = true;
        self
    }

    /// Make lookups for one folder fail
    pub fn failing_for(self, folder_id: &str) -> Self {
        self.failing_folders
            .write()
            .unwrap()
            .insert(folder_id.to_string());
        self
    }

    /// Folder ids requested so far, in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl DriveClient for MockDriveClient {
    async fn list_images(&self, folder_id: &str) -> Result<Vec<DriveFile>, DriveError> {
        self.calls.write().unwrap().push(folder_id.to_string());

        if self.fail_all || self.failing_folders.read().unwrap().contains(folder_id) {
            return Err(DriveError::Api {
                status: 500,
                message: "mock failure".to_string(),
            });
        }

        Ok(self
            .folders
            .read()
            .unwrap()
            .get(folder_id)
            .cloned()
            .unwrap_or_default())
    }
}
