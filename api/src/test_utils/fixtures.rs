//! Test fixtures
//!
//! Factory functions for Drive listings and throwaway public roots on disk.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use crate::domain::ports::DriveFile;

/// Create a Drive file entry
pub fn test_drive_file(id: &str, name: &str, thumbnail: Option<&str>) -> DriveFile {
    DriveFile {
        id: id.to_string(),
        name: name.to_string(),
        thumbnail_link: thumbnail.map(str::to_string),
        web_view_link: Some(format!("https://drive.google.com/file/d/{}/view", id)),
    }
}

/// A temporary public root with a `gallery/` directory.
/// The directory is removed when the value is dropped.
pub struct TestGallery {
    dir: TempDir,
}

impl TestGallery {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("gallery")).unwrap();
        Self { dir }
    }

    /// Public root (parent of `gallery/`)
    pub fn public_dir(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    pub fn gallery_dir(&self) -> PathBuf {
        self.dir.path().join("gallery")
    }

    /// Add an empty subfolder
    pub fn with_dir(self, folder: &str) -> Self {
        fs::create_dir_all(self.gallery_dir().join(folder)).unwrap();
        self
    }

    /// Add a subfolder holding the given (empty) files
    pub fn with_files(self, folder: &str, files: &[&str]) -> Self {
        let folder_dir = self.gallery_dir().join(folder);
        fs::create_dir_all(&folder_dir).unwrap();
        for file in files {
            fs::write(folder_dir.join(file), b"img").unwrap();
        }
        self
    }

    /// Add files directly under `gallery/`
    pub fn with_root_files(self, files: &[&str]) -> Self {
        for file in files {
            fs::write(self.gallery_dir().join(file), b"img").unwrap();
        }
        self
    }
}

impl Default for TestGallery {
    fn default() -> Self {
        Self::new()
    }
}
