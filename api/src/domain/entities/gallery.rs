//! Gallery domain entities
//!
//! Display records built fresh per request. Nothing here is persisted.

use serde::Serialize;

/// Image extensions accepted by the directory scanner, dot included.
/// Only all-lowercase and all-uppercase spellings qualify.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    ".jpg", ".jpeg", ".png", ".gif", ".webp", ".JPG", ".JPEG", ".PNG", ".GIF", ".WEBP",
];

/// One subfolder of the public gallery and its ordered image URLs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryFolder {
    pub folder_name: String,
    pub images: Vec<String>,
}

/// A structured image record shown in the portfolio grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalleryImage {
    pub id: String,
    pub src: String,
    pub thumbnail: String,
    pub title: String,
}

/// A numbered showcase photo resolved to a concrete file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowcasePhoto {
    pub id: u32,
    pub src: String,
    pub title: String,
}

/// Whether a file name carries one of the accepted image extensions
pub fn has_image_extension(file_name: &str) -> bool {
    match file_name.rfind('.') {
        Some(idx) => IMAGE_EXTENSIONS.contains(&&file_name[idx..]),
        None => false,
    }
}
