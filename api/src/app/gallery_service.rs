//! Gallery service
//!
//! Scans the public gallery directory and resolves extensionless image paths.
//! Every call reads the filesystem afresh; nothing is cached between requests.

use std::io;
use std::path::PathBuf;
use std::sync::OnceLock;

use regex::Regex;

use super::ordering::{alphabetical_cmp, natural_cmp};
use crate::domain::entities::gallery::{has_image_extension, GalleryFolder, ShowcasePhoto};

/// Extensions tried, in order, for an image path written without one
pub const PHOTO_CANDIDATE_EXTENSIONS: &[&str] =
    &["jpg", "JPG", "jpeg", "JPEG", "png", "PNG", "webp", "WEBP"];

/// Number of numbered photos the home page showcases
pub const DEFAULT_SHOWCASE_COUNT: u32 = 74;

/// URL prefix the gallery directory is served under
const GALLERY_URL_PREFIX: &str = "/gallery";

fn extension_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\.[a-zA-Z0-9]+$").expect("valid extension pattern"))
}

/// Whether a gallery path already names its extension
pub fn has_extension(name: &str) -> bool {
    extension_pattern().is_match(name)
}

/// Service for reading the local gallery
pub struct GalleryService {
    root: PathBuf,
}

impl GalleryService {
    /// `root` is the gallery directory itself (`<public>/gallery`)
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// List every subfolder holding at least one image.
    ///
    /// Folders come back in alphabetical order; images within a folder in
    /// natural order. Entries at the root that are not directories are ignored.
    pub async fn scan(&self) -> io::Result<Vec<GalleryFolder>> {
        let mut entries = tokio::fs::read_dir(&self.root).await?;
        let mut folders = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            let Some(folder_name) = entry.file_name().to_str().map(str::to_string) else {
                tracing::debug!("Skipping non UTF-8 gallery entry {:?}", entry.path());
                continue;
            };

            // Follow symlinks, the way a plain stat does
            let metadata = tokio::fs::metadata(entry.path()).await?;
            if !metadata.is_dir() {
                continue;
            }

            let images = self.folder_images(&folder_name).await?;
            if images.is_empty() {
                tracing::debug!("Gallery folder {} has no images", folder_name);
                continue;
            }

            folders.push(GalleryFolder {
                folder_name,
                images,
            });
        }

        folders.sort_by(|a, b| alphabetical_cmp(&a.folder_name, &b.folder_name));
        Ok(folders)
    }

    async fn folder_images(&self, folder_name: &str) -> io::Result<Vec<String>> {
        let mut entries = tokio::fs::read_dir(self.root.join(folder_name)).await?;
        let mut files = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            if let Some(name) = entry.file_name().to_str() {
                if has_image_extension(name) {
                    files.push(name.to_string());
                }
            }
        }

        files.sort_by(|a, b| natural_cmp(a, b));

        Ok(files
            .into_iter()
            .map(|file| format!("{}/{}/{}", GALLERY_URL_PREFIX, folder_name, file))
            .collect())
    }

    /// Resolve an extensionless gallery file name (e.g. `photo12`) to the URL
    /// of the first candidate extension that exists on disk.
    pub async fn resolve_photo(&self, stem: &str) -> Option<String> {
        if stem.is_empty() || stem.contains(['/', '\\']) || stem.starts_with('.') {
            return None;
        }

        for ext in PHOTO_CANDIDATE_EXTENSIONS {
            let file_name = format!("{}.{}", stem, ext);
            match tokio::fs::metadata(self.root.join(&file_name)).await {
                Ok(metadata) if metadata.is_file() => {
                    return Some(format!("{}/{}", GALLERY_URL_PREFIX, file_name));
                }
                _ => continue,
            }
        }

        None
    }

    /// The numbered showcase photos `photo1..=photo{count}` that exist on disk
    pub async fn showcase_photos(&self, count: u32) -> Vec<ShowcasePhoto> {
        let mut photos = Vec::new();

        for n in 1..=count {
            match self.resolve_photo(&format!("photo{}", n)).await {
                Some(src) => photos.push(ShowcasePhoto {
                    id: n,
                    src,
                    title: format!("Photo {}", n),
                }),
                None => tracing::debug!("Showcase photo {} not found", n),
            }
        }

        photos
    }
}
