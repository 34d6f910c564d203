//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod contact;
pub mod content;
pub mod drive_gallery;
pub mod gallery;

pub use contact::post_contact;
pub use content::{
    get_service, get_site, list_faq, list_reels, list_services, list_team, list_testimonials,
};
pub use drive_gallery::{get_drive_gallery, get_portfolio};
pub use gallery::{gallery_file, list_gallery, list_photos};
