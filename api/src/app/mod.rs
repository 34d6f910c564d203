//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and the filesystem.

pub mod catalog;
pub mod contact;
pub mod drive_gallery_service;
pub mod gallery_service;
pub mod ordering;

pub use contact::ContactDetails;
pub use drive_gallery_service::DriveGalleryService;
pub use gallery_service::GalleryService;
