//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod drive;

pub use drive::GoogleDriveClient;
