//! Google Drive adapter
//!
//! Implementation of the Drive files-listing client.

pub mod client;

pub use client::GoogleDriveClient;
