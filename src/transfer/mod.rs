//! File transfer module for ftp-commons

pub mod download;
pub mod listing;
pub mod upload;

// Re-export main functions
pub use download::{download_file, remote_child};
pub use listing::{EntryKind, RemoteEntry, is_dot_entry, parse_listing};
pub use upload::upload_file;
