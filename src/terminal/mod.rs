//! Terminal module for ftp-commons
//!
//! This module handles all CLI display and user interaction functionality.

pub mod listing;
pub mod session;

// Re-export commonly used items
pub use listing::format_directory_listing;
pub use session::Terminal;
