//! Session commands module
//!
//! This module defines session command types and parsing functionality.

pub mod command;
pub mod help;
pub mod parser;

// Re-export the main types for easier importing
pub use command::SessionCommand;
pub use help::get_help_text;
pub use parser::parse_command;
