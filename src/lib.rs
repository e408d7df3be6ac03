//! ftp-commons: a small blocking FTP client
//!
//! [`Ftp`] wraps a single `suppaftp` connection and exposes login/logout,
//! upload, download, listing, rename and delete, plus a few local file
//! helpers. Failures reported by the library become typed [`FtpError`]s.

pub mod client;
pub mod commands;
pub mod config;
pub mod connection;
pub mod error;
pub mod local;
pub mod terminal;
pub mod transfer;

pub use client::{ClientState, Ftp};
pub use crate::config::ClientConfig;
pub use connection::FtpTransport;
pub use error::{FtpError, Result};
pub use transfer::{EntryKind, RemoteEntry};
