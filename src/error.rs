//! Error types for the FTP wrapper
//!
//! Every remote call that the underlying library reports as failed is
//! translated into one of these variants. Messages keep a short static
//! description and carry the path plus the underlying cause.

use std::io;
use std::path::PathBuf;

use suppaftp::FtpError as ProtocolError;
use thiserror::Error;

/// Main error type for ftp-commons
#[derive(Debug, Error)]
pub enum FtpError {
    // Connection errors
    #[error("{0}")]
    ConnectionClosed(String),

    #[error("cannot connect to '{host}': {source}")]
    Connect {
        host: String,
        #[source]
        source: ProtocolError,
    },

    #[error("not connected: {0}")]
    NotConnected(&'static str),

    #[error("invalid host '{0}'")]
    InvalidHost(String),

    #[error("cannot log out: {0}")]
    Logout(#[source] ProtocolError),

    // Remote file errors
    #[error("cannot download file '{remote}' to '{}': {source}", .local.display())]
    Download {
        remote: String,
        local: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("cannot upload file '{}' to '{remote}': {source}", .local.display())]
    Upload {
        remote: String,
        local: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("file not found: '{path}': {source}")]
    RemoteNotFound {
        path: String,
        #[source]
        source: ProtocolError,
    },

    #[error("cannot list directory '{path}': {source}")]
    List {
        path: String,
        #[source]
        source: ProtocolError,
    },

    #[error("Cannot rename file '{from}' to '{to}': {source}")]
    Rename {
        from: String,
        to: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    // Local file errors
    #[error("file not found: '{}': {source}", .path.display())]
    LocalNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot move file '{}' to '{}': {source}", .from.display(), .to.display())]
    Move {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    // Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl From<config::ConfigError> for FtpError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, FtpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_context() {
        let err = FtpError::RemoteNotFound {
            path: "/out/a.csv".to_string(),
            source: ProtocolError::ConnectionError(io::Error::other("550 No such file")),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("file not found"));
        assert!(msg.contains("/out/a.csv"));
        assert!(msg.contains("550"));
    }

    #[test]
    fn test_move_error_exposes_source() {
        let err = FtpError::Move {
            from: PathBuf::from("a"),
            to: PathBuf::from("b"),
            source: io::Error::new(io::ErrorKind::AlreadyExists, "exists"),
        };
        assert!(err.to_string().starts_with("Cannot move file"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
