//! Connection management for ftp-commons
//!
//! Opens the control connection and defines the transport seam the client
//! delegates to.

pub mod transport;

// Re-export main types
pub use transport::{FtpTransport, MAX_TIMEOUT, connect, effective_timeout, resolve_host};
