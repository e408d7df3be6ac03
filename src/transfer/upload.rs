//! File upload functionality

use log::{error, info};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::connection::FtpTransport;
use crate::error::{FtpError, Result};

/// Store the local file at `local_path` as `remote`
pub fn upload_file<T: FtpTransport + ?Sized>(
    transport: &mut T,
    remote: &str,
    local_path: &Path,
) -> Result<u64> {
    let fail = |source: Box<dyn std::error::Error + Send + Sync>| FtpError::Upload {
        remote: remote.to_string(),
        local: local_path.to_path_buf(),
        source,
    };

    let file = File::open(local_path).map_err(|e| {
        error!("Cannot open local file '{}': {}", local_path.display(), e);
        fail(e.into())
    })?;
    let file_size = file.metadata().map(|m| m.len()).unwrap_or(0);
    info!("Starting upload of '{}' ({} bytes) to '{}'", local_path.display(), file_size, remote);

    let mut reader = BufReader::new(file);
    transport.binary_mode().map_err(|e| fail(e.into()))?;
    let sent = transport.store(remote, &mut reader).map_err(|e| {
        error!("STOR '{}' failed: {}", remote, e);
        fail(e.into())
    })?;

    info!("Upload completed: {} ({} bytes)", remote, sent);
    Ok(sent)
}
