//! File download functionality

use log::{debug, error, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use crate::connection::FtpTransport;
use crate::error::{FtpError, Result};

/// Retrieve `remote` into a freshly created (or truncated) local file
pub fn download_file<T: FtpTransport + ?Sized>(
    transport: &mut T,
    remote: &str,
    local_path: &Path,
) -> Result<u64> {
    let fail = |source: Box<dyn std::error::Error + Send + Sync>| FtpError::Download {
        remote: remote.to_string(),
        local: local_path.to_path_buf(),
        source,
    };

    info!("Starting download of '{}' to '{}'", remote, local_path.display());
    let started = Instant::now();

    let file = File::create(local_path).map_err(|e| {
        error!("Cannot create local file '{}': {}", local_path.display(), e);
        fail(e.into())
    })?;
    let mut writer = BufWriter::new(file);

    transport.binary_mode().map_err(|e| fail(e.into()))?;
    let received = transport.retrieve(remote, &mut writer).map_err(|e| {
        error!("RETR '{}' failed: {}", remote, e);
        fail(e.into())
    })?;

    // Ensure all data is written to disk
    writer.flush().map_err(|e| fail(e.into()))?;

    debug!("Download of '{}' took {:?}", remote, started.elapsed());
    info!("Download completed: {} ({} bytes)", remote, received);
    Ok(received)
}

/// Join a remote directory and an entry name with a single `/`
pub fn remote_child(dir: &str, name: &str) -> String {
    if dir.is_empty() {
        name.to_string()
    } else if dir.ends_with('/') {
        format!("{dir}{name}")
    } else {
        format!("{dir}/{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_child() {
        assert_eq!(remote_child("/out/", "a.csv"), "/out/a.csv");
        assert_eq!(remote_child("/out", "a.csv"), "/out/a.csv");
        assert_eq!(remote_child("", "a.csv"), "a.csv");
        assert_eq!(remote_child("/", "a.csv"), "/a.csv");
    }
}
