//! Local filesystem operations
//!
//! Delete, rename and move files on the local side of a transfer.

use log::{debug, info, warn};
use std::fs;
use std::io;
use std::path::Path;

use crate::error::{FtpError, Result};

/// Delete a local file
pub fn delete_local_file(path: &Path) -> Result<()> {
    fs::remove_file(path).map_err(|e| {
        warn!("Cannot delete local file '{}': {}", path.display(), e);
        FtpError::LocalNotFound {
            path: path.to_path_buf(),
            source: e,
        }
    })?;
    info!("Deleted local file '{}'", path.display());
    Ok(())
}

/// Rename a local file, replacing `new_path` if the platform allows it
pub fn rename_local_file(old_path: &Path, new_path: &Path) -> Result<()> {
    fs::rename(old_path, new_path).map_err(|e| {
        warn!(
            "Cannot rename local file '{}' to '{}': {}",
            old_path.display(),
            new_path.display(),
            e
        );
        FtpError::Rename {
            from: old_path.display().to_string(),
            to: new_path.display().to_string(),
            source: e.into(),
        }
    })?;
    info!(
        "Renamed local file '{}' to '{}'",
        old_path.display(),
        new_path.display()
    );
    Ok(())
}

/// Move a local file. Fails when `new_path` already exists; falls back to
/// copy + remove when the rename crosses filesystems.
pub fn move_local_file(old_path: &Path, new_path: &Path) -> Result<()> {
    let fail = |source: io::Error| FtpError::Move {
        from: old_path.to_path_buf(),
        to: new_path.to_path_buf(),
        source,
    };

    if !old_path.exists() {
        return Err(fail(io::Error::new(
            io::ErrorKind::NotFound,
            "source does not exist",
        )));
    }
    if new_path.exists() {
        return Err(fail(io::Error::new(
            io::ErrorKind::AlreadyExists,
            "target already exists",
        )));
    }

    match fs::rename(old_path, new_path) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            debug!(
                "Rename across devices, copying '{}' to '{}'",
                old_path.display(),
                new_path.display()
            );
            fs::copy(old_path, new_path).map_err(fail)?;
            fs::remove_file(old_path).map_err(fail)?;
        }
        Err(e) => return Err(fail(e)),
    }

    info!(
        "Moved local file '{}' to '{}'",
        old_path.display(),
        new_path.display()
    );
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::test_support::scratch_dir;
    use super::*;

    #[test]
    fn test_delete_local_file() {
        let dir = scratch_dir("delete");
        let file = dir.join("a.txt");
        fs::write(&file, b"data").unwrap();

        delete_local_file(&file).unwrap();
        assert!(!file.exists());

        let err = delete_local_file(&file).unwrap_err();
        assert!(matches!(err, FtpError::LocalNotFound { .. }));
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_rename_local_file() {
        let dir = scratch_dir("rename");
        let old = dir.join("old.txt");
        let new = dir.join("new.txt");
        fs::write(&old, b"data").unwrap();

        rename_local_file(&old, &new).unwrap();
        assert!(!old.exists());
        assert_eq!(fs::read(&new).unwrap(), b"data");

        let err = rename_local_file(&old, &new).unwrap_err();
        assert!(err.to_string().starts_with("Cannot rename file"));
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_move_local_file() {
        let dir = scratch_dir("move");
        fs::create_dir_all(dir.join("done")).unwrap();
        let old = dir.join("in.csv");
        let new = dir.join("done").join("in.csv");
        fs::write(&old, b"1,2,3").unwrap();

        move_local_file(&old, &new).unwrap();
        assert!(!old.exists());
        assert_eq!(fs::read(&new).unwrap(), b"1,2,3");
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_move_refuses_existing_target() {
        let dir = scratch_dir("move-exists");
        let old = dir.join("a");
        let new = dir.join("b");
        fs::write(&old, b"a").unwrap();
        fs::write(&new, b"b").unwrap();

        let err = move_local_file(&old, &new).unwrap_err();
        assert!(matches!(err, FtpError::Move { .. }));
        assert!(old.exists());
        assert_eq!(fs::read(&new).unwrap(), b"b");
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_move_missing_source() {
        let dir = scratch_dir("move-missing");
        let err = move_local_file(&dir.join("nope"), &dir.join("b")).unwrap_err();
        assert!(err.to_string().starts_with("Cannot move file"));
        fs::remove_dir_all(dir).unwrap();
    }
}
