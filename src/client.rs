use log::{debug, info, warn};
use std::path::Path;
use std::time::Duration;

use suppaftp::FtpStream;

use crate::connection::{self, FtpTransport};
use crate::error::{FtpError, Result};
use crate::local;
use crate::transfer::{RemoteEntry, download_file, parse_listing, remote_child, upload_file};

/// Message used when the server refuses the login
pub const LOGIN_FAILED_MESSAGE: &str = "Unable to connect to FTP server...";

/// Client connection state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientState {
    Disconnected,
    Authenticated,
}

impl std::fmt::Display for ClientState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientState::Disconnected => write!(f, "disconnected"),
            ClientState::Authenticated => write!(f, "authenticated"),
        }
    }
}

/// FTP client holding at most one logged-in connection
pub struct Ftp<T: FtpTransport = FtpStream> {
    transport: Option<T>,
    host: Option<String>,
}

impl<T: FtpTransport> Default for Ftp<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl Ftp<FtpStream> {
    /// Connect to `host` (`host` or `host:port`), enter passive mode and log in
    pub fn login(
        &mut self,
        username: &str,
        password: &str,
        host: &str,
        timeout: Duration,
    ) -> Result<()> {
        let stream = connection::connect(host, timeout)?;
        self.login_with(stream, username, password)?;
        self.host = Some(host.to_string());
        Ok(())
    }
}

impl<T: FtpTransport> Ftp<T> {
    pub fn new() -> Self {
        Self {
            transport: None,
            host: None,
        }
    }

    /// Log in over an already connected transport
    ///
    /// Any connection held from a previous login is closed first. If the
    /// server does not accept the credentials the new transport is closed and
    /// [`FtpError::ConnectionClosed`] is returned.
    pub fn login_with(&mut self, mut transport: T, username: &str, password: &str) -> Result<()> {
        if self.transport.is_some() {
            debug!("Replacing existing connection");
            let _ = self.logout();
        }

        info!("Logging in as '{}'", username);
        if let Err(e) = transport.authenticate(username, password) {
            warn!("Login as '{}' rejected: {}", username, e);
            if let Err(e) = transport.close() {
                debug!("Closing rejected connection failed: {}", e);
            }
            self.host = None;
            return Err(FtpError::ConnectionClosed(LOGIN_FAILED_MESSAGE.to_string()));
        }

        self.transport = Some(transport);
        info!("Logged in as '{}'", username);
        Ok(())
    }

    /// Send QUIT and drop the connection; a no-op when not connected
    pub fn logout(&mut self) -> Result<()> {
        let Some(mut transport) = self.transport.take() else {
            debug!("Logout requested while disconnected");
            return Ok(());
        };
        self.host = None;

        transport.close().map_err(FtpError::Logout)?;
        info!("Logged out");
        Ok(())
    }

    pub fn state(&self) -> ClientState {
        if self.transport.is_some() {
            ClientState::Authenticated
        } else {
            ClientState::Disconnected
        }
    }

    pub fn is_connected(&self) -> bool {
        self.transport.is_some()
    }

    /// Host given to [`Ftp::login`], if any
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    fn transport(&mut self) -> Result<&mut T> {
        self.transport
            .as_mut()
            .ok_or(FtpError::NotConnected("login first"))
    }

    /// Download a single remote file to `save_path`
    pub fn download_remote_file(&mut self, remote_path: &str, save_path: &Path) -> Result<()> {
        let transport = self.transport()?;
        download_file(transport, remote_path, save_path)?;
        Ok(())
    }

    /// Download the plain files of `remote_dir` into `local_dir`
    ///
    /// `.` and `..` are skipped and so are subdirectories: only the files
    /// directly inside `remote_dir` are fetched.
    pub fn download_remote_directory(&mut self, remote_dir: &str, local_dir: &Path) -> Result<()> {
        let entries = self.list_remote_directory(remote_dir)?;
        if entries.is_empty() {
            debug!("Remote directory '{}' is empty", remote_dir);
            return Ok(());
        }

        let transport = self.transport()?;
        for entry in entries.iter().filter(|entry| !entry.is_directory()) {
            let remote = remote_child(remote_dir, &entry.name);
            download_file(&mut *transport, &remote, &local_dir.join(&entry.name))?;
        }
        Ok(())
    }

    /// Names of the non-directory entries of `remote_dir`, in server order
    pub fn get_remote_file_names(&mut self, remote_dir: &str) -> Result<Vec<String>> {
        let names = self
            .list_remote_directory(remote_dir)?
            .into_iter()
            .filter(|entry| !entry.is_directory())
            .map(|entry| entry.name)
            .collect();
        Ok(names)
    }

    /// Every entry of `remote_dir` except `.` and `..`
    pub fn list_remote_directory(&mut self, remote_dir: &str) -> Result<Vec<RemoteEntry>> {
        let transport = self.transport()?;
        let lines = transport.list(remote_dir).map_err(|e| FtpError::List {
            path: remote_dir.to_string(),
            source: e,
        })?;

        let entries: Vec<RemoteEntry> = parse_listing(&lines)
            .into_iter()
            .filter(|entry| !entry.is_dot_entry())
            .collect();
        debug!("Listed {} entries in '{}'", entries.len(), remote_dir);
        Ok(entries)
    }

    /// Upload `local_path` to `remote_path`
    pub fn put_remote_file(&mut self, remote_path: &str, local_path: &Path) -> Result<()> {
        let transport = self.transport()?;
        upload_file(transport, remote_path, local_path)?;
        Ok(())
    }

    pub fn delete_remote_file(&mut self, remote_path: &str) -> Result<()> {
        let transport = self.transport()?;
        transport
            .delete(remote_path)
            .map_err(|e| FtpError::RemoteNotFound {
                path: remote_path.to_string(),
                source: e,
            })?;
        info!("Deleted remote file '{}'", remote_path);
        Ok(())
    }

    pub fn rename_remote_file(&mut self, old_path: &str, new_path: &str) -> Result<()> {
        let transport = self.transport()?;
        transport
            .rename(old_path, new_path)
            .map_err(|e| FtpError::Rename {
                from: old_path.to_string(),
                to: new_path.to_string(),
                source: e.into(),
            })?;
        info!("Renamed remote file '{}' to '{}'", old_path, new_path);
        Ok(())
    }

    pub fn delete_local_file(&self, path: &Path) -> Result<()> {
        local::delete_local_file(path)
    }

    pub fn rename_local_file(&self, old_path: &Path, new_path: &Path) -> Result<()> {
        local::rename_local_file(old_path, new_path)
    }

    pub fn move_local_file(&self, old_path: &Path, new_path: &Path) -> Result<()> {
        local::move_local_file(old_path, new_path)
    }
}

impl<T: FtpTransport> Drop for Ftp<T> {
    fn drop(&mut self) {
        if let Some(mut transport) = self.transport.take() {
            if let Err(e) = transport.close() {
                debug!("QUIT on drop failed: {}", e);
            }
        }
    }
}
