//! Transport seam between the wrapper and the FTP library
//!
//! `FtpTransport` names the handful of library calls the client delegates
//! to. The production implementation is `suppaftp::FtpStream`.

use log::{debug, info};
use std::io::{self, Read, Write};
use std::net::{IpAddr, SocketAddr, ToSocketAddrs};
use std::time::Duration;

use suppaftp::types::FileType;
use suppaftp::{FtpError as ProtocolError, FtpResult, FtpStream, Mode};

use crate::error::{FtpError, Result};

/// Default FTP control port
pub const DEFAULT_FTP_PORT: u16 = 21;

/// Upper bound for connect timeouts (1 hour)
pub const MAX_TIMEOUT: Duration = Duration::from_secs(60 * 60);

/// Library calls the FTP client is built on
pub trait FtpTransport {
    /// USER/PASS
    fn authenticate(&mut self, username: &str, password: &str) -> FtpResult<()>;

    /// TYPE I
    fn binary_mode(&mut self) -> FtpResult<()>;

    /// RETR `path`, streaming the file body into `sink`
    fn retrieve(&mut self, path: &str, sink: &mut dyn Write) -> FtpResult<u64>;

    /// STOR `path`, reading the file body from `source`
    fn store(&mut self, path: &str, source: &mut dyn Read) -> FtpResult<u64>;

    /// LIST `path`, one raw line per entry
    fn list(&mut self, path: &str) -> FtpResult<Vec<String>>;

    /// DELE
    fn delete(&mut self, path: &str) -> FtpResult<()>;

    /// RNFR/RNTO
    fn rename(&mut self, from: &str, to: &str) -> FtpResult<()>;

    /// QUIT
    fn close(&mut self) -> FtpResult<()>;
}

impl FtpTransport for FtpStream {
    fn authenticate(&mut self, username: &str, password: &str) -> FtpResult<()> {
        self.login(username, password)
    }

    fn binary_mode(&mut self) -> FtpResult<()> {
        self.transfer_type(FileType::Binary)
    }

    fn retrieve(&mut self, path: &str, sink: &mut dyn Write) -> FtpResult<u64> {
        self.retr(path, |reader| {
            io::copy(reader, &mut *sink).map_err(ProtocolError::ConnectionError)
        })
    }

    fn store(&mut self, path: &str, mut source: &mut dyn Read) -> FtpResult<u64> {
        self.put_file(path, &mut source)
    }

    fn list(&mut self, path: &str) -> FtpResult<Vec<String>> {
        FtpStream::list(self, Some(path))
    }

    fn delete(&mut self, path: &str) -> FtpResult<()> {
        self.rm(path)
    }

    fn rename(&mut self, from: &str, to: &str) -> FtpResult<()> {
        FtpStream::rename(self, from, to)
    }

    fn close(&mut self) -> FtpResult<()> {
        self.quit()
    }
}

/// Resolve `host` or `host:port` into a socket address, defaulting to port 21
pub fn resolve_host(host: &str) -> Result<SocketAddr> {
    let host = host.trim();
    if host.is_empty() {
        return Err(FtpError::InvalidHost(host.to_string()));
    }

    if let Ok(addr) = host.parse::<SocketAddr>() {
        return Ok(addr);
    }
    let bare = host.trim_start_matches('[').trim_end_matches(']');
    if let Ok(ip) = bare.parse::<IpAddr>() {
        return Ok(SocketAddr::new(ip, DEFAULT_FTP_PORT));
    }

    let target = if has_explicit_port(host) {
        host.to_string()
    } else {
        format!("{host}:{DEFAULT_FTP_PORT}")
    };
    target
        .to_socket_addrs()
        .map_err(|_| FtpError::InvalidHost(host.to_string()))?
        .next()
        .ok_or_else(|| FtpError::InvalidHost(host.to_string()))
}

/// `name:port` with a numeric port and exactly one colon (bare IPv6 has many)
fn has_explicit_port(host: &str) -> bool {
    match host.rsplit_once(':') {
        Some((name, port)) => {
            !name.is_empty() && !name.contains(':') && port.parse::<u16>().is_ok()
        }
        None => false,
    }
}

/// Cap a requested timeout at [`MAX_TIMEOUT`]
pub fn effective_timeout(requested: Duration) -> Duration {
    requested.min(MAX_TIMEOUT)
}

/// Open a passive-mode control connection
pub fn connect(host: &str, timeout: Duration) -> Result<FtpStream> {
    let addr = resolve_host(host)?;
    let timeout = effective_timeout(timeout);
    info!("Connecting to FTP server at {} (timeout {:?})", addr, timeout);

    let mut stream = FtpStream::connect_timeout(addr, timeout).map_err(|e| FtpError::Connect {
        host: host.to_string(),
        source: e,
    })?;
    stream.set_mode(Mode::Passive);

    if let Some(welcome) = stream.get_welcome_msg() {
        debug!("Server greeting: {}", welcome.trim());
    }
    Ok(stream)
}
