use crate::connection::effective_timeout;
use crate::error::{FtpError, Result};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Config file looked up when no path is given (any format `config` knows)
pub const DEFAULT_CONFIG_NAME: &str = "ftp-commons";

/// Environment variable naming an explicit config file
pub const CONFIG_PATH_VAR: &str = "FTP_COMMONS_CONFIG";

/// Prefix for environment overrides, e.g. `FTP_COMMONS__SERVER__HOST`
pub const ENV_PREFIX: &str = "FTP_COMMONS";

/// Configuration for the ftp-commons client
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Server configuration
    pub server: ServerConfig,

    /// Client configuration
    pub client: ClientSettings,
}

#[derive(Clone, Deserialize)]
pub struct ServerConfig {
    /// FTP server hostname or IP address, optionally with `:port`
    pub host: String,

    /// Friendly name for this server (for identification)
    pub host_name: Option<String>,

    /// FTP server port number, used when `host` carries none
    pub port: u16,

    /// Connection timeout in seconds
    pub timeout: u64,

    pub username: String,

    pub password: String,
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("host", &self.host)
            .field("host_name", &self.host_name)
            .field("port", &self.port)
            .field("timeout", &self.timeout)
            .field("username", &self.username)
            .field("password", &"[hidden]")
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClientSettings {
    /// Local directory that relative local paths are resolved against
    pub local_directory: String,
}

impl ClientConfig {
    /// Load configuration from an optional file plus environment overrides
    ///
    /// The file is `path` when given, else `$FTP_COMMONS_CONFIG`, else
    /// `ftp-commons.{toml,json,yaml,...}` in the working directory. A missing
    /// file is not an error; defaults fill every key.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_string(),
            None => env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_NAME.to_string()),
        };
        let defaults = Self::default();

        let settings = Config::builder()
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default("server.timeout", defaults.server.timeout as i64)?
            .set_default("server.username", defaults.server.username)?
            .set_default("server.password", defaults.server.password)?
            .set_default("client.local_directory", defaults.client.local_directory)?
            .add_source(File::with_name(&path).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        let config: ClientConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// `host:port` for the connection, keeping an explicit port in `host`
    pub fn address(&self) -> String {
        let host = self.server.host.trim();
        let has_port =
            (host.starts_with('[') && host.contains("]:")) || host.matches(':').count() == 1;
        if has_port {
            host.to_string()
        } else if host.contains(':') {
            format!("[{}]:{}", host, self.server.port)
        } else {
            format!("{}:{}", host, self.server.port)
        }
    }

    /// Connect timeout, capped at one hour
    pub fn timeout(&self) -> Duration {
        effective_timeout(Duration::from_secs(self.server.timeout))
    }

    pub fn local_directory(&self) -> &Path {
        Path::new(&self.client.local_directory)
    }

    /// Resolve a local path against the configured local directory
    pub fn local_path(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.local_directory().join(path)
        }
    }

    /// Get display name for the server (friendly name or host:port)
    pub fn display_name(&self) -> String {
        match &self.server.host_name {
            Some(name) => name.clone(),
            None => self.address(),
        }
    }

    /// Validate the basic configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            return Err(FtpError::Config("Host cannot be empty".to_string()));
        }

        if self.server.port == 0 {
            return Err(FtpError::Config("Port cannot be 0".to_string()));
        }

        if self.server.timeout == 0 {
            return Err(FtpError::Config("Timeout cannot be 0".to_string()));
        }

        if !self.local_directory().is_dir() {
            return Err(FtpError::Config(format!(
                "Local directory '{}' does not exist",
                self.client.local_directory
            )));
        }

        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                host_name: None,
                port: 21,
                timeout: 30,
                username: "anonymous".to_string(),
                password: String::new(),
            },
            client: ClientSettings {
                local_directory: ".".to_string(),
            },
        }
    }
}

impl std::fmt::Display for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "FTP Config - Server: {}, User: {}, Timeout: {}s, Local Dir: {}",
            self.display_name(),
            self.server.username,
            self.server.timeout,
            self.client.local_directory
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::local::test_support::scratch_dir;
    use std::fs;

    #[test]
    fn test_default_config_is_valid() {
        let config = ClientConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.address(), "127.0.0.1:21");
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = ClientConfig::default();
        config.server.host = " ".to_string();
        assert!(matches!(config.validate(), Err(FtpError::Config(_))));

        let mut config = ClientConfig::default();
        config.server.timeout = 0;
        assert!(config.validate().is_err());

        let mut config = ClientConfig::default();
        config.client.local_directory = "/definitely/not/here".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_timeout_is_capped() {
        let mut config = ClientConfig::default();
        config.server.timeout = 10 * 60 * 60;
        assert_eq!(config.timeout(), Duration::from_secs(60 * 60));
    }

    #[test]
    fn test_address_keeps_explicit_port() {
        let mut config = ClientConfig::default();
        config.server.host = "ftp.example.com:2121".to_string();
        assert_eq!(config.address(), "ftp.example.com:2121");

        config.server.host = "::1".to_string();
        assert_eq!(config.address(), "[::1]:21");

        config.server.host = "[::1]:2121".to_string();
        assert_eq!(config.address(), "[::1]:2121");
    }

    #[test]
    fn test_password_never_displayed() {
        let mut config = ClientConfig::default();
        config.server.password = "hunter2".to_string();
        assert!(!config.to_string().contains("hunter2"));
        assert!(!format!("{:?}", config).contains("hunter2"));
    }

    #[test]
    fn test_local_path_resolution() {
        let mut config = ClientConfig::default();
        config.client.local_directory = "/data".to_string();
        assert_eq!(config.local_path("a.csv"), PathBuf::from("/data/a.csv"));
        assert_eq!(config.local_path("/tmp/b.csv"), PathBuf::from("/tmp/b.csv"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = scratch_dir("config");
        let file = dir.join("client.toml");
        fs::write(
            &file,
            format!(
                "[server]\nhost = \"ftp.example.com\"\nport = 2121\nusername = \"increff\"\n\n[client]\nlocal_directory = \"{}\"\n",
                dir.display()
            ),
        )
        .unwrap();

        let config = ClientConfig::load(Some(file.to_str().unwrap())).unwrap();
        assert_eq!(config.server.host, "ftp.example.com");
        assert_eq!(config.server.port, 2121);
        assert_eq!(config.server.username, "increff");
        assert_eq!(config.server.timeout, 30);
        assert_eq!(config.address(), "ftp.example.com:2121");
        fs::remove_dir_all(dir).unwrap();
    }
}
