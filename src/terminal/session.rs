//! Interactive session
//!
//! Reads commands line by line, runs them against the client and reports
//! the outcome.

use log::{debug, error, info};
use std::io::{self, BufRead, Write};

use suppaftp::FtpStream;

use crate::client::Ftp;
use crate::commands::{SessionCommand, get_help_text, parse_command};
use crate::config::ClientConfig;
use crate::connection::FtpTransport;
use crate::error::{FtpError, Result};
use crate::terminal::listing::format_directory_listing;

/// Terminal handler for interactive FTP sessions
pub struct Terminal<T: FtpTransport = FtpStream> {
    client: Ftp<T>,
    config: ClientConfig,
}

impl<T: FtpTransport> Terminal<T> {
    /// Create a new terminal with the given client and config
    pub fn new(client: Ftp<T>, config: ClientConfig) -> Self {
        info!(
            "Creating terminal session for server: {}",
            config.display_name()
        );

        Self { client, config }
    }

    /// Run the session on stdin/stdout
    pub fn run_interactive(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run(stdin.lock(), stdout.lock())
    }

    /// Run the session until QUIT or end of input, then log out
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut out: W) -> Result<()> {
        writeln!(out, "ftp-commons - Interactive Session")?;
        writeln!(out, "Connected to: {}", self.config.display_name())?;
        writeln!(out, "Type 'HELP' for available commands or 'QUIT' to exit")?;
        writeln!(out)?;

        loop {
            // Show prompt with current state
            write!(out, "ftp ({})> ", self.client.state())?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                break; // EOF
            }
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            debug!("User entered command: {}", line);
            let command = parse_command(line);
            if command == SessionCommand::Quit {
                writeln!(out, "Logging out...")?;
                break;
            }

            match self.execute(&command) {
                Ok(message) => writeln!(out, "{}", message)?,
                Err(e) => {
                    error!("Command '{}' failed: {}", command, e);
                    writeln!(out, "Error: {}", e)?;
                }
            }
        }

        if self.client.is_connected() {
            self.client.logout()?;
        }
        Ok(())
    }

    /// Execute one command and return the text to show
    pub fn execute(&mut self, command: &SessionCommand) -> Result<String> {
        if command.needs_connection() && !self.client.is_connected() {
            return Err(FtpError::NotConnected("session is logged out"));
        }

        match command {
            SessionCommand::List(dir) => {
                let entries = self.client.list_remote_directory(dir)?;
                Ok(format_directory_listing(&entries).trim_end().to_string())
            }
            SessionCommand::Names(dir) => {
                let names = self.client.get_remote_file_names(dir)?;
                if names.is_empty() {
                    Ok("No files.".to_string())
                } else {
                    Ok(names.join("\n"))
                }
            }
            SessionCommand::Get { remote, local } => {
                let local = self.config.local_path(local);
                self.client.download_remote_file(remote, &local)?;
                Ok(format!("Downloaded {} to {}", remote, local.display()))
            }
            SessionCommand::GetDir { remote, local } => {
                let local = self.config.local_path(local);
                self.client.download_remote_directory(remote, &local)?;
                Ok(format!("Downloaded files of {} to {}", remote, local.display()))
            }
            SessionCommand::Put { local, remote } => {
                let local = self.config.local_path(local);
                self.client.put_remote_file(remote, &local)?;
                Ok(format!("Uploaded {} to {}", local.display(), remote))
            }
            SessionCommand::Delete(path) => {
                self.client.delete_remote_file(path)?;
                Ok(format!("Deleted {}", path))
            }
            SessionCommand::Rename { from, to } => {
                self.client.rename_remote_file(from, to)?;
                Ok(format!("Renamed {} to {}", from, to))
            }
            SessionCommand::LocalDelete(path) => {
                let path = self.config.local_path(path);
                self.client.delete_local_file(&path)?;
                Ok(format!("Deleted {}", path.display()))
            }
            SessionCommand::LocalRename { from, to } => {
                let (from, to) = (self.config.local_path(from), self.config.local_path(to));
                self.client.rename_local_file(&from, &to)?;
                Ok(format!("Renamed {} to {}", from.display(), to.display()))
            }
            SessionCommand::LocalMove { from, to } => {
                let (from, to) = (self.config.local_path(from), self.config.local_path(to));
                self.client.move_local_file(&from, &to)?;
                Ok(format!("Moved {} to {}", from.display(), to.display()))
            }
            SessionCommand::Help => Ok(format!(
                "{}\n\nCurrent server: {}\nCurrent state: {}\nLocal directory: {}",
                get_help_text(),
                self.config.display_name(),
                self.client.state(),
                self.config.client.local_directory
            )),
            SessionCommand::Quit => Ok("Bye.".to_string()),
            SessionCommand::Unknown(msg) => Ok(format!("Error: {}", msg)),
        }
    }

    pub fn client(&self) -> &Ftp<T> {
        &self.client
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::local::test_support::scratch_dir;
    use std::fs;
    use std::io::{Cursor, Read};
    use suppaftp::FtpResult;

    /// Server stub with a single directory holding one file
    struct StubTransport;

    impl FtpTransport for StubTransport {
        fn authenticate(&mut self, _username: &str, _password: &str) -> FtpResult<()> {
            Ok(())
        }

        fn binary_mode(&mut self) -> FtpResult<()> {
            Ok(())
        }

        fn retrieve(&mut self, _path: &str, sink: &mut dyn Write) -> FtpResult<u64> {
            sink.write_all(b"hello")
                .map_err(suppaftp::FtpError::ConnectionError)?;
            Ok(5)
        }

        fn store(&mut self, _path: &str, source: &mut dyn Read) -> FtpResult<u64> {
            let mut sink = Vec::new();
            let n = source
                .read_to_end(&mut sink)
                .map_err(suppaftp::FtpError::ConnectionError)?;
            Ok(n as u64)
        }

        fn list(&mut self, _path: &str) -> FtpResult<Vec<String>> {
            Ok(vec![
                "-rw-r--r-- 1 ftp ftp 5 Jan 10 12:00 hello.txt".to_string(),
            ])
        }

        fn delete(&mut self, _path: &str) -> FtpResult<()> {
            Ok(())
        }

        fn rename(&mut self, _from: &str, _to: &str) -> FtpResult<()> {
            Ok(())
        }

        fn close(&mut self) -> FtpResult<()> {
            Ok(())
        }
    }

    fn terminal(local_dir: &std::path::Path) -> Terminal<StubTransport> {
        let mut config = ClientConfig::default();
        config.client.local_directory = local_dir.display().to_string();
        let mut client = Ftp::new();
        client.login_with(StubTransport, "anonymous", "").unwrap();
        Terminal::new(client, config)
    }

    #[test]
    fn test_session_runs_until_quit() {
        let dir = scratch_dir("session");
        let mut term = terminal(&dir);

        let input = Cursor::new("names\nget hello.txt copy.txt\nbogus\nquit\nls\n");
        let mut out = Vec::new();
        term.run(input, &mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("hello.txt"));
        assert!(out.contains("Downloaded hello.txt"));
        assert!(out.contains("Unknown command: BOGUS"));
        assert!(out.contains("Logging out..."));
        // Nothing after QUIT is executed
        assert!(!out.contains("Name "));

        assert_eq!(fs::read(dir.join("copy.txt")).unwrap(), b"hello");
        assert!(!term.client().is_connected());
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_local_commands_resolve_against_local_directory() {
        let dir = scratch_dir("session-local");
        fs::write(dir.join("a.csv"), b"x").unwrap();
        let mut term = terminal(&dir);

        term.execute(&parse_command("lmv a.csv b.csv")).unwrap();
        assert!(dir.join("b.csv").exists());

        term.execute(&parse_command("ldel b.csv")).unwrap();
        assert!(!dir.join("b.csv").exists());

        assert!(term.execute(&parse_command("ldel b.csv")).is_err());
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_help_shows_state() {
        let dir = scratch_dir("session-help");
        let mut term = terminal(&dir);
        let help = term.execute(&SessionCommand::Help).unwrap();
        assert!(help.contains("Available commands"));
        assert!(help.contains("authenticated"));
        fs::remove_dir_all(dir).unwrap();
    }
}
