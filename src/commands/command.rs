//! Session command definitions

/// Commands understood by the interactive session
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    /// LS - List remote directory entries
    List(String),

    /// NAMES - List remote file names only
    Names(String),

    /// GET - Download one remote file
    Get { remote: String, local: String },

    /// GETDIR - Download the files of a remote directory
    GetDir { remote: String, local: String },

    /// PUT - Upload a local file
    Put { local: String, remote: String },

    /// DEL - Delete a remote file
    Delete(String),

    /// REN - Rename a remote file
    Rename { from: String, to: String },

    /// LDEL - Delete a local file
    LocalDelete(String),

    /// LREN - Rename a local file
    LocalRename { from: String, to: String },

    /// LMV - Move a local file
    LocalMove { from: String, to: String },

    /// HELP - Show available commands (client-side only)
    Help,

    /// QUIT - Log out and exit
    Quit,

    /// Unknown or malformed command
    Unknown(String),
}

impl SessionCommand {
    /// Whether the command talks to the server
    pub fn needs_connection(&self) -> bool {
        matches!(
            self,
            SessionCommand::List(_)
                | SessionCommand::Names(_)
                | SessionCommand::Get { .. }
                | SessionCommand::GetDir { .. }
                | SessionCommand::Put { .. }
                | SessionCommand::Delete(_)
                | SessionCommand::Rename { .. }
        )
    }
}

impl std::fmt::Display for SessionCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionCommand::List(dir) => write!(f, "LS {dir}"),
            SessionCommand::Names(dir) => write!(f, "NAMES {dir}"),
            SessionCommand::Get { remote, local } => write!(f, "GET {remote} {local}"),
            SessionCommand::GetDir { remote, local } => write!(f, "GETDIR {remote} {local}"),
            SessionCommand::Put { local, remote } => write!(f, "PUT {local} {remote}"),
            SessionCommand::Delete(path) => write!(f, "DEL {path}"),
            SessionCommand::Rename { from, to } => write!(f, "REN {from} {to}"),
            SessionCommand::LocalDelete(path) => write!(f, "LDEL {path}"),
            SessionCommand::LocalRename { from, to } => write!(f, "LREN {from} {to}"),
            SessionCommand::LocalMove { from, to } => write!(f, "LMV {from} {to}"),
            SessionCommand::Help => write!(f, "HELP"),
            SessionCommand::Quit => write!(f, "QUIT"),
            SessionCommand::Unknown(msg) => write!(f, "UNKNOWN({msg})"),
        }
    }
}
