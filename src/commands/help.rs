//! Help text for session commands

/// Returns the help text for all session commands
pub fn get_help_text() -> &'static str {
    "Available commands:
  LS [dir]                  - List remote directory
  NAMES [dir]               - List remote file names only
  GET <remote> <local>      - Download file from server
  GETDIR <remote> <local>   - Download the files of a remote directory
  PUT <local> <remote>      - Upload file to server
  DEL <remote>              - Delete file on server
  REN <old> <new>           - Rename file on server
  LDEL <path>               - Delete local file
  LREN <old> <new>          - Rename local file
  LMV <old> <new>           - Move local file
  HELP                      - Show this help message
  QUIT                      - Log out and exit

Relative local paths are resolved against the configured local directory."
}
