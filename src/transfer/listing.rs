//! Remote directory listing parsing

use chrono::{DateTime, Local};
use log::debug;
use std::str::FromStr;

use suppaftp::list::File;

/// Type of remote entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    Symlink,
}

/// One parsed line of a LIST response
#[derive(Debug, Clone)]
pub struct RemoteEntry {
    pub name: String,
    pub kind: EntryKind,
    pub size: u64,
    pub modified: DateTime<Local>,
}

impl RemoteEntry {
    /// Parse a raw LIST line (POSIX or DOS format)
    pub fn parse(line: &str) -> Option<Self> {
        let file = match File::from_str(line.trim_end()) {
            Ok(file) => file,
            Err(e) => {
                debug!("Skipping unparseable LIST line '{}': {:?}", line, e);
                return None;
            }
        };

        let kind = if file.is_directory() {
            EntryKind::Directory
        } else if file.is_symlink() {
            EntryKind::Symlink
        } else {
            EntryKind::File
        };

        Some(Self {
            name: file.name().to_string(),
            kind,
            size: file.size() as u64,
            modified: DateTime::<Local>::from(file.modified()),
        })
    }

    pub fn is_directory(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// `.` or `..`
    pub fn is_dot_entry(&self) -> bool {
        is_dot_entry(&self.name)
    }
}

pub fn is_dot_entry(name: &str) -> bool {
    name == "." || name == ".."
}

/// Parse every line of a LIST response, dropping the ones that do not parse
pub fn parse_listing(lines: &[String]) -> Vec<RemoteEntry> {
    let entries: Vec<RemoteEntry> = lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| RemoteEntry::parse(line))
        .collect();

    debug!("Parsed {} of {} LIST lines", entries.len(), lines.len());
    entries
}
