//! Directory listing display functionality

use std::fmt;

use crate::transfer::{EntryKind, RemoteEntry};

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntryKind::File => "File",
            EntryKind::Directory => "Dir",
            EntryKind::Symlink => "Link",
        };
        f.pad(label)
    }
}

/// Format a directory listing in columns
pub fn format_directory_listing(entries: &[RemoteEntry]) -> String {
    if entries.is_empty() {
        return "Directory is empty.".to_string();
    }

    let mut output = String::new();

    // Add header
    output.push_str(&format!(
        "{:<30} {:<8} {:<10} {:<20}\n",
        "Name", "Type", "Size", "Modified"
    ));
    output.push_str(&format!("{}\n", "-".repeat(68)));

    for entry in entries {
        let size = if entry.is_directory() {
            "-".to_string()
        } else {
            format_size(entry.size)
        };

        output.push_str(&format!(
            "{:<30} {:<8} {:<10} {:<20}\n",
            truncate_name(&entry.name, 30),
            entry.kind,
            size,
            entry.modified.format("%Y-%m-%d %H:%M").to_string()
        ));
    }

    output
}

/// Truncate long names to fit in column width
fn truncate_name(name: &str, max_width: usize) -> String {
    if name.chars().count() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        let head: String = name.chars().take(max_width - 3).collect();
        format!("{head}...")
    } else {
        name.chars().take(max_width).collect()
    }
}

/// Format file size in human-readable format
pub fn format_size(size: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut size_f = size as f64;
    let mut unit_index = 0;

    while size_f >= 1024.0 && unit_index < UNITS.len() - 1 {
        size_f /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", size, UNITS[unit_index])
    } else {
        format!("{:.1} {}", size_f, UNITS[unit_index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_directory_listing() {
        let entries = vec![
            RemoteEntry::parse("-rw-r--r-- 1 ftp ftp 1536 Jan 10 12:00 report.csv").unwrap(),
            RemoteEntry::parse("drwxr-xr-x 2 ftp ftp 4096 Jan 10 12:00 archive").unwrap(),
        ];
        let output = format_directory_listing(&entries);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Name"));
        assert!(lines[2].starts_with("report.csv"));
        assert!(lines[2].contains("File"));
        assert!(lines[2].contains("1.5 KB"));
        assert!(lines[3].contains("Dir"));
    }

    #[test]
    fn test_empty_listing() {
        assert_eq!(format_directory_listing(&[]), "Directory is empty.");
    }

    #[test]
    fn test_truncate_name() {
        assert_eq!(truncate_name("short", 10), "short");
        assert_eq!(truncate_name("verylongfilename.txt", 10), "verylon...");
        assert_eq!(truncate_name("test", 2), "te");
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(1024), "1.0 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(1048576), "1.0 MB");
    }
}
