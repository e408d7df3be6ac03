//! Command parsing functionality

use super::SessionCommand;

/// Parse user input into a SessionCommand
pub fn parse_command(input: &str) -> SessionCommand {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return SessionCommand::Unknown("Empty command".to_string());
    }

    let mut parts = trimmed.split_whitespace();
    let cmd = parts.next().unwrap_or("").to_uppercase();
    let args: Vec<&str> = parts.collect();

    match cmd.as_str() {
        "LS" => SessionCommand::List(optional_dir(&args)),
        "NAMES" => SessionCommand::Names(optional_dir(&args)),
        "GET" => match args.as_slice() {
            [remote, local] => SessionCommand::Get {
                remote: remote.to_string(),
                local: local.to_string(),
            },
            _ => usage("GET <remote> <local>"),
        },
        "GETDIR" => match args.as_slice() {
            [remote, local] => SessionCommand::GetDir {
                remote: remote.to_string(),
                local: local.to_string(),
            },
            _ => usage("GETDIR <remote> <local>"),
        },
        "PUT" => match args.as_slice() {
            [local, remote] => SessionCommand::Put {
                local: local.to_string(),
                remote: remote.to_string(),
            },
            _ => usage("PUT <local> <remote>"),
        },
        "DEL" => match args.as_slice() {
            [path] => SessionCommand::Delete(path.to_string()),
            _ => usage("DEL <remote>"),
        },
        "REN" => match args.as_slice() {
            [from, to] => SessionCommand::Rename {
                from: from.to_string(),
                to: to.to_string(),
            },
            _ => usage("REN <old> <new>"),
        },
        "LDEL" => match args.as_slice() {
            [path] => SessionCommand::LocalDelete(path.to_string()),
            _ => usage("LDEL <path>"),
        },
        "LREN" => match args.as_slice() {
            [from, to] => SessionCommand::LocalRename {
                from: from.to_string(),
                to: to.to_string(),
            },
            _ => usage("LREN <old> <new>"),
        },
        "LMV" => match args.as_slice() {
            [from, to] => SessionCommand::LocalMove {
                from: from.to_string(),
                to: to.to_string(),
            },
            _ => usage("LMV <old> <new>"),
        },
        "HELP" => SessionCommand::Help,
        "QUIT" | "EXIT" => SessionCommand::Quit,
        _ => SessionCommand::Unknown(format!("Unknown command: {cmd}")),
    }
}

fn optional_dir(args: &[&str]) -> String {
    args.first().map_or_else(|| ".".to_string(), |dir| dir.to_string())
}

fn usage(form: &str) -> SessionCommand {
    SessionCommand::Unknown(format!("Usage: {form}"))
}
