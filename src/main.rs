use std::env;
use std::process;

use ftp_commons::terminal::Terminal;
use ftp_commons::{ClientConfig, Ftp};
use log::info;

fn main() {
    // Initialize logging
    env_logger::init();

    // Optional config file path as the only argument
    let config_path = env::args().nth(1);
    if matches!(config_path.as_deref(), Some("-h" | "--help")) {
        print_usage();
        return;
    }

    let config = match ClientConfig::load(config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            print_usage();
            process::exit(1);
        }
    };
    info!("{}", config);

    let mut client: Ftp = Ftp::new();
    if let Err(e) = client.login(
        &config.server.username,
        &config.server.password,
        &config.address(),
        config.timeout(),
    ) {
        eprintln!("Failed to connect: {}", e);
        process::exit(1);
    }

    let mut terminal = Terminal::new(client, config);
    if let Err(e) = terminal.run_interactive() {
        eprintln!("Terminal error: {}", e);
        process::exit(1);
    }
}

fn print_usage() {
    println!("ftp-commons [config-file]");
    println!("Configuration file (default: ftp-commons.toml, or $FTP_COMMONS_CONFIG):");
    println!("  [server] host, host_name, port, timeout, username, password");
    println!("  [client] local_directory");
    println!("Environment overrides:");
    println!("  FTP_COMMONS__SERVER__HOST=127.0.0.1");
    println!("  FTP_COMMONS__SERVER__PORT=21");
    println!("  FTP_COMMONS__SERVER__USERNAME=anonymous");
    println!("  FTP_COMMONS__SERVER__PASSWORD=secret");
    println!("  FTP_COMMONS__CLIENT__LOCAL_DIRECTORY=./downloads");
    println!("  RUST_LOG=info");
}
