use clap::Parser;
use tick::cli::commands::Cli;
use tick::cli::handlers;
use tick::io::{config_io, logging};

fn main() {
    let cli = Cli::parse();

    let config = match config_io::read_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };
    let storage_dir = config_io::resolve_storage_dir(cli.data_dir.as_deref(), &config);

    if let Err(e) = logging::init_logging(&config.log, &storage_dir) {
        eprintln!("warning: logging disabled: {}", e);
    }

    let result = match cli.command {
        // No subcommand → launch TUI
        None => tick::tui::run(&config, &storage_dir),
        Some(command) => handlers::dispatch(command, cli.json, &storage_dir),
    };
    if let Err(e) = result {
        tracing::error!(error = %e, "command failed");
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
