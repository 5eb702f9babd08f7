//! growl CLI entry point

use std::process::ExitCode;

use clap::Parser;

use growl::cli::{
    app::{load_merged_config, run_notify, EXIT_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    logging,
    presenter::Presenter,
    NotifyOptions,
};
use growl::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let presenter = Presenter::new();

    let store = match cli.config_file.clone() {
        Some(path) => XdgConfigStore::with_path(path),
        None => XdgConfigStore::new(),
    };

    let cli_config = cli.to_config();

    // Handle subcommands
    if let Some(Commands::Config { action }) = cli.command {
        if let Err(e) = handle_config_command(action, &store, &presenter).await {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
        return ExitCode::SUCCESS;
    }

    let config = load_merged_config(&store, cli_config).await;

    let options = NotifyOptions {
        // clap enforces the message when no subcommand is given
        message: cli.message.unwrap_or_default(),
        identifier: cli.identifier,
        dry_run: cli.dry_run,
        config,
    };

    run_notify(options).await
}
