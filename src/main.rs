mod cli;

use anyhow::Result;
use clap::Parser;
use cli::commands;

fn main() {
    // Logs go to stderr so stdout only carries the report
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();

    match run_command(cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            commands::display_error(&err);
            std::process::exit(1);
        }
    }
}

fn run_command(cli: cli::Cli) -> Result<i32> {
    use cli::Commands;

    let config = cli.config.as_deref();

    match &cli.command {
        None => commands::strip::handle(&cli.strip, config),
        Some(Commands::Strip(args)) => commands::strip::handle(args, config),
        Some(Commands::Preview(args)) => commands::preview::handle(args, config),
        Some(Commands::Init { path }) => commands::init::handle(path).map(|()| 0),
        Some(Commands::Config { action }) => commands::config::handle(action, config).map(|()| 0),
    }
}
