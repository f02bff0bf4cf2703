use clap::Parser;
use workbench::cli::{Cli, execute_command, init_logger_from_settings, load_and_merge_config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = load_and_merge_config(&cli).map_err(|e| {
        eprintln!("Configuration error: {:#}", e);
        e
    })?;

    init_logger_from_settings(&settings).map_err(|e| {
        eprintln!("Logger initialization error: {:#}", e);
        e
    })?;

    execute_command(&cli, settings).await?;

    Ok(())
}
