use anyhow::Context;
use clap::Parser;

use tally::cli::Cli;
use tally::logging::init_tracing;
use tally::shutdown::ShutdownHandle;
use tally::ui;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = cli.load_config()?;
    cli.apply_overrides(&mut config);
    config.validate()?;

    init_tracing(&config.logging)?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting tally");

    let shutdown = ShutdownHandle::new();
    shutdown
        .install_signal_handlers()
        .context("failed to install signal handlers")?;

    ui::runtime::run(&config, shutdown).context("terminal UI failed")?;
    Ok(())
}
