// Binary crate: items are private to the driver.
#![allow(missing_docs)]

mod driver;
mod script;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use platform::PageId;
use site_ui::{PageConfig, Session};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::driver::Driver;

#[derive(Parser)]
#[command(name = "frontpage")]
#[command(about = "Run a scripted session against the front page", long_about = None)]
#[command(version)]
struct Cli {
    /// Script file (one command per line). Reads stdin when omitted.
    #[arg(long)]
    script: Option<PathBuf>,
    /// Page highlighted as current in the header.
    #[arg(long, default_value = "home")]
    page: PageId,
    /// Log filter used when RUST_LOG is unset.
    #[arg(long, default_value = "info")]
    log_level: String,
    /// How often the session clock catches up with the wall clock during `wait`.
    #[arg(long, default_value_t = 100)]
    tick_ms: u64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)))
        .init();

    let source = match &cli.script {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading script {}", path.display()))?,
        None => std::io::read_to_string(std::io::stdin()).context("reading script from stdin")?,
    };
    let commands = script::parse(&source)?;
    tracing::info!(commands = commands.len(), page = %cli.page, "script loaded");

    let session = Session::front_page(PageConfig {
        current_page: cli.page,
        ..PageConfig::default()
    })?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    runtime.block_on(async {
        let tick = std::time::Duration::from_millis(cli.tick_ms.max(1));
        let mut driver = Driver::new(session, tick, std::io::stdout().lock());
        driver.run(&commands).await
    })?;
    Ok(())
}
