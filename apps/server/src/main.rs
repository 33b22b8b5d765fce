use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use sts_kernel::domain::config::RootConfig;
use sts_logger::Logger;
use sts_server::Bootstrap;
use tracing::info;

/// Identity server STS.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Configuration file (TOML, JSON, YAML); `STS__*` variables override its values.
    #[arg(short, long, env = "STS_CONFIG")]
    config: Option<PathBuf>,

    /// Log filter directives (e.g. `sts_kernel=debug`); `RUST_LOG` is used otherwise.
    #[arg(long, env = "STS_LOG")]
    log: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut logger = Logger::builder().name(env!("CARGO_PKG_NAME"));
    if let Some(directives) = args.log {
        logger = logger.env_filter(directives);
    }
    let _log = logger.init()?;

    let mut builder = Bootstrap::builder();
    if let Some(path) = args.config {
        builder = builder.config_path(path);
    }

    let state = builder.build().context("Identity server startup failed")?.into_state();
    info!(
        registration = state.register_configuration().enabled,
        "Identity server configuration ready"
    );

    Ok(())
}
