//! CLI entry point for the dnswatch reverse-DNS subnet watcher.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use dnswatch_core::baseline::BaselineStore;

use dnswatch_cli::config::WatchConfig;
use dnswatch_cli::resolver::{ReverseResolver, SystemResolver};
use dnswatch_cli::watch::watch_subnet;

#[derive(Parser)]
#[command(name = "dnswatch")]
#[command(about = "Watch subnets for changed reverse-DNS hostnames")]
struct Cli {
    /// Subnets to sweep, in CIDR notation (e.g., 192.168.1.0/24).
    #[arg(required = true)]
    subnets: Vec<String>,

    /// Update the stored baselines instead of comparing against them.
    #[arg(short, long)]
    prepare: bool,

    /// Suppress OK lines; mismatches are always printed.
    #[arg(short, long)]
    quiet: bool,

    /// Override the directory holding baseline files.
    #[arg(long)]
    settings_dir: Option<PathBuf>,

    /// Config file prefix (default: dnswatch).
    #[arg(short, long, default_value = "dnswatch")]
    config: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_watch_config(&cli.config)?;

    let settings_dir = cli
        .settings_dir
        .clone()
        .unwrap_or_else(|| config.settings_dir.clone());
    let store = BaselineStore::open(settings_dir)?;

    let resolver: Arc<dyn ReverseResolver> = Arc::new(SystemResolver::from_system_conf(
        Duration::from_secs(config.lookup_timeout_secs),
    )?);

    // Each subnet argument is an isolated unit of work: a failure is
    // reported and the remaining subnets still run.
    let mut failed = 0usize;
    for subnet in &cli.subnets {
        if let Err(e) = watch_subnet(
            resolver.clone(),
            &store,
            &config,
            subnet,
            cli.prepare,
            !cli.quiet,
        )
        .await
        {
            tracing::error!(subnet = %subnet, error = %e, "Subnet failed");
            failed += 1;
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} of {} subnets failed", cli.subnets.len());
    }

    Ok(())
}

fn load_watch_config(file_prefix: &str) -> anyhow::Result<WatchConfig> {
    let cfg = config::Config::builder()
        .add_source(config::File::with_name(file_prefix).required(false))
        .add_source(
            config::Environment::with_prefix("DNSWATCH_WATCH")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    match cfg.get::<WatchConfig>("watch") {
        Ok(c) => Ok(c),
        Err(_) => Ok(WatchConfig::default()),
    }
}
