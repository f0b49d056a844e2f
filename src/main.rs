use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracksuit_funnel_export::RunConfig;
use tracksuit_funnel_export::config::{DEFAULT_BASE_URL, DEFAULT_CONCURRENCY, DEFAULT_WAVE_DATE};

#[derive(Parser, Debug)]
#[clap(about, version, author)]
struct Args {
    /// JWT token for authenticating against the API
    #[clap(long, env = "TRACKSUIT_API_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// The start date for filtering survey responses
    #[clap(long, default_value = DEFAULT_WAVE_DATE)]
    start: String,

    /// The end date for filtering survey responses
    #[clap(long, default_value = DEFAULT_WAVE_DATE)]
    end: String,

    /// If set, suppress log output
    #[clap(short, long)]
    quiet: bool,

    /// Directory to write results. If omitted, results will be written to stdout.
    #[clap(short = 'o', long = "dest_dir")]
    dest_dir: Option<PathBuf>,

    /// Base address of the API
    #[clap(long = "base_url", env = "TRACKSUIT_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Number of brands downloaded at the same time
    #[clap(long, default_value_t = DEFAULT_CONCURRENCY)]
    concurrency: usize,
}

fn init_logger(quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Error
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.quiet);

    let config = RunConfig::new(args.token, args.start, args.end, args.quiet, args.dest_dir)?
        .with_base_url(args.base_url)
        .with_concurrency(args.concurrency)?;

    let summary = tracksuit_funnel_export::download_all(&config).await?;
    log::debug!("{:?}", summary);

    Ok(())
}
