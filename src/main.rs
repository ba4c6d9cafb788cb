use std::path::PathBuf;

use clap::Parser;
use videoshelf_lib::config::Config;

#[derive(Parser)]
#[command(name = "videoshelf")]
#[command(about = "A terminal simulator of a video-sharing platform")]
#[command(version)]
struct Cli {
    /// Pipe-delimited video catalog (title | id | tags)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Configuration file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for random video selection
    #[arg(long)]
    seed: Option<u64>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mut config = Config::resolve(cli.config.as_deref())?;
    if let Some(catalog) = cli.catalog {
        config.catalog_path = catalog;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    videoshelf_lib::run(&config)
}
