use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use termlife::config::{self, LifeConfig, Overrides};
use termlife::settings::Settings;
use termlife::{life, Board};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "termlife")]
#[command(version)]
#[command(about = "Conway's Game of Life on a wrapping board, in the terminal", long_about = None)]
struct Cli {
    /// Board side length in cells [default: 25]
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    dimensions: Option<u64>,

    /// Initial pattern placed at the board center [default: glider]
    #[arg(short, long)]
    pattern: Option<String>,

    /// Time between generations, e.g. 250ms, 1s, 1.5s [default: 1s]
    #[arg(short, long, value_parser = config::parse_interval)]
    interval: Option<Duration>,

    /// Print generations to stdout (no interactive display)
    #[arg(long)]
    print: bool,

    /// Stop after this many generations have been shown
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    generations: Option<u64>,

    /// List the available patterns and exit
    #[arg(short, long)]
    list: bool,

    /// Settings file to read instead of the default location
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn init_tracing() {
    // RUST_LOG=termlife=debug; stderr keeps stdout clean for --print
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact()
        .try_init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let settings = Settings::load(cli.config.as_deref())?;
    let catalog = settings.catalog()?;

    if cli.list {
        for name in catalog.names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let overrides = Overrides {
        dimensions: cli.dimensions.map(|d| d as usize),
        pattern: cli.pattern,
        interval: cli.interval,
        print: cli.print,
        generations: cli.generations,
    };
    let config = LifeConfig::resolve(overrides, &settings).context("invalid configuration")?;

    let pattern = catalog.get(&config.pattern)?;
    let mut board = Board::new(config.dimensions, pattern)
        .with_context(|| format!("cannot place pattern {:?}", config.pattern))?;

    life::run(&config, &mut board)?;
    Ok(())
}
