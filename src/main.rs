use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use tracing::{info, Level};

use pixel_filters::{
    config::{Config, FilterStep},
    filters::{FilterInfo, FilterRegistry},
    pipeline::FilterEngine,
};

#[derive(Parser)]
#[command(
    name = "pixel-filters",
    version,
    about = "Apply configurable filters to RGBA images",
    long_about = "Runs one filter, or a pipeline of filters from a TOML configuration file, over an image and writes the result."
)]
struct Cli {
    /// Input image (PNG, JPEG)
    #[arg(short, long, required_unless_present = "list")]
    input: Option<PathBuf>,

    /// Output image path; the format follows the extension
    #[arg(short, long, required_unless_present = "list")]
    output: Option<PathBuf>,

    /// Filter to apply, replacing any pipeline from the config file
    #[arg(short, long)]
    filter: Option<String>,

    /// Option override for --filter, as name=value (repeatable)
    #[arg(short, long = "set", value_name = "NAME=VALUE")]
    set: Vec<String>,

    /// Configuration file (optional)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// List available filters and their options, then exit
    #[arg(short, long)]
    list: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn list_filters(registry: &FilterRegistry) -> Result<()> {
    for key in registry.available_filters() {
        let filter = registry.get_filter(&key)?;
        println!("{} - {}: {}", key, filter.name(), filter.description());
        for decl in filter.options() {
            println!("    {}", decl);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(log_level).init();

    let registry = FilterRegistry::new();

    if cli.list {
        return list_filters(&registry);
    }

    // Load configuration
    let mut config = match &cli.config {
        Some(config_path) => {
            info!("Loading configuration from {:?}", config_path);
            Config::from_file(config_path)?
        }
        None => {
            info!("Using default configuration");
            Config::default()
        }
    };

    match &cli.filter {
        Some(key) => {
            let filter = registry.get_filter(key)?;
            let overrides = filter.options().parse_assignments(cli.set.iter().map(String::as_str))?;
            info!("Using {} filter with {} override(s)", filter.name(), overrides.len());
            config.pipeline = vec![FilterStep {
                filter: key.clone(),
                options: overrides,
            }];
        }
        None if !cli.set.is_empty() => bail!("--set requires --filter"),
        None => {}
    }

    if config.pipeline.is_empty() {
        bail!("Nothing to do: pass --filter or a config file with a [[pipeline]] section");
    }

    let (Some(input), Some(output)) = (cli.input, cli.output) else {
        bail!("--input and --output are required");
    };

    info!("Starting pixel-filters v{}", env!("CARGO_PKG_VERSION"));
    let engine = FilterEngine::new(config, registry);
    if let Err(e) = engine.process_file(&input, &output) {
        bail!(e.user_message());
    }

    Ok(())
}
